//! CodeFluent Server
//!
//! Run with: cargo run --bin codefluent
//!
//! Reads `~/.config/codefluent/config.toml` or `./config.toml`, then applies
//! `CODEFLUENT_*` environment overrides. `RUST_LOG` takes precedence over
//! `logging.level`.

use anyhow::Context;
use codefluent::api::{serve, AppState};
use codefluent::config::{Config, LoggingConfig};
use codefluent::data::DataStore;
use codefluent::quickwins::source_from_config;
use codefluent::scoring::{scorer_from_config, ScoringService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting CodeFluent v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", config.data.dir);

    let store = DataStore::new(&config.data.dir);

    match &config.scoring.endpoint {
        Some(endpoint) => tracing::info!("Session scorer: {}", endpoint),
        None => tracing::warn!("No scorer endpoint configured; POST /api/score will report errors"),
    }
    let scorer = scorer_from_config(&config.scoring).context("Failed to build scorer client")?;
    let scoring = ScoringService::new(store.clone(), scorer, config.scoring.max_prompts);

    let quickwins = source_from_config(&config.quickwins, store.clone())
        .context("Failed to build quick-win client")?;

    let state = AppState::new(store, scoring, quickwins);
    serve(state, &config).await.context("Server failed")?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("codefluent={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
