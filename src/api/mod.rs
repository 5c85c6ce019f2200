//! CodeFluent HTTP API
//!
//! Serves the dashboard and the JSON endpoints it reads, built with Axum.
//!
//! # Endpoints
//!
//! - `GET /api/usage` - ccusage reports (`daily`, `monthly`, `session`)
//! - `GET /api/sessions?limit=&project=` - Extracted sessions
//! - `GET /api/scores` - Cached fluency scores and their aggregate
//! - `POST /api/score` - Score sessions through the external scorer
//! - `GET /api/quickwins` - Quick-win suggestions
//! - `GET /health`, `GET /health/live` - Health probes
//! - everything else - dashboard assets from `server.static_dir`
//!
//! # Example
//!
//! ```rust,ignore
//! use codefluent::api::{serve, AppState};
//! use codefluent::config::Config;
//! use codefluent::data::DataStore;
//! use codefluent::quickwins::source_from_config;
//! use codefluent::scoring::{scorer_from_config, ScoringService};
//!
//! let config = Config::load_default();
//! let store = DataStore::new(&config.data.dir);
//! let scoring = ScoringService::new(store.clone(), scorer_from_config(&config.scoring)?, 20);
//! let quickwins = source_from_config(&config.quickwins, store.clone())?;
//! serve(AppState::new(store, scoring, quickwins), &config).await?;
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::Config;

/// Build the router with all routes and middleware.
///
/// Unknown paths fall through to `static_dir`, with `index.html` served for
/// anything that is not a file so the dashboard can load.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let api_routes = Router::new()
        .route("/usage", get(routes::usage::get_usage))
        .route("/sessions", get(routes::sessions::list_sessions))
        .route("/scores", get(routes::scores::get_scores))
        .route("/score", post(routes::scores::score_sessions))
        .route("/quickwins", get(routes::quickwins::get_quickwins));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let assets = ServeDir::new(static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the server and run until Ctrl+C or SIGTERM
pub async fn serve(state: AppState, config: &Config) -> Result<(), ApiError> {
    let router = build_router(state, Path::new(&config.server.static_dir));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("CodeFluent listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("CodeFluent shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataStore, SessionRecord, SessionScore, SessionsFile};
    use crate::quickwins::FileQuickWinSource;
    use crate::scoring::{ScoreRequest, ScoringError, ScoringService, SessionScorer};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    struct FixedScorer;

    #[async_trait]
    impl SessionScorer for FixedScorer {
        async fn score(&self, request: &ScoreRequest) -> Result<SessionScore, ScoringError> {
            if request.session_id == "broken" {
                return Err(ScoringError::Timeout);
            }
            Ok(SessionScore {
                fluency_behaviors: Some(
                    [("clarifying_goals".to_string(), true), ("checking_facts".to_string(), false)]
                        .into_iter()
                        .collect(),
                ),
                coding_pattern: Some("conceptual_inquiry".to_string()),
                overall_score: Some(81.0),
                ..Default::default()
            })
        }
    }

    fn session(id: &str, project: &str) -> SessionRecord {
        SessionRecord {
            id: id.to_string(),
            project: project.to_string(),
            project_path_encoded: String::new(),
            started_at: None,
            ended_at: None,
            user_prompts: vec!["explain this".to_string()],
            user_message_count: 1,
            assistant_message_count: 1,
            tool_use_count: 0,
            tools_used: Vec::new(),
            thinking_count: 0,
            used_plan_mode: false,
            model: None,
            claude_code_version: None,
            git_branch: None,
        }
    }

    fn create_test_app() -> (Router, TempDir) {
        let dir = tempdir().unwrap();
        let store = DataStore::new(dir.path().join("data"));
        let static_dir = dir.path().join("static");
        fs::create_dir_all(&static_dir).unwrap();
        fs::write(static_dir.join("index.html"), "<html>codefluent</html>").unwrap();

        let scoring = ScoringService::new(store.clone(), Box::new(FixedScorer), 20);
        let quickwins = Box::new(FileQuickWinSource::new(store.clone()));
        let state = AppState::new(store, scoring, quickwins);

        (build_router(state, &static_dir), dir)
    }

    fn seed_sessions(dir: &TempDir, sessions: Vec<SessionRecord>) {
        let prompts = dir.path().join("data").join("prompts");
        fs::create_dir_all(&prompts).unwrap();
        let file = SessionsFile {
            sessions,
            metadata: None,
        };
        fs::write(prompts.join("sessions.json"), serde_json::to_vec(&file).unwrap()).unwrap();
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _dir) = create_test_app();
        let (status, body) = get(app.clone(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");

        let (status, _) = get(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_usage_only_present_reports() {
        let (app, dir) = create_test_app();
        let usage = dir.path().join("data").join("ccusage");
        fs::create_dir_all(&usage).unwrap();
        fs::write(usage.join("daily.json"), r#"{"daily": []}"#).unwrap();

        let (status, body) = get(app, "/api/usage").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"daily": {"daily": []}}));
    }

    #[tokio::test]
    async fn test_sessions_missing_file() {
        let (app, _dir) = create_test_app();
        let (status, body) = get(app, "/api/sessions").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"sessions": [], "metadata": {}}));
    }

    #[tokio::test]
    async fn test_sessions_filter_and_limit() {
        let (app, dir) = create_test_app();
        seed_sessions(
            &dir,
            vec![session("a", "web"), session("b", "cli"), session("c", "web")],
        );

        let (_, body) = get(app.clone(), "/api/sessions?project=web").await;
        let ids: Vec<_> = body["sessions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);

        let (_, body) = get(app, "/api/sessions?limit=1").await;
        assert_eq!(body["sessions"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_scores_empty_cache() {
        let (app, _dir) = create_test_app();
        let (status, body) = get(app, "/api/scores").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"scores": {}, "aggregate": {}}));
    }

    #[tokio::test]
    async fn test_score_then_read_cache() {
        let (app, dir) = create_test_app();
        seed_sessions(&dir, vec![session("a", "web"), session("broken", "web")]);

        let (status, body) = post_json(
            app.clone(),
            "/api/score",
            json!({"session_ids": ["a", "broken", "missing"]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scores"]["a"]["overall_score"], 81.0);
        assert_eq!(body["scores"]["broken"]["session_id"], "broken");
        assert!(body["scores"]["broken"]["error"].is_string());
        assert!(body["scores"].get("missing").is_none());
        assert_eq!(body["aggregate"]["sessions_scored"], 1);
        assert_eq!(body["aggregate"]["average_score"], 81);
        assert_eq!(body["aggregate"]["behavior_prevalence"]["clarifying_goals"], 1.0);
        assert_eq!(body["aggregate"]["pattern_distribution"]["conceptual_inquiry"], 1);

        let (_, cached) = get(app, "/api/scores").await;
        assert!(cached["scores"].get("a").is_some());
        assert!(cached["scores"].get("broken").is_none());
    }

    #[tokio::test]
    async fn test_score_without_sessions_is_404() {
        let (app, _dir) = create_test_app();
        let (status, body) = post_json(app, "/api/score", json!({"session_ids": ["a"]})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "SESSIONS_NOT_FOUND");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_score_invalid_body() {
        let (app, _dir) = create_test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/score")
                    .header("Content-Type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_score_wrong_shape_is_validation_error() {
        let (app, _dir) = create_test_app();
        let (status, body) = post_json(app, "/api/score", json!({"session_ids": "a"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Validation error:"));
    }

    #[tokio::test]
    async fn test_quickwins_failure_is_200() {
        let (app, _dir) = create_test_app();
        let (status, body) = get(app, "/api/quickwins").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suggestions"], json!([]));
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_quickwins_from_file() {
        let (app, dir) = create_test_app();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(
            dir.path().join("data").join("quickwins.json"),
            r#"[{"repo": "cf", "task": "Add tests", "prompt": "Write tests", "estimated_minutes": 10, "category": "testing"}]"#,
        )
        .unwrap();

        let (_, body) = get(app, "/api/quickwins").await;
        assert_eq!(body["suggestions"][0]["task"], "Add tests");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_static_fallback_serves_index() {
        let (app, _dir) = create_test_app();
        let response = app
            .oneshot(Request::builder().uri("/anything").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"<html>codefluent</html>");
    }
}
