//! CodeFluent CLI
//!
//! Command-line interface for CodeFluent operations:
//! - Extract prompts from Claude Code transcripts
//! - Generate a default config file
//! - Check server status

use anyhow::Context;
use clap::{Parser, Subcommand};
use codefluent::config::{generate_default_config, Config};
use codefluent::extract::{extract_sessions, write_sessions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codefluent")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Claude Code usage analytics and AI fluency scoring")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract user prompts from Claude Code session transcripts
    Extract {
        /// Claude projects directory (default: data.claude_projects_dir)
        #[arg(short, long)]
        path: Option<PathBuf>,
        /// Output directory (default: <data.dir>/prompts)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Keep only the N most recent sessions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show server status
    Status {
        /// Server URL
        #[arg(long, default_value = "http://localhost:8000")]
        api_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            path,
            output,
            limit,
        } => {
            let config = Config::load_default();
            let root = path.unwrap_or_else(|| PathBuf::from(&config.data.claude_projects_dir));
            let output = output.unwrap_or_else(|| PathBuf::from(&config.data.dir).join("prompts"));

            println!("Reading from: {}", root.display());

            let file = extract_sessions(&root, limit)
                .with_context(|| format!("Extraction from {} failed", root.display()))?;

            if let Some(meta) = &file.metadata {
                println!(
                    "Extracted {} prompts from {} sessions across {} projects",
                    meta.total_prompts, meta.total_sessions, meta.total_projects
                );
            }

            let written = write_sessions(&output, &file)?;
            println!("Written to {}", written.display());
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    std::fs::write(&path, &content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Config written to: {}", path.display());
                }
                None => {
                    println!("{}", content);
                }
            }
        }

        Commands::Status { api_url } => {
            let client = reqwest::Client::new();
            let response = client.get(format!("{}/health", api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("CodeFluent v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "Server Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    if let Some(dir) = health["data_dir"].as_str() {
                        println!("Data directory: {}", dir);
                    }
                    if health["sessions_extracted"].as_bool() == Some(false) {
                        println!();
                        println!("No sessions extracted yet. Run:");
                        println!("  codefluent-cli extract");
                    }

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("Server returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to CodeFluent at {}", api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin codefluent");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
