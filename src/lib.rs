//! # CodeFluent
//!
//! Claude Code usage analytics and AI fluency scoring.
//!
//! ## Modules
//!
//! - [`extract`]: Pulls user prompts out of Claude Code JSONL transcripts
//! - [`data`]: The data directory (ccusage reports, sessions, score cache)
//! - [`scoring`]: Score cache, aggregate, external scorer client
//! - [`quickwins`]: Quick-win suggestions
//! - [`api`]: HTTP server for the dashboard
//! - [`config`]: TOML config with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use codefluent::extract::{extract_sessions, write_sessions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let file = extract_sessions(Path::new("/home/me/.claude/projects"), Some(100))?;
//!     write_sessions(Path::new("data/prompts"), &file)?;
//!     println!("Extracted {} sessions", file.sessions.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod data;
pub mod extract;
pub mod quickwins;
pub mod scoring;

pub use config::Config;
pub use data::DataStore;
