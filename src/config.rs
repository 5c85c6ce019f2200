//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub quickwins: QuickWinsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built dashboard (index.html, wasm bundle)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

/// Location of the ccusage exports, extracted prompts and score cache
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: String,

    /// Claude Code transcript root read by the extractor
    #[serde(default = "default_claude_projects_dir")]
    pub claude_projects_dir: String,
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_claude_projects_dir() -> String {
    dirs::home_dir()
        .map(|p| p.join(".claude").join("projects").to_string_lossy().to_string())
        .unwrap_or_else(|| "./.claude/projects".to_string())
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            claude_projects_dir: default_claude_projects_dir(),
        }
    }
}

/// External session scorer
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Scorer URL; sessions cannot be scored when unset
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default = "default_scoring_timeout")]
    pub request_timeout_secs: u64,

    /// Prompts sent per session
    #[serde(default = "default_max_prompts")]
    pub max_prompts: usize,
}

fn default_scoring_timeout() -> u64 {
    120
}

fn default_max_prompts() -> usize {
    20
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            request_timeout_secs: default_scoring_timeout(),
            max_prompts: default_max_prompts(),
        }
    }
}

/// External quick-win generator
#[derive(Debug, Clone, Deserialize)]
pub struct QuickWinsConfig {
    /// Generator URL; falls back to `<data>/quickwins.json` when unset
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default = "default_quickwins_timeout")]
    pub request_timeout_secs: u64,
}

fn default_quickwins_timeout() -> u64 {
    60
}

impl Default for QuickWinsConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            request_timeout_secs: default_quickwins_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("codefluent").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("CODEFLUENT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CODEFLUENT_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(dir) = lookup("CODEFLUENT_STATIC_DIR") {
            self.server.static_dir = dir;
        }

        if let Some(dir) = lookup("CODEFLUENT_DATA_DIR") {
            self.data.dir = dir;
        }
        if let Some(dir) = lookup("CODEFLUENT_CLAUDE_DIR") {
            self.data.claude_projects_dir = dir;
        }

        if let Some(url) = lookup("CODEFLUENT_SCORER_URL") {
            self.scoring.endpoint = Some(url);
        }
        if let Some(url) = lookup("CODEFLUENT_QUICKWINS_URL") {
            self.quickwins.endpoint = Some(url);
        }

        if let Some(level) = lookup("CODEFLUENT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CODEFLUENT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Socket address string for the HTTP server
    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# CodeFluent Configuration
#
# Environment variables override these settings:
# - CODEFLUENT_HOST
# - CODEFLUENT_PORT
# - CODEFLUENT_STATIC_DIR
# - CODEFLUENT_DATA_DIR
# - CODEFLUENT_CLAUDE_DIR
# - CODEFLUENT_SCORER_URL
# - CODEFLUENT_QUICKWINS_URL
# - CODEFLUENT_LOG_LEVEL
# - CODEFLUENT_LOG_FORMAT

[server]
host = "127.0.0.1"
port = 8000

# Built dashboard assets
static_dir = "static"

[data]
# Holds ccusage/*.json, prompts/sessions.json, scores.json, quickwins.json
dir = "data"

# Claude Code transcripts read by `codefluent-cli extract`
# claude_projects_dir = "~/.claude/projects"

[scoring]
# External session scorer (POST, one session per request)
# endpoint = "http://localhost:9000/score"
request_timeout_secs = 120

# Prompts sent per session
max_prompts = 20

[quickwins]
# External quick-win generator (GET); data/quickwins.json is used when unset
# endpoint = "http://localhost:9000/quickwins"
request_timeout_secs = 60

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
