//! Quick Wins
//!
//! Short task suggestions come from an external generator when one is
//! configured, otherwise from a pre-generated `quickwins.json`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::QuickWinsConfig;
use crate::data::{DataError, DataStore, QuickWin};
use crate::scoring::strip_code_fence;

/// Errors producing quick-win suggestions
#[derive(Error, Debug)]
pub enum QuickWinError {
    #[error("No quick wins available; configure a generator or provide quickwins.json")]
    NotAvailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Generator error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid generator response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Data(#[from] DataError),
}

/// Source of suggestions
#[async_trait]
pub trait QuickWinSource: Send + Sync {
    async fn suggestions(&self) -> Result<Vec<QuickWin>, QuickWinError>;
}

/// Generator reached over HTTP
pub struct HttpQuickWinSource {
    client: Client,
    endpoint: String,
}

impl HttpQuickWinSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, QuickWinError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl QuickWinSource for HttpQuickWinSource {
    async fn suggestions(&self) -> Result<Vec<QuickWin>, QuickWinError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(QuickWinError::ApiError {
                status: status.as_u16(),
                message: text,
            });
        }

        parse_suggestions(&text)
    }
}

/// Suggestions read from the data directory
pub struct FileQuickWinSource {
    store: DataStore,
}

impl FileQuickWinSource {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl QuickWinSource for FileQuickWinSource {
    async fn suggestions(&self) -> Result<Vec<QuickWin>, QuickWinError> {
        self.store
            .load_quickwins()
            .await?
            .ok_or(QuickWinError::NotAvailable)
    }
}

/// Pick the source described by the config
pub fn source_from_config(
    config: &QuickWinsConfig,
    store: DataStore,
) -> Result<Box<dyn QuickWinSource>, QuickWinError> {
    match &config.endpoint {
        Some(endpoint) => {
            let timeout = Duration::from_secs(config.request_timeout_secs);
            Ok(Box::new(HttpQuickWinSource::new(endpoint.clone(), timeout)?))
        }
        None => Ok(Box::new(FileQuickWinSource::new(store))),
    }
}

/// Accepts a bare array or `{"suggestions": [...]}`, optionally fenced
pub fn parse_suggestions(text: &str) -> Result<Vec<QuickWin>, QuickWinError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Payload {
        List(Vec<QuickWin>),
        Wrapped { suggestions: Vec<QuickWin> },
    }

    let payload: Payload = serde_json::from_str(strip_code_fence(text))?;
    Ok(match payload {
        Payload::List(list) => list,
        Payload::Wrapped { suggestions } => suggestions,
    })
}
