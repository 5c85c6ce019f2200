//! External Session Scorer
//!
//! The fluency assessment itself runs in an external service. This module
//! holds the request contract and an HTTP client for it.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use super::ScoringError;
use crate::config::ScoringConfig;
use crate::data::{SessionRecord, SessionScore};

/// Payload sent to the scorer for one session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRequest {
    pub session_id: String,
    pub prompts: Vec<String>,
    pub used_plan_mode: bool,
    pub thinking_count: usize,
    pub tools_used: Vec<String>,
}

impl ScoreRequest {
    /// Build a request from the first `max_prompts` prompts of a session
    pub fn from_session(session: &SessionRecord, max_prompts: usize) -> Self {
        Self {
            session_id: session.id.clone(),
            prompts: session.user_prompts.iter().take(max_prompts).cloned().collect(),
            used_plan_mode: session.used_plan_mode,
            thinking_count: session.thinking_count,
            tools_used: session.tools_used.clone(),
        }
    }
}

/// Anything able to assess a session
#[async_trait]
pub trait SessionScorer: Send + Sync {
    async fn score(&self, request: &ScoreRequest) -> Result<SessionScore, ScoringError>;
}

/// Scorer reached over HTTP
pub struct HttpScorer {
    client: Client,
    endpoint: String,
}

impl HttpScorer {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ScoringError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl SessionScorer for HttpScorer {
    async fn score(&self, request: &ScoreRequest) -> Result<SessionScore, ScoringError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ScoringError::Timeout
                } else if e.is_connect() {
                    ScoringError::Unavailable
                } else {
                    ScoringError::Request(e)
                }
            })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ScoringError::ApiError {
                status: status.as_u16(),
                message: text,
            });
        }

        parse_score_payload(&text)
    }
}

/// Stand-in used when no scorer endpoint is configured
pub struct UnconfiguredScorer;

#[async_trait]
impl SessionScorer for UnconfiguredScorer {
    async fn score(&self, _request: &ScoreRequest) -> Result<SessionScore, ScoringError> {
        Err(ScoringError::NotConfigured)
    }
}

/// Pick the scorer described by the config
pub fn scorer_from_config(config: &ScoringConfig) -> Result<Box<dyn SessionScorer>, ScoringError> {
    match &config.endpoint {
        Some(endpoint) => {
            let timeout = Duration::from_secs(config.request_timeout_secs);
            Ok(Box::new(HttpScorer::new(endpoint.clone(), timeout)?))
        }
        None => Ok(Box::new(UnconfiguredScorer)),
    }
}

/// Decode a scorer response body, tolerating a surrounding code fence
pub fn parse_score_payload(text: &str) -> Result<SessionScore, ScoringError> {
    Ok(serde_json::from_str(strip_code_fence(text))?)
}

/// Strip a leading ```lang line and trailing ``` from model output
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    if !text.starts_with("```") {
        return text;
    }

    let body = match text.split_once('\n') {
        Some((_, rest)) => rest,
        None => return "",
    };

    match body.rfind("```") {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}
