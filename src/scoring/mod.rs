//! Fluency Scoring
//!
//! Score cache, cross-session aggregate, and the client for the external
//! scoring service.

pub mod aggregate;
pub mod scorer;
pub mod service;

pub use aggregate::{aggregate_json, compute_aggregate, Aggregate, BEHAVIORS};
pub use scorer::{
    parse_score_payload, scorer_from_config, strip_code_fence, HttpScorer, ScoreRequest,
    SessionScorer, UnconfiguredScorer,
};
pub use service::{ScoreBatch, ScoringService};

use thiserror::Error;

/// Errors raised while scoring sessions
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("No scorer endpoint configured")]
    NotConfigured,

    #[error("No extracted sessions; run `codefluent-cli extract` first")]
    NoSessions,

    #[error("Scorer unavailable")]
    Unavailable,

    #[error("Scorer request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Scorer error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid scorer response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Data(#[from] crate::data::DataError),
}

/// Result type alias for scoring operations
pub type ScoringResult<T> = Result<T, ScoringError>;
