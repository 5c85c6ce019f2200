//! API Error Types
//!
//! Error types for the API layer and their conversion to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::data::DataError;
use crate::scoring::ScoringError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Data directory read/write failure
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Scoring failed as a whole
    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Data(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATA_ERROR"),
            ApiError::Scoring(e) => match e {
                ScoringError::NoSessions => (StatusCode::NOT_FOUND, "SESSIONS_NOT_FOUND"),
                ScoringError::NotConfigured | ScoringError::Unavailable => {
                    (StatusCode::SERVICE_UNAVAILABLE, "SCORER_UNAVAILABLE")
                }
                ScoringError::Timeout => (StatusCode::GATEWAY_TIMEOUT, "SCORER_TIMEOUT"),
                ScoringError::Data(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATA_ERROR"),
                _ => (StatusCode::BAD_GATEWAY, "SCORING_ERROR"),
            },
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
