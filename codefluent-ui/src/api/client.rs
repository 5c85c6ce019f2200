//! HTTP API Client
//!
//! One function per CodeFluent endpoint, each issuing a single request.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::{get_api_base, ApiError};
use crate::model::{
    DailyUsage, FluencyScore, QuickWinsResponse, ScoreRequest, Session, SessionsResponse,
    UsageResponse,
};

/// Error body sent by the server on non-2xx responses
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorDetail {
    message: String,
}

fn url(path: &str) -> String {
    format!("{}/api/{}", get_api_base(), path)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error.message,
            Err(_) => response.status_text(),
        };
        return Err(ApiError::Network(format!("HTTP {}: {}", status, message)));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

/// GET /api/usage, flattened to the daily rows
pub async fn fetch_usage() -> Result<Vec<DailyUsage>, ApiError> {
    let usage: UsageResponse = get("usage").await?;
    Ok(usage.into_daily())
}

/// GET /api/sessions
pub async fn fetch_sessions() -> Result<Vec<Session>, ApiError> {
    let sessions: SessionsResponse = get("sessions").await?;
    Ok(sessions.sessions)
}

/// POST /api/score
pub async fn score_sessions(session_ids: Vec<String>) -> Result<FluencyScore, ApiError> {
    let response = Request::post(&url("score"))
        .json(&ScoreRequest { session_ids })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

/// GET /api/scores
pub async fn fetch_cached_scores() -> Result<FluencyScore, ApiError> {
    get("scores").await
}

/// GET /api/quickwins
pub async fn fetch_quickwins() -> Result<QuickWinsResponse, ApiError> {
    get("quickwins").await
}
