//! Scoring Routes
//!
//! - GET /api/scores - Cached scores with their aggregate
//! - POST /api/score - Score sessions, reusing the cache

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ScoreRequestBody, ScoresResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/scores
pub async fn get_scores(State(state): State<Arc<AppState>>) -> ApiResult<Json<ScoresResponse>> {
    let batch = state.scoring.cached().await?;
    Ok(Json(batch.into()))
}

/// POST /api/score
///
/// Per-session scorer failures come back as `{error, session_id}` entries;
/// only a missing sessions file fails the whole request. A body that is not
/// `{session_ids: [...]}` is a 400 `VALIDATION_ERROR`.
pub async fn score_sessions(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScoreRequestBody>, JsonRejection>,
) -> ApiResult<Json<ScoresResponse>> {
    let Json(body) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    tracing::info!(
        sessions = body.session_ids.len(),
        force = body.force_rescore,
        "Scoring requested"
    );

    let batch = state
        .scoring
        .score_sessions(&body.session_ids, body.force_rescore)
        .await?;

    Ok(Json(batch.into()))
}
