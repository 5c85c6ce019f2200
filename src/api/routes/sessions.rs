//! Session Routes
//!
//! - GET /api/sessions?limit=50&project= - Extracted sessions

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::api::dto::{SessionsQuery, SessionsResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/sessions
pub async fn list_sessions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionsQuery>,
) -> ApiResult<Json<SessionsResponse>> {
    let Some(file) = state.store.load_sessions().await? else {
        return Ok(Json(SessionsResponse {
            sessions: Vec::new(),
            metadata: json!({}),
        }));
    };

    let sessions = file
        .sessions
        .into_iter()
        .filter(|s| query.project.as_deref().map_or(true, |p| s.project == p))
        .take(query.limit)
        .collect();

    let metadata = file
        .metadata
        .and_then(|m| serde_json::to_value(m).ok())
        .unwrap_or_else(|| json!({}));

    Ok(Json(SessionsResponse { sessions, metadata }))
}
