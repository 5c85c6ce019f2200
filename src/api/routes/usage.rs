//! Usage Routes
//!
//! - GET /api/usage - ccusage reports found in the data directory

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::UsageResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/usage
///
/// Keys are `daily`, `monthly` and `session`, each present only when its
/// report file exists.
pub async fn get_usage(State(state): State<Arc<AppState>>) -> ApiResult<Json<UsageResponse>> {
    let reports = state.store.load_usage().await?;
    Ok(Json(reports))
}
