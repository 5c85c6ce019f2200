//! Quick Win Routes
//!
//! - GET /api/quickwins - Suggested short tasks

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::QuickWinsResponse;
use crate::api::state::AppState;

/// GET /api/quickwins
///
/// Always 200; a failing source yields an empty list with the error text.
pub async fn get_quickwins(State(state): State<Arc<AppState>>) -> Json<QuickWinsResponse> {
    match state.quickwins.suggestions().await {
        Ok(suggestions) => Json(QuickWinsResponse {
            suggestions,
            error: None,
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Quick wins unavailable");
            Json(QuickWinsResponse {
                suggestions: Vec::new(),
                error: Some(e.to_string()),
            })
        }
    }
}
