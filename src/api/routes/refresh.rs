//! Refresh Route
//!
//! Re-fetches both collections from the funding backend and replaces the
//! resident dataset wholesale.
//!
//! - POST /api/v1/refresh

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::RefreshResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// POST /api/v1/refresh
pub async fn trigger_refresh(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RefreshResponse>> {
    let summary = state.refresh().await;

    let status = match (summary.rounds_loaded, summary.people_loaded) {
        (Some(_), Some(_)) => "ok",
        (None, None) => "failed",
        _ => "partial",
    };

    Ok(Json(RefreshResponse {
        status: status.to_string(),
        rounds_loaded: summary.rounds_loaded,
        people_loaded: summary.people_loaded,
        duration_ms: summary.duration_ms,
    }))
}
