//! Health Routes
//!
//! Health check endpoints for monitoring and probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (initial load settled)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::{AppState, LoadState};

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the initial load has settled (successfully or not);
/// the view can serve meaningful responses either way.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    let data = state.data.read().await;
    if data.rounds.is_loading() && data.people.is_loading() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

/// GET /health
///
/// Full health status with per-collection details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let data = state.data.read().await;

    let rounds_status = collection_status(&data.rounds);
    let people_status = collection_status(&data.people);

    let overall_status = if data.rounds.is_ready() && data.people.is_ready() {
        "healthy"
    } else if data.rounds.is_ready() || data.people.is_ready() {
        "degraded"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: overall_status.to_string(),
        rounds: rounds_status.to_string(),
        people: people_status.to_string(),
        last_refresh: data.last_refresh.map(|t| t.to_rfc3339()),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn collection_status<T>(state: &LoadState<T>) -> &'static str {
    match state {
        LoadState::Loading => "loading",
        LoadState::Ready(_) => "ok",
        LoadState::Unavailable => "unavailable",
    }
}
