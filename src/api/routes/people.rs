//! People Routes
//!
//! Table view over the resident people collection plus per-person avatars.
//!
//! - GET /api/v1/people - Searched, sorted, paginated people slice
//! - GET /api/v1/people/:id/avatar - Avatar bytes or the placeholder

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{PersonRow, TableQuery, TableResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::view_state_for;
use crate::api::state::{AppState, LoadState};
use crate::client::{AvatarState, AVATAR_PLACEHOLDER_SVG};
use crate::model::PersonRecord;
use crate::table::compose;

/// GET /api/v1/people
pub async fn list_people(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> ApiResult<Json<TableResponse<PersonRow>>> {
    let view = view_state_for::<PersonRecord>(&query, state.config.default_page_size)?;

    let data = state.data.read().await;
    let response = match &data.people {
        LoadState::Loading => TableResponse::loading(view.page_size),
        LoadState::Unavailable => TableResponse::unavailable(),
        LoadState::Ready(records) => {
            let slice = compose(records, &view);
            let rows = slice.rows.iter().map(PersonRow::from).collect();
            TableResponse::ready(&slice, rows)
        }
    };

    Ok(Json(response))
}

/// GET /api/v1/people/:id/avatar
///
/// Serves the fetched avatar bytes, or the built-in placeholder when the
/// secondary fetch failed or never ran. Unknown person ids are 404.
pub async fn get_avatar(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let data = state.data.read().await;

    let known = match &data.people {
        LoadState::Ready(records) => records.iter().any(|p| p.id == id),
        _ => false,
    };
    if !known {
        return Err(ApiError::NotFound(format!("Person {} not found", id)));
    }

    let response = match data.avatars.get(&id) {
        Some(AvatarState::Ready {
            bytes,
            content_type,
        }) => (
            [(header::CONTENT_TYPE, content_type.clone())],
            bytes.clone(),
        )
            .into_response(),
        _ => (
            [(header::CONTENT_TYPE, "image/svg+xml".to_string())],
            AVATAR_PLACEHOLDER_SVG.as_bytes().to_vec(),
        )
            .into_response(),
    };

    Ok(response)
}
