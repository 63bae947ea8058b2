//! Funding Round Routes
//!
//! Table view over the resident funding-round collection.
//!
//! - GET /api/v1/rounds - Searched, sorted, paginated round slice

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{RoundRow, TableQuery, TableResponse};
use crate::api::error::ApiResult;
use crate::api::routes::view_state_for;
use crate::api::state::{AppState, LoadState};
use crate::model::RoundRecord;
use crate::table::compose;

/// GET /api/v1/rounds
///
/// One table slice of the funding-round collection. While the initial
/// fetch is in flight the response carries placeholder row counts instead
/// of rows; after a terminal fetch failure it carries the empty state.
pub async fn list_rounds(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> ApiResult<Json<TableResponse<RoundRow>>> {
    let view = view_state_for::<RoundRecord>(&query, state.config.default_page_size)?;

    let data = state.data.read().await;
    let response = match &data.rounds {
        LoadState::Loading => TableResponse::loading(view.page_size),
        LoadState::Unavailable => TableResponse::unavailable(),
        LoadState::Ready(records) => {
            let slice = compose(records, &view);
            let rows = slice.rows.iter().map(RoundRow::from).collect();
            TableResponse::ready(&slice, rows)
        }
    };

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::ViewConfig;
    use crate::client::FixtureSource;

    async fn loaded_state() -> Arc<AppState> {
        let state = AppState::new(
            Arc::new(FixtureSource::with_sample_data()),
            ViewConfig::default(),
        );
        state.refresh().await;
        Arc::new(state)
    }

    #[tokio::test]
    async fn test_list_rounds_default_view() {
        let state = loaded_state().await;
        let Json(response) = list_rounds(State(state), Query(TableQuery::default()))
            .await
            .unwrap();

        assert!(response.available);
        assert!(!response.loading);
        assert_eq!(response.total_filtered, 4);
        assert_eq!(response.page_count, 1);
        // Default sort: name ascending
        assert_eq!(response.rows[0].name, "Bridge");
    }

    #[tokio::test]
    async fn test_list_rounds_search_narrows() {
        let state = loaded_state().await;
        let query = TableQuery {
            search: Some("heliotrope".to_string()),
            ..Default::default()
        };
        let Json(response) = list_rounds(State(state), Query(query)).await.unwrap();

        assert_eq!(response.total_filtered, 2);
        assert!(response
            .rows
            .iter()
            .all(|r| r.company == "Heliotrope Energy"));
    }

    #[tokio::test]
    async fn test_list_rounds_rejects_bad_sort() {
        let state = loaded_state().await;
        let query = TableQuery {
            sort: Some("nonsense".to_string()),
            ..Default::default()
        };
        assert!(list_rounds(State(state), Query(query)).await.is_err());
    }

    #[tokio::test]
    async fn test_list_rounds_before_load_shows_placeholders() {
        let state = Arc::new(AppState::new(
            Arc::new(FixtureSource::with_sample_data()),
            ViewConfig::default(),
        ));

        let Json(response) = list_rounds(State(state), Query(TableQuery::default()))
            .await
            .unwrap();
        assert!(response.loading);
        assert_eq!(response.placeholder_rows, 20);
        assert!(response.rows.is_empty());
    }

    #[tokio::test]
    async fn test_list_rounds_after_failed_load_is_empty_state() {
        let state = AppState::new(Arc::new(FixtureSource::failing()), ViewConfig::default());
        state.refresh().await;
        let state = Arc::new(state);

        let Json(response) = list_rounds(State(state), Query(TableQuery::default()))
            .await
            .unwrap();
        assert!(!response.available);
        assert!(!response.loading);
        assert!(response.rows.is_empty());
        assert_eq!(response.page_count, 1);
    }
}
