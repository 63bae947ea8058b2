//! API route handlers

pub mod export;
pub mod health;
pub mod people;
pub mod refresh;
pub mod rounds;

use crate::api::dto::TableQuery;
use crate::api::error::{ApiError, ApiResult};
use crate::table::{SortDirection, TableRow, ViewState};

/// Build a validated [`ViewState`] for record type `R` from query params.
///
/// Unknown sort keys and directions are client errors; page numbers are
/// clamped rather than rejected (the engine treats out-of-range pages as
/// empty slices anyway).
pub(crate) fn view_state_for<R: TableRow>(
    query: &TableQuery,
    default_page_size: usize,
) -> ApiResult<ViewState> {
    let sort_key = match &query.sort {
        Some(key) if R::sort_keys().contains(&key.as_str()) => key.clone(),
        Some(key) => {
            return Err(ApiError::Validation(format!(
                "Invalid sort key '{}'. Valid keys: {}",
                key,
                R::sort_keys().join(", ")
            )));
        }
        None => R::default_sort_key().to_string(),
    };

    let direction = match query.dir.as_deref() {
        None | Some("asc") => SortDirection::Ascending,
        Some("desc") => SortDirection::Descending,
        Some(other) => {
            return Err(ApiError::Validation(format!(
                "Invalid sort direction '{}'. Use asc or desc",
                other
            )));
        }
    };

    let page_size = query.page_size.unwrap_or(default_page_size);
    if page_size == 0 {
        return Err(ApiError::Validation(
            "page_size must be positive".to_string(),
        ));
    }

    let mut state = ViewState::new(sort_key, page_size);
    state.direction = direction;
    state.page = std::cmp::max(1, query.page.unwrap_or(1));
    state.search = query.search.clone().unwrap_or_default();

    Ok(state)
}
