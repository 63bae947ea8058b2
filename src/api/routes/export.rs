//! Export Routes
//!
//! CSV download of the funding-round table. The export carries the
//! currently-filtered, sorted view (no pagination) so what the user
//! downloads matches what the table shows.
//!
//! - GET /api/v1/export/rounds - CSV download

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::TableQuery;
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::view_state_for;
use crate::api::state::{AppState, LoadState};
use crate::model::{RoundRecord, RoundStatus};
use crate::table::{filter, sort_rows};

/// GET /api/v1/export/rounds
///
/// Export the filtered, sorted funding rounds as CSV. Pagination params
/// are accepted but ignored; the export covers the whole filtered set.
pub async fn export_rounds(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> ApiResult<Response> {
    if !state.config.enable_export {
        return Err(ApiError::Validation(
            "Export feature is disabled".to_string(),
        ));
    }

    let view = view_state_for::<RoundRecord>(&query, state.config.default_page_size)?;

    let data = state.data.read().await;
    let records = match &data.rounds {
        LoadState::Ready(records) => records,
        _ => {
            return Err(ApiError::NotFound(
                "No funding round data available to export".to_string(),
            ));
        }
    };

    let filtered = filter::search(records, &view.search);
    let sorted = sort_rows(filtered, &view.sort_key, view.direction);

    let body = write_csv(&sorted)
        .map_err(|e| ApiError::Internal(format!("CSV serialization failed: {}", e)))?;

    let filename = format!(
        "fundboard_rounds_{}.csv",
        Utc::now().format("%Y%m%d_%H%M%S")
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        Body::from(body),
    )
        .into_response())
}

/// Serialize rounds with already-derived display values
fn write_csv(records: &[RoundRecord]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record([
        "id",
        "name",
        "company",
        "opened_date",
        "closed_date",
        "target_funding",
        "money_raised",
        "status",
        "accepted_investors",
    ])?;

    for record in records {
        writer.write_record([
            record.id.as_str(),
            record.name.as_str(),
            record.company.as_str(),
            &record
                .opened_date
                .map(|d| d.to_rfc3339())
                .unwrap_or_default(),
            &record
                .closed_date
                .map(|d| d.to_rfc3339())
                .unwrap_or_default(),
            record.target_funding.display(),
            record.money_raised.display(),
            match record.status {
                RoundStatus::Ongoing => "ongoing",
                RoundStatus::Completed => "completed",
            },
            &record.investors.len().to_string(),
        ])?;
    }

    writer.into_inner().map_err(|e| e.into_error().into())
}
