//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{PersonRecord, RoundRecord, RoundStatus};
use crate::table::TableSlice;

// ============================================
// TABLE QUERY PARAMS
// ============================================

/// Query parameters shared by every table endpoint
#[derive(Debug, Default, Deserialize)]
pub struct TableQuery {
    /// Free-text search query
    #[serde(default)]
    pub search: Option<String>,
    /// Sort key (record-type specific; validated at the boundary)
    #[serde(default)]
    pub sort: Option<String>,
    /// Sort direction: "asc" or "desc"
    #[serde(default)]
    pub dir: Option<String>,
    /// 1-indexed page
    #[serde(default)]
    pub page: Option<usize>,
    /// Rows per page
    #[serde(default)]
    pub page_size: Option<usize>,
}

// ============================================
// TABLE RESPONSES
// ============================================

/// One table slice as the rendering layer consumes it
#[derive(Debug, Serialize)]
pub struct TableResponse<T: Serialize> {
    /// The visible rows (empty while loading or unavailable)
    pub rows: Vec<T>,
    /// Size of the filtered set before pagination
    pub total_filtered: usize,
    /// Displayed page indicator, clamped
    pub page: usize,
    pub page_count: usize,
    /// Initial fetch still in flight; render `placeholder_rows` skeletons
    pub loading: bool,
    /// Number of skeleton rows to render while loading
    pub placeholder_rows: usize,
    /// False when the collection fetch failed terminally ("no data available")
    pub available: bool,
}

impl<T: Serialize> TableResponse<T> {
    /// Response for a computed slice, with rows already mapped to their
    /// wire representation
    pub fn ready<R>(slice: &TableSlice<R>, rows: Vec<T>) -> Self {
        Self {
            rows,
            total_filtered: slice.total_filtered,
            page: slice.page,
            page_count: slice.page_count,
            loading: false,
            placeholder_rows: 0,
            available: true,
        }
    }

    /// Response while the initial fetch is in flight
    pub fn loading(page_size: usize) -> Self {
        Self {
            rows: Vec::new(),
            total_filtered: 0,
            page: 1,
            page_count: 1,
            loading: true,
            placeholder_rows: page_size,
            available: true,
        }
    }

    /// Response after a terminal fetch failure
    pub fn unavailable() -> Self {
        Self {
            rows: Vec::new(),
            total_filtered: 0,
            page: 1,
            page_count: 1,
            loading: false,
            placeholder_rows: 0,
            available: false,
        }
    }
}

/// A funding round row as rendered in the table
#[derive(Debug, Clone, Serialize)]
pub struct RoundRow {
    pub id: String,
    pub name: String,
    pub company: String,
    pub opened_date: Option<String>,
    pub closed_date: Option<String>,
    /// Display string; the sentinel when the raw value wasn't numeric
    pub target_funding: String,
    /// Display string; the sentinel when the raw value wasn't numeric
    pub money_raised: String,
    pub status: RoundStatus,
    /// Accepted investors only
    pub investors: Vec<InvestorRow>,
}

/// One accepted investment inside a round row
#[derive(Debug, Clone, Serialize)]
pub struct InvestorRow {
    pub id: String,
    pub investor_name: String,
    pub amount: String,
}

impl From<&RoundRecord> for RoundRow {
    fn from(record: &RoundRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            company: record.company.clone(),
            opened_date: record.opened_date.map(fmt_date),
            closed_date: record.closed_date.map(fmt_date),
            target_funding: record.target_funding.display().to_string(),
            money_raised: record.money_raised.display().to_string(),
            status: record.status,
            investors: record
                .investors
                .iter()
                .map(|inv| InvestorRow {
                    id: inv.id.clone(),
                    investor_name: inv.investor_name.clone(),
                    amount: inv.amount.display().to_string(),
                })
                .collect(),
        }
    }
}

/// A person row as rendered in the table
#[derive(Debug, Clone, Serialize)]
pub struct PersonRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub company: String,
    /// Avatar endpoint for this person; serves a placeholder if the
    /// secondary fetch failed
    pub avatar: String,
}

impl From<&PersonRecord> for PersonRow {
    fn from(record: &PersonRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
            company: record.company.clone(),
            avatar: format!("/api/v1/people/{}/avatar", record.id),
        }
    }
}

fn fmt_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339()
}

// ============================================
// REFRESH DTOs
// ============================================

/// Refresh response
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    /// "ok" when both collections loaded, "partial" or "failed" otherwise
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds_loaded: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people_loaded: Option<usize>,
    pub duration_ms: u64,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded, unhealthy
    pub status: String,
    /// Funding-round collection state: ok, loading, unavailable
    pub rounds: String,
    /// People collection state: ok, loading, unavailable
    pub people: String,
    /// Last successful refresh (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_refresh: Option<String>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
