//! # Fundboard
//!
//! Funding-round dashboard view service - a full-stack Rust application that
//! fetches funding rounds and people from a backend API and serves searched,
//! sorted, paginated table slices to a rendering layer.
//!
//! ## Features
//!
//! - **Derived records**: Backend entities normalized once at load time
//!   (round status, money display values, accepted-investor lists)
//! - **Composable views**: Search, sort, and pagination as independent pure
//!   passes over a resident collection
//! - **Stable sorting**: Equal keys keep their input order in both directions
//! - **Resilient fetches**: Failed collection loads render an empty state;
//!   failed avatar fetches fall back to a placeholder per record
//!
//! ## Modules
//!
//! - [`model`]: Backend entities and the derivation layer
//! - [`table`]: The tabular view engine (filter, sort, paginate, compose)
//! - [`client`]: HTTP client for the funding backend and avatar fetches
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fundboard::model::derive_round;
//! use fundboard::table::{compose, ViewState};
//!
//! # fn records() -> Vec<fundboard::model::RoundRecord> { Vec::new() }
//! let rounds = records();
//!
//! let mut view = ViewState::new("name", 20);
//! view.set_search("seed");
//! view.set_page(2);
//!
//! let slice = compose(&rounds, &view);
//! println!("{} of {} rounds", slice.rows.len(), slice.total_filtered);
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod model;
pub mod table;

// Re-export top-level types for convenience
pub use model::{
    derive_person, derive_round, derive_status, InvestorSummary, MoneyField, PersonRecord,
    RoundRecord, RoundStatus, MISSING_NAME_PLACEHOLDER, NUMERIC_SENTINEL,
};

pub use table::{
    compose, page_count, sort_rows, SortDirection, SortValue, TableRow, TableSlice, TableView,
    ViewState,
};

pub use client::{
    fetch_all_avatars, AvatarState, BackendClient, BackendConfig, BackendError, FixtureSource,
    RecordSource, AVATAR_PLACEHOLDER_SVG,
};

pub use api::{build_router, serve, ApiError, AppState, LoadState, ViewConfig};

pub use config::{Config, ConfigError, LoggingConfig};
