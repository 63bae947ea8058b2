//! Application State
//!
//! Shared state accessible by all API handlers. Holds the record source,
//! the view configuration, and the resident dataset. Collections are
//! replaced wholesale under a write lock on refresh; handlers only ever
//! read a consistent snapshot.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::client::{fetch_all_avatars, AvatarState, BackendClient, RecordSource};
use crate::config::Config;
use crate::model::{derive_person, derive_round, PersonRecord, RoundRecord};

/// Load status of one resident collection
#[derive(Debug, Clone)]
pub enum LoadState<T> {
    /// Initial fetch has not completed yet
    Loading,
    /// Fetch succeeded; records are resident
    Ready(T),
    /// Fetch failed terminally; the view renders its empty state
    Unavailable,
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }
}

/// The resident dataset, replaced atomically on each refresh
#[derive(Debug)]
pub struct DataSet {
    pub rounds: LoadState<Vec<RoundRecord>>,
    pub people: LoadState<Vec<PersonRecord>>,
    /// Avatar fetch outcomes keyed by person id
    pub avatars: HashMap<String, AvatarState>,
    pub last_refresh: Option<DateTime<Utc>>,
}

impl DataSet {
    fn empty() -> Self {
        Self {
            rounds: LoadState::Loading,
            people: LoadState::Loading,
            avatars: HashMap::new(),
            last_refresh: None,
        }
    }
}

/// Outcome of one refresh, for the refresh endpoint and logs
#[derive(Debug)]
pub struct RefreshSummary {
    pub rounds_loaded: Option<usize>,
    pub people_loaded: Option<usize>,
    pub duration_ms: u64,
}

/// Shared application state for all handlers
pub struct AppState {
    /// Where records come from (backend client or fixtures)
    pub source: Arc<dyn RecordSource>,
    /// Client for secondary avatar fetches; absent when running on fixtures
    pub avatar_client: Option<Arc<BackendClient>>,
    /// View server configuration
    pub config: Arc<ViewConfig>,
    /// The resident dataset
    pub data: RwLock<DataSet>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state with no data loaded yet
    pub fn new(source: Arc<dyn RecordSource>, config: ViewConfig) -> Self {
        Self {
            source,
            avatar_client: None,
            config: Arc::new(config),
            data: RwLock::new(DataSet::empty()),
            start_time: Instant::now(),
        }
    }

    /// Attach a client for secondary avatar fetches
    pub fn with_avatar_client(mut self, client: Arc<BackendClient>) -> Self {
        self.avatar_client = Some(client);
        self
    }

    /// Fetch both collections and replace the dataset wholesale.
    ///
    /// Each collection fails independently: a failed rounds fetch leaves
    /// people usable and vice versa. Avatar fetches run after a successful
    /// people load and are isolated per record.
    pub async fn refresh(&self) -> RefreshSummary {
        let start = Instant::now();
        let now = Utc::now();

        let rounds = match self.source.fetch_rounds().await {
            Ok(raw) => {
                let records: Vec<RoundRecord> =
                    raw.iter().map(|r| derive_round(r, now)).collect();
                tracing::info!(count = records.len(), "Loaded funding rounds");
                LoadState::Ready(records)
            }
            Err(e) => {
                tracing::error!(error = %e, "Funding round fetch failed; rendering empty state");
                LoadState::Unavailable
            }
        };

        let people = match self.source.fetch_people().await {
            Ok(raw) => {
                let records: Vec<PersonRecord> = raw.iter().map(derive_person).collect();
                tracing::info!(count = records.len(), "Loaded people");
                LoadState::Ready(records)
            }
            Err(e) => {
                tracing::error!(error = %e, "People fetch failed; rendering empty state");
                LoadState::Unavailable
            }
        };

        let avatars = match (&self.avatar_client, &people) {
            (Some(client), LoadState::Ready(records)) => {
                fetch_all_avatars(client, records).await
            }
            _ => HashMap::new(),
        };

        let summary = RefreshSummary {
            rounds_loaded: match &rounds {
                LoadState::Ready(r) => Some(r.len()),
                _ => None,
            },
            people_loaded: match &people {
                LoadState::Ready(p) => Some(p.len()),
                _ => None,
            },
            duration_ms: start.elapsed().as_millis() as u64,
        };

        let mut data = self.data.write().await;
        *data = DataSet {
            rounds,
            people,
            avatars,
            last_refresh: Some(now),
        };

        summary
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// View server configuration
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Page size when a request doesn't specify one
    pub default_page_size: usize,
    /// Enable the CSV export endpoint
    pub enable_export: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8086,
            default_page_size: 20,
            enable_export: true,
        }
    }
}

impl ViewConfig {
    /// Build from the file/env configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            host: config.api.host.clone(),
            port: config.api.port,
            default_page_size: config.table.default_page_size,
            enable_export: config.api.enable_export,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FixtureSource;

    #[tokio::test]
    async fn test_refresh_loads_both_collections() {
        let state = AppState::new(
            Arc::new(FixtureSource::with_sample_data()),
            ViewConfig::default(),
        );

        let summary = state.refresh().await;
        assert_eq!(summary.rounds_loaded, Some(4));
        assert_eq!(summary.people_loaded, Some(4));

        let data = state.data.read().await;
        assert!(data.rounds.is_ready());
        assert!(data.people.is_ready());
        assert!(data.last_refresh.is_some());
    }

    #[tokio::test]
    async fn test_failed_refresh_marks_unavailable() {
        let state = AppState::new(Arc::new(FixtureSource::failing()), ViewConfig::default());

        let summary = state.refresh().await;
        assert_eq!(summary.rounds_loaded, None);
        assert_eq!(summary.people_loaded, None);

        let data = state.data.read().await;
        assert!(matches!(data.rounds, LoadState::Unavailable));
        assert!(matches!(data.people, LoadState::Unavailable));
    }

    #[test]
    fn test_view_config_addr() {
        let config = ViewConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8086");
    }
}
