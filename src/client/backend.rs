//! Backend REST Client
//!
//! HTTP client for the funding backend's collection endpoints. One-shot
//! fetches only: a failed collection fetch is terminal for that view's
//! load and is not retried here.

use reqwest::Client;
use thiserror::Error;

use crate::model::entity::{RawFundingRound, RawPerson};

/// Configuration for the backend client
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the funding backend (e.g., "http://localhost:9000")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9000".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

/// HTTP client for the funding backend
pub struct BackendClient {
    client: Client,
    config: BackendConfig,
}

impl BackendClient {
    /// Create a new client with the given configuration
    pub fn new(config: BackendConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Check if the backend is reachable
    pub async fn health_check(&self) -> Result<(), BackendError> {
        let url = format!("{}/health", self.config.base_url);
        let response = self.client.get(&url).send().await.map_err(map_transport)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(BackendError::Unavailable)
        }
    }

    /// Fetch the full funding-round collection
    pub async fn fetch_rounds(&self) -> Result<Vec<RawFundingRound>, BackendError> {
        let url = format!("{}/api/funding-rounds", self.config.base_url);
        self.fetch_collection(&url).await
    }

    /// Fetch the full people collection
    pub async fn fetch_people(&self) -> Result<Vec<RawPerson>, BackendError> {
        let url = format!("{}/api/people", self.config.base_url);
        self.fetch_collection(&url).await
    }

    /// Fetch one avatar asset; returns the bytes and their content type.
    ///
    /// Secondary fetch: callers isolate failures per record.
    pub async fn fetch_avatar(&self, url: &str) -> Result<(Vec<u8>, String), BackendError> {
        let response = self.client.get(url).send().await.map_err(map_transport)?;

        if !response.status().is_success() {
            return Err(BackendError::Api {
                status: response.status().as_u16(),
                message: format!("avatar fetch failed for {}", url),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let bytes = response.bytes().await.map_err(map_transport)?;
        Ok((bytes.to_vec(), content_type))
    }

    /// GET a JSON array endpoint and decode it
    async fn fetch_collection<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Vec<T>, BackendError> {
        let response = self.client.get(url).send().await.map_err(map_transport)?;

        if response.status().is_success() {
            response.json().await.map_err(map_transport)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(BackendError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

/// Map reqwest transport failures to the error taxonomy
fn map_transport(e: reqwest::Error) -> BackendError {
    if e.is_timeout() {
        BackendError::Timeout
    } else if e.is_connect() {
        BackendError::Unavailable
    } else {
        BackendError::Request(e)
    }
}

/// Errors that can occur when talking to the funding backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.request_timeout_ms, 10_000);
    }

    #[test]
    fn test_client_exposes_config() {
        let client = BackendClient::new(BackendConfig {
            base_url: "http://backend:8080".to_string(),
            request_timeout_ms: 500,
        });
        assert_eq!(client.config().base_url, "http://backend:8080");
    }
}
