//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub table: TableSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Funding backend connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    #[serde(default = "default_backend_timeout")]
    pub request_timeout_ms: u64,
}

fn default_backend_url() -> String {
    "http://localhost:9000".to_string()
}

fn default_backend_timeout() -> u64 {
    10_000
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            request_timeout_ms: default_backend_timeout(),
        }
    }
}

/// View server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_enable_export")]
    pub enable_export: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8086
}

fn default_enable_export() -> bool {
    true
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_export: default_enable_export(),
        }
    }
}

/// Table engine defaults
#[derive(Debug, Clone, Deserialize)]
pub struct TableSettings {
    /// Page size used when a request doesn't specify one
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

fn default_page_size() -> usize {
    20
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("fundboard").join("config.toml")),
            Some(PathBuf::from("/etc/fundboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Backend overrides
        if let Ok(url) = std::env::var("FUNDBOARD_BACKEND_URL") {
            self.backend.base_url = url;
        }
        if let Ok(timeout) = std::env::var("FUNDBOARD_BACKEND_TIMEOUT_MS") {
            if let Ok(t) = timeout.parse() {
                self.backend.request_timeout_ms = t;
            }
        }

        // API overrides
        if let Ok(host) = std::env::var("FUNDBOARD_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("FUNDBOARD_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Table overrides
        if let Ok(size) = std::env::var("FUNDBOARD_PAGE_SIZE") {
            if let Ok(s) = size.parse() {
                self.table.default_page_size = s;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("FUNDBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("FUNDBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendSettings::default(),
            api: ApiSettings::default(),
            table: TableSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Fundboard Configuration
#
# Environment variables override these settings:
# - FUNDBOARD_BACKEND_URL
# - FUNDBOARD_BACKEND_TIMEOUT_MS
# - FUNDBOARD_API_HOST
# - FUNDBOARD_API_PORT
# - FUNDBOARD_PAGE_SIZE
# - FUNDBOARD_LOG_LEVEL
# - FUNDBOARD_LOG_FORMAT

[backend]
# Funding backend base URL
base_url = "http://localhost:9000"

# Request timeout for backend fetches (ms)
request_timeout_ms = 10000

[api]
# View server host
host = "0.0.0.0"

# View server port
port = 8086

# Enable the CSV export endpoint
enable_export = true

[table]
# Page size used when a request doesn't specify one
default_page_size = 20

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://localhost:9000");
        assert_eq!(config.api.port, 8086);
        assert_eq!(config.table.default_page_size, 20);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [backend]
            base_url = "http://backend:9000"

            [table]
            default_page_size = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.base_url, "http://backend:9000");
        assert_eq!(config.table.default_page_size, 50);
        // Unspecified sections fall back to defaults
        assert_eq!(config.api.port, 8086);
    }

    #[test]
    fn test_generated_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert!(config.api.enable_export);
    }
}
