//! Configuration management for ledgerview
//!
//! This module handles loading, validation, and management of
//! ledgerview configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::ConfigError;

// ==================== Configuration Types ====================

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the accounting backend (no trailing slash)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

/// Pagination settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Ledger records requested per page
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,
    /// Upper bound on `next`-link hops while collecting groups.
    /// Guards against a backend that returns a cyclic next chain.
    #[serde(default = "default_max_group_pages")]
    pub max_group_pages: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            max_group_pages: default_max_group_pages(),
        }
    }
}

fn default_items_per_page() -> u32 {
    10
}

fn default_max_group_pages() -> u32 {
    100
}

/// Edit behavior settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EditConfig {
    /// Re-fetch the current page after a committed edit instead of
    /// trusting the record handed back by the edit dialog
    #[serde(default = "default_false")]
    pub refetch_on_save: bool,
}

fn default_false() -> bool {
    false
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Backend API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Edit behavior settings
    #[serde(default)]
    pub edit: EditConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path)
            .map_err(|_| ConfigError::FileNotFound {
                path: path.to_string_lossy().to_string(),
            })?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::InvalidYaml {
                message: e.to_string(),
            })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: "Base URL must not be empty".to_string(),
            });
        }

        if self.pagination.items_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pagination.items_per_page".to_string(),
                reason: "Page size must be greater than 0".to_string(),
            });
        }

        if self.pagination.max_group_pages == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pagination.max_group_pages".to_string(),
                reason: "Group page cap must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Base URL with any trailing slash removed
    pub fn api_root(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.pagination.items_per_page, 10);
        assert_eq!(config.pagination.max_group_pages, 100);
        assert!(!config.edit.refetch_on_save);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("api:\n  base_url: http://example.test/api\n").unwrap();
        assert_eq!(config.api.base_url, "http://example.test/api");
        assert_eq!(config.pagination.items_per_page, 10);
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.pagination.items_per_page = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let mut config = Config::default();
        config.api.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_root_strips_trailing_slash() {
        let mut config = Config::default();
        config.api.base_url = "http://example.test/api/".to_string();
        assert_eq!(config.api_root(), "http://example.test/api");
    }

    #[test]
    fn test_default_template_parses() {
        let config: Config = serde_yaml::from_str(Config::generate_default()).unwrap();
        assert!(config.validate().is_ok());
    }
}
