//! Configuration management for the API server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

use super::transport::HttpConfig;
use crate::domains::store::StoreConfig;

/// Main configuration structure for the API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener configuration.
    pub http: HttpConfig,

    /// Per-request limits.
    pub request: RequestConfig,

    /// Document store configuration.
    pub store: StoreConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Per-request limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Deadline for the store call behind each request.
    pub timeout: Duration,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "real-estate-api".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            http: HttpConfig::default(),
            request: RequestConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `REAL_ESTATE_`.
    /// For example: `REAL_ESTATE_SERVER_NAME`, `REAL_ESTATE_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("REAL_ESTATE_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("REAL_ESTATE_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.http = HttpConfig::from_env();
        config.store = StoreConfig::from_env();

        if let Ok(secs) = std::env::var("REAL_ESTATE_REQUEST_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    config.request.timeout = Duration::from_secs(secs);
                    info!("Request timeout set to {}s", secs);
                }
                _ => warn!(
                    "Ignoring invalid REAL_ESTATE_REQUEST_TIMEOUT_SECS '{}', using {:?}",
                    secs, config.request.timeout
                ),
            }
        }

        config
    }
}
