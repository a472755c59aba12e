//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use super::error::{Error, Result};
use crate::domains::tools::definitions::aladhan::ALADHAN_BASE_URL;

/// Default timeout for a single Aladhan request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Upstream Aladhan API settings.
    pub aladhan: AladhanConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported in logs.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Settings for the outbound Aladhan client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AladhanConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,

    /// Upper bound for one request, connect through body.
    pub timeout_secs: u64,
}

impl AladhanConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for AladhanConfig {
    fn default() -> Self {
        Self {
            base_url: ALADHAN_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "aladhan-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            aladhan: AladhanConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_ALADHAN_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(value) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = value.to_lowercase() != "false" && value != "0";
        }

        if let Ok(base_url) = std::env::var("MCP_ALADHAN_BASE_URL") {
            config.aladhan.base_url = base_url;
        }

        if let Ok(value) = std::env::var("MCP_ALADHAN_TIMEOUT_SECS") {
            match value.trim().parse() {
                Ok(secs) => config.aladhan.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring MCP_ALADHAN_TIMEOUT_SECS={:?}, using {}s",
                    value, DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        config
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.aladhan.timeout_secs == 0 {
            return Err(Error::config("Aladhan timeout must be at least 1 second"));
        }
        let base_url = self.aladhan.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::config(format!(
                "Aladhan base URL must be http(s), got {:?}",
                self.aladhan.base_url
            )));
        }
        Ok(())
    }
}
