//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::error::{CacheError, Result};

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum number of charts the cache can hold
    pub max_size: usize,
    /// Lifetime of a cached chart in seconds
    pub ttl_seconds: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Expiry sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CHART_CACHE_MAX_SIZE` - Maximum cached charts (default: 1000)
    /// - `CHART_CACHE_TTL_SECONDS` - Chart lifetime in seconds (default: 3600)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60)
    ///
    /// Unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_size: env_or("CHART_CACHE_MAX_SIZE", defaults.max_size),
            ttl_seconds: env_or("CHART_CACHE_TTL_SECONDS", defaults.ttl_seconds),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }

    /// Rejects values the cache cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "CHART_CACHE_MAX_SIZE must be greater than zero".to_string(),
            ));
        }
        if self.ttl_seconds == 0 {
            return Err(CacheError::InvalidConfig(
                "CHART_CACHE_TTL_SECONDS must be greater than zero".to_string(),
            ));
        }
        if self.cleanup_interval == 0 {
            return Err(CacheError::InvalidConfig(
                "CLEANUP_INTERVAL must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: 1000,
            ttl_seconds: 3600,
            server_port: 3000,
            cleanup_interval: 60,
        }
    }
}
