//! Configuration Module
//!
//! Handles loading panel configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default base URL of the cache service
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8080";

/// Panel configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote cache service, without trailing slash
    pub service_url: String,
    /// Poll period in milliseconds
    pub poll_interval_ms: u64,
    /// TTL in seconds restored into the form after every command
    pub default_ttl: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_SERVICE_URL` - Cache service base URL (default: http://localhost:8080)
    /// - `POLL_INTERVAL_MS` - Poll period in milliseconds (default: 1000)
    /// - `DEFAULT_TTL` - Default form TTL in seconds (default: 5)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            service_url: env::var("CACHE_SERVICE_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.service_url),
            poll_interval_ms: env::var("POLL_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.poll_interval_ms),
            default_ttl: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.default_ttl),
        }
    }

    /// Poll period as a `Duration`.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            poll_interval_ms: 1000,
            default_ttl: 5,
        }
    }
}
