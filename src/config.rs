//! Configuration Module
//!
//! Handles loading service configuration from environment variables.

use std::env;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with defaults
/// matching the production deployment of the media cache (1000 entries,
/// 24 hour TTL, at most 100 results per cached response, 5 minute sweep).
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Entry time-to-live in seconds
    pub ttl_secs: u64,
    /// Result-count ceiling for the admission gate
    pub max_cacheable_results: usize,
    /// Background sweep interval in seconds
    pub sweep_interval_secs: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `TTL_SECS` - Entry TTL in seconds (default: 86400)
    /// - `MAX_CACHEABLE_RESULTS` - Result-count ceiling (default: 100)
    /// - `SWEEP_INTERVAL_SECS` - Sweep frequency in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            max_entries: env::var("MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            ttl_secs: env::var("TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(86_400),
            max_cacheable_results: env::var("MAX_CACHEABLE_RESULTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            sweep_interval_secs: env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            ttl_secs: 86_400,
            max_cacheable_results: 100,
            sweep_interval_secs: 300,
            server_port: 3000,
        }
    }
}
