//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_TTL_MS;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. The background sweep is off by default: lazy eviction alone
/// preserves the freshness guarantee, and the sweep only matters when
/// memory held by never-re-read keys becomes a concern.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL in milliseconds applied when `set` is called without one
    pub default_ttl_ms: u64,
    /// Whether to run the periodic expired-entry sweep task
    pub sweep_enabled: bool,
    /// Sweep task interval in seconds
    pub sweep_interval_secs: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL_MS` - Default freshness window in milliseconds (default: 300000)
    /// - `SWEEP_ENABLED` - Enable the background sweep task (default: false)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            default_ttl_ms: env::var("DEFAULT_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_MS),
            sweep_enabled: env::var("SWEEP_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            sweep_interval_secs: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_ms: DEFAULT_TTL_MS,
            sweep_enabled: false,
            sweep_interval_secs: 60,
        }
    }
}
