//! Configuration Module
//!
//! Handles loading and validating cache configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Default interval between background sweeps.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Environment variable holding the sweep interval in seconds.
pub const SWEEP_INTERVAL_ENV: &str = "TTL_CACHE_SWEEP_INTERVAL_SECS";

/// Cache configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Interval between background sweeps of expired entries
    pub sweep_interval: Duration,
}

impl CacheConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TTL_CACHE_SWEEP_INTERVAL_SECS` - Sweep interval in seconds (default: 60)
    ///
    /// Missing or unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            sweep_interval: parse_sweep_interval(env::var(SWEEP_INTERVAL_ENV).ok()),
        }
    }

    /// Sets the sweep interval.
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    /// Checks that the configuration can drive a sweep task.
    pub fn validate(&self) -> Result<()> {
        if self.sweep_interval.is_zero() {
            return Err(CacheError::InvalidConfig(
                "sweep interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parses a sweep interval in whole seconds, falling back to the default.
fn parse_sweep_interval(raw: Option<String>) -> Duration {
    raw.and_then(|v| v.trim().parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_SWEEP_INTERVAL)
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}
