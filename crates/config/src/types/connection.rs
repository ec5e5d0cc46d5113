//! Connection configuration types for the cluster harness.
//!
//! Responsibilities:
//! - Define transport settings (timeouts, retry budget, backoff, TLS verification).
//! - Define the main `Config` structure combining the profile and connection settings.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections or the retry loop itself (see client crate).
//!
//! Invariants:
//! - Default values come from `constants`, not magic numbers.
//! - `retry_wait_min <= retry_wait_max` for any config produced by `ConfigLoader`.

use crate::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_RETRY_WAIT_MAX_MS, DEFAULT_RETRY_WAIT_MIN_MS,
    DEFAULT_TIMEOUT_SECS,
};
use crate::types::profile::Profile;
use std::time::Duration;

/// Transport settings shared by every request of a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Whether to skip TLS verification (for self-signed test clusters)
    pub skip_verify: bool,
    /// Timeout for a single attempt
    pub timeout: Duration,
    /// Retries after the first attempt for transient failures
    pub max_retries: usize,
    /// Backoff before the first retry; doubles per attempt
    pub retry_wait_min: Duration,
    /// Ceiling for the backoff
    pub retry_wait_max: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_wait_min: Duration::from_millis(DEFAULT_RETRY_WAIT_MIN_MS),
            retry_wait_max: Duration::from_millis(DEFAULT_RETRY_WAIT_MAX_MS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Target cluster and credentials
    pub profile: Profile,
    /// Transport settings
    pub connection: ConnectionConfig,
}

impl Config {
    /// Create a config for the given profile with default connection settings.
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            connection: ConnectionConfig::default(),
        }
    }
}
