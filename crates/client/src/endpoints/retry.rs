//! Retry policy for transient request failures.
//!
//! The policy decides how many attempts a request gets and how long to wait
//! between them. The send loop itself lives in [`super::request`].

use std::time::Duration;

use harness_config::ConnectionConfig;
use harness_config::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_RETRY_WAIT_MAX_MS, DEFAULT_RETRY_WAIT_MIN_MS,
};
use reqwest::Response;
use reqwest::header::RETRY_AFTER;

/// Bounded exponential backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: usize,
    /// Wait before the first retry.
    pub wait_min: Duration,
    /// Ceiling for any single wait.
    pub wait_max: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            wait_min: Duration::from_millis(DEFAULT_RETRY_WAIT_MIN_MS),
            wait_max: Duration::from_millis(DEFAULT_RETRY_WAIT_MAX_MS),
        }
    }
}

impl From<&ConnectionConfig> for RetryPolicy {
    fn from(connection: &ConnectionConfig) -> Self {
        Self {
            max_retries: connection.max_retries,
            wait_min: connection.retry_wait_min,
            wait_max: connection.retry_wait_max,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Total number of attempts, including the first one.
    pub fn max_attempts(&self) -> usize {
        self.max_retries + 1
    }

    /// Backoff after the given zero-based attempt: `wait_min * 2^attempt`,
    /// capped at `wait_max`.
    pub fn backoff(&self, attempt: usize) -> Duration {
        let factor = 1u32.checked_shl(attempt as u32).unwrap_or(u32::MAX);
        self.wait_min
            .checked_mul(factor)
            .unwrap_or(self.wait_max)
            .min(self.wait_max)
    }

    /// Backoff for a retryable response, honoring `Retry-After` (delta
    /// seconds) on 429 and 503. The server's hint is still capped at `wait_max`.
    pub fn backoff_for_response(&self, attempt: usize, response: &Response) -> Duration {
        let status = response.status().as_u16();
        if status == 429 || status == 503 {
            if let Some(delay) = retry_after(response) {
                return delay.min(self.wait_max);
            }
        }
        self.backoff(attempt)
    }
}

/// Parse a `Retry-After` header given in delta seconds.
fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
