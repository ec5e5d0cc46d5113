//! Metrics collection for harness requests.
//!
//! This module records, per request attempt:
//! - Request latency histograms
//! - Request counters (total, retries, errors)
//! - Error categorization
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (install a `metrics` recorder of your choice)
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `status`, `error_category`
//! - Metric recording is infallible and never disturbs the request being measured
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "cluster_harness_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "cluster_harness_requests_total";

/// Metric name for retry counter.
pub const METRIC_RETRIES_TOTAL: &str = "cluster_harness_retries_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "cluster_harness_errors_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Request could not be constructed.
    Request,
    /// Transport-level errors (connection refused, DNS, reset)
    Transport,
    /// Attempt timed out
    Timeout,
    /// Retry budget exhausted
    RetriesExhausted,
    /// Body could not be read
    ResponseRead,
    /// TLS handshake or certificate errors
    Tls,
    /// Configuration or fixture problems
    Setup,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Request => "request",
            ErrorCategory::Transport => "transport",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::RetriesExhausted => "retries_exhausted",
            ErrorCategory::ResponseRead => "response_read",
            ErrorCategory::Tls => "tls",
            ErrorCategory::Setup => "setup",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::InvalidUrl(_) => ErrorCategory::Request,
            ClientError::HttpError(e) if e.is_timeout() => ErrorCategory::Timeout,
            ClientError::HttpError(e) if e.is_builder() => ErrorCategory::Request,
            ClientError::HttpError(_) => ErrorCategory::Transport,
            ClientError::TlsError(_) => ErrorCategory::Tls,
            ClientError::MaxRetriesExceeded { .. } => ErrorCategory::RetriesExhausted,
            ClientError::ResponseRead(_) => ErrorCategory::ResponseRead,
            ClientError::Config(_) | ClientError::Fixture { .. } => ErrorCategory::Setup,
            ClientError::Fatal { source, .. } => ErrorCategory::from(source.as_ref()),
        }
    }
}

/// Metrics collector for harness requests.
///
/// A thin wrapper around the `metrics` crate macros with consistent labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if metrics collection is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of one attempt.
    ///
    /// `status` is `None` when the attempt failed before a response arrived.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt, including retries.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record a retry (`attempt` is 1-based and excludes the initial request).
    pub fn record_retry(&self, endpoint: &str, method: &str, attempt: usize) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_RETRIES_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "attempt" => attempt.to_string(),
        )
        .increment(1);
    }

    /// Record an error.
    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error from a ClientError, categorizing it automatically.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        self.record_error(endpoint, method, ErrorCategory::from(error));
    }
}
