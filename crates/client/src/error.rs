//! Error types for the harness client.

use std::path::PathBuf;
use thiserror::Error;

use harness_config::ConfigError;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while preparing or verifying cluster state.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The profile or connection settings are invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The request could not be constructed from the given URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP transport error that is not worth retrying.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// TLS handshake or certificate verification failed. Never retried.
    #[error("TLS error: {0}")]
    TlsError(String),

    /// Every attempt allowed by the retry policy failed.
    #[error("Giving up on {url} after {attempts} attempt(s): {last_error}")]
    MaxRetriesExceeded {
        attempts: usize,
        url: String,
        last_error: String,
    },

    /// The response arrived but its body could not be read.
    #[error("Failed to read response body: {0}")]
    ResponseRead(#[source] reqwest::Error),

    /// A fixture file could not be read.
    #[error("Failed to load fixture {}: {source}", .path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A setup, teardown or verification step failed and the test run must stop.
    #[error("{operation} failed: {source}")]
    Fatal {
        operation: String,
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    /// Wrap this error as fatal to the current test run.
    ///
    /// Already-fatal errors are returned unchanged so the innermost operation
    /// name is kept.
    pub fn into_fatal(self, operation: impl Into<String>) -> Self {
        match self {
            fatal @ Self::Fatal { .. } => fatal,
            other => Self::Fatal {
                operation: operation.into(),
                source: Box::new(other),
            },
        }
    }

    /// Check if this error must abort the test run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal { .. })
    }

    /// Check if this is a configuration error, looking through a fatal wrapper.
    pub fn is_config_error(&self) -> bool {
        match self {
            Self::Config(_) => true,
            Self::Fatal { source, .. } => source.is_config_error(),
            _ => false,
        }
    }

    /// Check if this is a transport error, looking through a fatal wrapper.
    ///
    /// Transport errors cover request construction, network and TLS
    /// failures, and exhausted retries.
    pub fn is_transport_error(&self) -> bool {
        match self {
            Self::InvalidUrl(_)
            | Self::HttpError(_)
            | Self::TlsError(_)
            | Self::MaxRetriesExceeded { .. } => true,
            Self::Fatal { source, .. } => source.is_transport_error(),
            _ => false,
        }
    }

    /// Check if an HTTP status code is worth another attempt.
    ///
    /// Retryable status codes:
    /// - 429: Too Many Requests
    /// - 5xx: server errors, except 501 Not Implemented
    ///
    /// Everything else is handed back to the caller after one attempt.
    pub fn is_retryable_status(status: u16) -> bool {
        status == 429 || ((500..600).contains(&status) && status != 501)
    }
}
