//! Tracing subscriber setup for test runs.
//!
//! # Usage
//!
//! ```rust,ignore
//! use harness_client::logging::init_test_logging;
//!
//! init_test_logging();
//! // Harness calls now log through the test writer, filtered by RUST_LOG.
//! ```

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "harness_client=info,harness_config=info";

/// Configuration for the harness log subscriber.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives used when `RUST_LOG` is unset
    pub default_filter: String,
    /// Route output through libtest's capture instead of raw stdout
    pub test_writer: bool,
    /// Emit JSON lines instead of the human-readable format
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: DEFAULT_LOG_FILTER.to_string(),
            test_writer: true,
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the fallback filter.
    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    /// Builder method to control libtest output capture.
    pub fn with_test_writer(mut self, enable: bool) -> Self {
        self.test_writer = enable;
        self
    }

    /// Builder method to switch to JSON output.
    pub fn with_json(mut self, enable: bool) -> Self {
        self.json = enable;
        self
    }

    /// Build the filter from `RUST_LOG`, falling back to `default_filter`.
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }

    /// Install the global subscriber.
    ///
    /// # Errors
    /// Returns an error if a global subscriber is already installed.
    pub fn init(&self) -> Result<(), tracing_subscriber::util::TryInitError> {
        use tracing_subscriber::fmt;

        let registry = tracing_subscriber::registry().with(self.env_filter());

        match (self.json, self.test_writer) {
            (true, true) => registry
                .with(fmt::layer().json().with_test_writer())
                .try_init(),
            (true, false) => registry.with(fmt::layer().json()).try_init(),
            (false, true) => registry.with(fmt::layer().with_test_writer()).try_init(),
            (false, false) => registry.with(fmt::layer()).try_init(),
        }
    }
}

/// Install the default test subscriber once per process.
///
/// Safe to call from every test; only the first call has an effect, and a
/// subscriber installed by someone else is left in place.
pub fn init_test_logging() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = LoggingConfig::default().init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::new();
        assert_eq!(config.default_filter, DEFAULT_LOG_FILTER);
        assert!(config.test_writer);
        assert!(!config.json);
    }

    #[test]
    fn test_logging_config_builder() {
        let config = LoggingConfig::new()
            .with_default_filter("debug")
            .with_test_writer(false)
            .with_json(true);
        assert_eq!(config.default_filter, "debug");
        assert!(!config.test_writer);
        assert!(config.json);
    }

    #[test]
    fn test_init_test_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
    }
}
