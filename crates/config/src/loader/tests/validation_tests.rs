//! Validation tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test timeout validation (zero, max boundary, valid values).
//! - Test max retries validation (zero allowed, max boundary).
//! - Test retry wait ordering.
//! - Test endpoint format validation.

use crate::constants::{MAX_MAX_RETRIES, MAX_TIMEOUT_SECS};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use std::time::Duration;

fn loader() -> ConfigLoader {
    ConfigLoader::new().with_endpoint("https://localhost:9200".to_string())
}

#[test]
fn test_timeout_zero_invalid() {
    match loader().with_timeout(Duration::from_secs(0)).build() {
        Err(ConfigError::InvalidTimeout { message }) => {
            assert!(
                message.contains("must be greater than 0"),
                "Expected message about timeout > 0, got: {}",
                message
            );
        }
        Ok(_) => panic!("Expected InvalidTimeout error for zero timeout, got Ok"),
        Err(ref e) => panic!("Expected InvalidTimeout error, got {:?}", e),
    }
}

#[test]
fn test_timeout_exceeds_max_invalid() {
    let result = loader()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS + 1))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_timeout_at_max_valid() {
    let config = loader()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS))
        .build()
        .unwrap();
    assert_eq!(config.connection.timeout.as_secs(), MAX_TIMEOUT_SECS);
}

#[test]
fn test_zero_retries_valid() {
    let config = loader().with_max_retries(0).build().unwrap();
    assert_eq!(config.connection.max_retries, 0);
}

#[test]
fn test_max_retries_boundary() {
    assert!(loader().with_max_retries(MAX_MAX_RETRIES).build().is_ok());
    assert!(matches!(
        loader().with_max_retries(MAX_MAX_RETRIES + 1).build(),
        Err(ConfigError::InvalidMaxRetries { .. })
    ));
}

#[test]
fn test_retry_wait_min_above_max_invalid() {
    let result = loader()
        .with_retry_wait(Duration::from_secs(5), Duration::from_secs(1))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidRetryWait { .. })));
}

#[test]
fn test_retry_wait_equal_bounds_valid() {
    let wait = Duration::from_millis(250);
    let config = loader().with_retry_wait(wait, wait).build().unwrap();
    assert_eq!(config.connection.retry_wait_min, wait);
    assert_eq!(config.connection.retry_wait_max, wait);
}

#[test]
fn test_endpoint_without_scheme_invalid() {
    let result = ConfigLoader::new()
        .with_endpoint("localhost:9200".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}
