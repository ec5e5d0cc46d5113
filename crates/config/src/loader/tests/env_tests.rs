//! Environment variable tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test reading every `OPENSEARCH_*` variable.
//! - Test handling of empty and whitespace-only environment variables.
//! - Test that builder values win over environment values.

use crate::constants::{
    ENV_ENDPOINT, ENV_MAX_RETRIES, ENV_PASSWORD, ENV_RETRY_WAIT_MAX_MS, ENV_RETRY_WAIT_MIN_MS,
    ENV_SKIP_VERIFY, ENV_TIMEOUT, ENV_USERNAME,
};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;

use super::env_lock;

#[test]
#[serial]
fn test_env_supplies_profile() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            (ENV_ENDPOINT, Some("https://search.internal:9200")),
            (ENV_USERNAME, Some("admin")),
            (ENV_PASSWORD, Some("s3cret")),
            (ENV_MAX_RETRIES, None),
            (ENV_TIMEOUT, None),
            (ENV_RETRY_WAIT_MIN_MS, None),
            (ENV_RETRY_WAIT_MAX_MS, None),
            (ENV_SKIP_VERIFY, None),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

            assert_eq!(config.profile.endpoint, "https://search.internal:9200");
            assert_eq!(config.profile.username(), Some("admin"));
            assert_eq!(
                config.profile.password.as_ref().map(|p| p.expose_secret()),
                Some("s3cret")
            );
        },
    );
}

#[test]
#[serial]
fn test_env_supplies_connection_settings() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            (ENV_ENDPOINT, Some("http://localhost:9200")),
            (ENV_USERNAME, None),
            (ENV_PASSWORD, None),
            (ENV_MAX_RETRIES, Some("2")),
            (ENV_TIMEOUT, Some("10")),
            (ENV_RETRY_WAIT_MIN_MS, Some("5")),
            (ENV_RETRY_WAIT_MAX_MS, Some("20")),
            (ENV_SKIP_VERIFY, Some("true")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

            assert_eq!(config.connection.max_retries, 2);
            assert_eq!(config.connection.timeout, Duration::from_secs(10));
            assert_eq!(config.connection.retry_wait_min, Duration::from_millis(5));
            assert_eq!(config.connection.retry_wait_max, Duration::from_millis(20));
            assert!(config.connection.skip_verify);
            assert!(config.profile.username().is_none());
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            (ENV_ENDPOINT, Some("http://localhost:9200")),
            (ENV_USERNAME, Some("")),
            (ENV_PASSWORD, Some("   ")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert!(config.profile.username().is_none());
            assert!(config.profile.password.is_none());
        },
    );
}

#[test]
#[serial]
fn test_missing_endpoint_env_fails_validation() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([(ENV_ENDPOINT, None::<&str>)], || {
        let err = ConfigLoader::new().from_env().unwrap().build().unwrap_err();
        assert!(matches!(err, ConfigError::MissingEndpoint));
    });
}

#[test]
#[serial]
fn test_username_env_without_password_env_fails() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            (ENV_ENDPOINT, Some("http://localhost:9200")),
            (ENV_USERNAME, Some("admin")),
            (ENV_PASSWORD, None),
        ],
        || {
            let err = ConfigLoader::new().from_env().unwrap().build().unwrap_err();
            assert!(matches!(err, ConfigError::MissingPassword));
        },
    );
}

#[test]
#[serial]
fn test_builder_values_take_precedence_over_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            (ENV_ENDPOINT, Some("http://from-env:9200")),
            (ENV_MAX_RETRIES, Some("7")),
        ],
        || {
            let config = ConfigLoader::new()
                .with_endpoint("http://from-builder:9200".to_string())
                .with_max_retries(1)
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.profile.endpoint, "http://from-builder:9200");
            assert_eq!(config.connection.max_retries, 1);
        },
    );
}

#[test]
#[serial]
fn test_invalid_numeric_env_rejected() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([(ENV_MAX_RETRIES, Some("many"))], || {
        let result = ConfigLoader::new().from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, ENV_MAX_RETRIES),
            Err(e) => panic!("Expected InvalidValue, got {:?}", e),
            Ok(_) => panic!("Expected InvalidValue, got Ok"),
        }
    });
}

#[test]
#[serial]
fn test_invalid_bool_env_rejected() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([(ENV_SKIP_VERIFY, Some("yes please"))], || {
        assert!(matches!(
            ConfigLoader::new().from_env(),
            Err(ConfigError::InvalidValue { .. })
        ));
    });
}
