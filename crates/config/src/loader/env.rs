//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse the `OPENSEARCH_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.
//! - Values already set on the loader through `with_*` are not overwritten.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_ENDPOINT, ENV_MAX_RETRIES, ENV_PASSWORD, ENV_RETRY_WAIT_MAX_MS, ENV_RETRY_WAIT_MIN_MS,
    ENV_SKIP_VERIFY, ENV_TIMEOUT, ENV_USERNAME,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read and parse an environment variable, naming it in the error on failure.
fn parse_env<T: FromStr>(key: &str, expected: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: expected.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
///
/// Builder values take precedence over environment variables.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.endpoint().is_none() {
        loader.set_endpoint(env_var_or_none(ENV_ENDPOINT));
    }
    if loader.username().is_none() {
        loader.set_username(env_var_or_none(ENV_USERNAME));
    }
    if !loader.has_password() {
        loader.set_password(
            env_var_or_none(ENV_PASSWORD).map(|p| SecretString::new(p.into())),
        );
    }
    if loader.skip_verify().is_none() {
        loader.set_skip_verify(parse_env(ENV_SKIP_VERIFY, "must be true or false")?);
    }
    if loader.timeout().is_none() {
        let secs: Option<u64> = parse_env(ENV_TIMEOUT, "must be a number of seconds")?;
        loader.set_timeout(secs.map(Duration::from_secs));
    }
    if loader.max_retries().is_none() {
        loader.set_max_retries(parse_env(
            ENV_MAX_RETRIES,
            "must be a non-negative integer",
        )?);
    }
    if loader.retry_wait_min().is_none() {
        let ms: Option<u64> = parse_env(ENV_RETRY_WAIT_MIN_MS, "must be a number of milliseconds")?;
        loader.set_retry_wait_min(ms.map(Duration::from_millis));
    }
    if loader.retry_wait_max().is_none() {
        let ms: Option<u64> = parse_env(ENV_RETRY_WAIT_MAX_MS, "must be a number of milliseconds")?;
        loader.set_retry_wait_max(ms.map(Duration::from_millis));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key1 = "_HARNESS_TEST_UNSET_VAR";
        assert!(env_var_or_none(key1).is_none(), "Unset env var should return None");

        temp_env::with_vars([(key1, Some(""))], || {
            assert!(env_var_or_none(key1).is_none(), "Empty env var should return None");
        });

        temp_env::with_vars([(key1, Some("   "))], || {
            assert!(
                env_var_or_none(key1).is_none(),
                "Whitespace-only env var should return None"
            );
        });

        let key2 = "_HARNESS_TEST_SET_VAR";
        temp_env::with_vars([(key2, Some(" test-value "))], || {
            assert_eq!(env_var_or_none(key2), Some("test-value".to_string()));
        });
    }

    #[test]
    #[serial]
    fn test_parse_env_reports_variable_name() {
        temp_env::with_vars([(ENV_TIMEOUT, Some("soon"))], || {
            let err = parse_env::<u64>(ENV_TIMEOUT, "must be a number of seconds").unwrap_err();
            match err {
                ConfigError::InvalidValue { var, .. } => assert_eq!(var, ENV_TIMEOUT),
                other => panic!("Expected InvalidValue, got {:?}", other),
            }
        });
    }
}
