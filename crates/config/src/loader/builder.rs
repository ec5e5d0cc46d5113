//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` merging builder values, environment
//!   variables and an optional `.env` file.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Profile invariants themselves (delegated to `Profile::validate`).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - `build()` validates the profile exactly once; clients do not re-validate per request.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_RETRY_WAIT_MAX_MS, DEFAULT_RETRY_WAIT_MIN_MS,
    DEFAULT_TIMEOUT_SECS, ENV_DOTENV_DISABLED, ENV_ENDPOINT, MAX_MAX_RETRIES, MAX_TIMEOUT_SECS,
};
use crate::types::{Config, ConnectionConfig, Profile};

/// Configuration loader that builds config from builder values and environment variables.
#[derive(Default)]
pub struct ConfigLoader {
    endpoint: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
    retry_wait_min: Option<Duration>,
    retry_wait_max: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// - `ConfigError::DotenvParse` if the file has invalid syntax
    /// - `ConfigError::DotenvIo` if the file exists but cannot be read
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    ///
    /// Only fills values that were not already set on the builder.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the cluster endpoint.
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set the backoff bounds used between retries.
    pub fn with_retry_wait(mut self, min: Duration, max: Duration) -> Self {
        self.retry_wait_min = Some(min);
        self.retry_wait_max = Some(max);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns the first failing check among endpoint format, profile
    /// invariants and connection bounds.
    pub fn build(self) -> Result<Config, ConfigError> {
        let endpoint = match self.endpoint.as_deref() {
            Some(raw) => validate_and_normalize_endpoint(raw)?,
            None => String::new(),
        };

        let profile = Profile {
            endpoint,
            username: self.username,
            password: self.password,
        };
        profile.validate()?;

        let connection = ConnectionConfig {
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            retry_wait_min: self
                .retry_wait_min
                .unwrap_or(Duration::from_millis(DEFAULT_RETRY_WAIT_MIN_MS)),
            retry_wait_max: self
                .retry_wait_max
                .unwrap_or(Duration::from_millis(DEFAULT_RETRY_WAIT_MAX_MS)),
        };
        Self::validate_connection(&connection)?;

        tracing::debug!(
            endpoint = %profile.endpoint,
            authenticated = profile.username().is_some(),
            max_retries = connection.max_retries,
            "Loaded harness configuration"
        );

        Ok(Config {
            profile,
            connection,
        })
    }

    /// Validates transport settings.
    ///
    /// Checks:
    /// - timeout is greater than 0 and not exceeding MAX_TIMEOUT_SECS
    /// - max_retries does not exceed MAX_MAX_RETRIES
    /// - retry_wait_min does not exceed retry_wait_max
    fn validate_connection(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if connection.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        if connection.max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!(
                    "must be between 0 and {} (got {})",
                    MAX_MAX_RETRIES, connection.max_retries
                ),
            });
        }

        if connection.retry_wait_min > connection.retry_wait_max {
            return Err(ConfigError::InvalidRetryWait {
                message: format!(
                    "minimum wait ({:?}) must not exceed maximum wait ({:?})",
                    connection.retry_wait_min, connection.retry_wait_max
                ),
            });
        }

        Ok(())
    }

    // Internal accessor methods for use by env.rs

    pub(crate) fn endpoint(&self) -> Option<&String> {
        self.endpoint.as_ref()
    }

    pub(crate) fn username(&self) -> Option<&String> {
        self.username.as_ref()
    }

    pub(crate) fn has_password(&self) -> bool {
        self.password.is_some()
    }

    pub(crate) fn skip_verify(&self) -> Option<bool> {
        self.skip_verify
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn max_retries(&self) -> Option<usize> {
        self.max_retries
    }

    pub(crate) fn retry_wait_min(&self) -> Option<Duration> {
        self.retry_wait_min
    }

    pub(crate) fn retry_wait_max(&self) -> Option<Duration> {
        self.retry_wait_max
    }

    pub(crate) fn set_endpoint(&mut self, endpoint: Option<String>) {
        self.endpoint = endpoint;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }

    pub(crate) fn set_retry_wait_min(&mut self, wait: Option<Duration>) {
        self.retry_wait_min = wait;
    }

    pub(crate) fn set_retry_wait_max(&mut self, wait: Option<Duration>) {
        self.retry_wait_max = wait;
    }
}

/// Validates and normalizes an endpoint string.
///
/// Validation rules:
/// - Trim surrounding whitespace; blank stays empty and is rejected by `Profile::validate`
/// - Parse as an absolute URL with an http or https scheme and a host
/// - Normalize by stripping trailing slashes
fn validate_and_normalize_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(String::new());
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: ENV_ENDPOINT.into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://localhost:9200): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: ENV_ENDPOINT.into(),
            message: format!(
                "scheme must be http or https (e.g. https://localhost:9200), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: ENV_ENDPOINT.into(),
            message: "host is required (e.g. https://localhost:9200)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
