//! Cluster profile: where the cluster lives and who to authenticate as.
//!
//! Responsibilities:
//! - Define `Profile`, the endpoint plus optional basic-auth credentials.
//! - Validate the endpoint/credential invariants once, before first use.
//!
//! Does NOT handle:
//! - Reading values from the environment (see `loader` module).
//! - Applying credentials to requests (see client crate).
//!
//! Invariants:
//! - `endpoint` is non-empty after validation.
//! - A non-empty username always comes with a non-empty password.
//! - The password is a `SecretString` and never shows up in `Debug` output.

use secrecy::{ExposeSecret, SecretString};

use crate::loader::ConfigError;

/// Target cluster endpoint and optional credentials.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Base URL of the cluster, e.g. `https://localhost:9200`.
    pub endpoint: String,
    /// Username for basic auth. `None` or empty means anonymous.
    pub username: Option<String>,
    /// Password for basic auth.
    pub password: Option<SecretString>,
}

impl Profile {
    /// Create an anonymous profile for the given endpoint.
    pub fn anonymous(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: None,
            password: None,
        }
    }

    /// Create a profile that authenticates with basic auth.
    pub fn with_basic_auth(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: Some(username.into()),
            password: Some(password),
        }
    }

    /// Returns the username if one is set and non-empty.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| !u.is_empty())
    }

    /// Check the profile invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingEndpoint`] if the endpoint is empty.
    /// - [`ConfigError::MissingPassword`] if a username is set but the
    ///   password is missing or empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        if self.username().is_none() {
            return Ok(());
        }
        let has_password = self
            .password
            .as_ref()
            .is_some_and(|p| !p.expose_secret().is_empty());
        if !has_password {
            return Err(ConfigError::MissingPassword);
        }
        Ok(())
    }
}
