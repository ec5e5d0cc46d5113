//! Client builder for constructing [`HarnessClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the endpoint and normalizing it (no trailing slash)
//! - Configuring the underlying HTTP client (timeouts, redirects, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`HarnessClient`] methods)
//! - Reading configuration from the environment (see `harness_config::ConfigLoader`)
//!
//! # Invariants
//! - `endpoint` is required and must parse as an absolute URL
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use harness_config::{
    Config, Profile,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};
use url::Url;

use crate::auth::Credentials;
use crate::client::HarnessClient;
use crate::endpoints::RetryPolicy;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`HarnessClient`].
///
/// Everything except `endpoint` has a default: no credentials, TLS
/// verification on, a 30 second per-attempt timeout and the default
/// [`RetryPolicy`].
pub struct HarnessClientBuilder {
    endpoint: Option<String>,
    credentials: Option<Credentials>,
    skip_verify: bool,
    timeout: Duration,
    retry_policy: RetryPolicy,
    metrics: Option<MetricsCollector>,
    profile: Option<Profile>,
}

impl Default for HarnessClientBuilder {
    fn default() -> Self {
        Self {
            endpoint: None,
            credentials: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_policy: RetryPolicy::default(),
            metrics: None,
            profile: None,
        }
    }
}

impl HarnessClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster endpoint, e.g. `https://localhost:9200`.
    ///
    /// Trailing slashes are removed.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the Basic-auth credentials sent with every request.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against disposable test clusters with self-signed
    /// certificates.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the timeout for a single attempt.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry policy.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Set the number of retries after the first attempt, keeping the backoff.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.retry_policy.max_retries = retries;
        self
    }

    /// Set the metrics collector for request tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from configuration.
    ///
    /// Credentials are only set when the profile names a user. The profile
    /// is validated when the client is built.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.profile = Some(config.profile.clone());
        self.endpoint = Some(config.profile.endpoint.clone());
        self.credentials = Credentials::from_profile(&config.profile);
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.retry_policy = RetryPolicy::from(&config.connection);
        self
    }

    fn normalize_endpoint(endpoint: &str) -> String {
        endpoint.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`HarnessClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if a profile from
    /// [`from_config`](Self::from_config) fails validation.
    /// Returns [`ClientError::InvalidUrl`] if the endpoint is missing or
    /// does not parse. Returns [`ClientError::HttpError`] if the HTTP client
    /// fails to build.
    pub fn build(self) -> Result<HarnessClient> {
        if let Some(profile) = &self.profile {
            profile.validate()?;
        }

        let endpoint = self
            .endpoint
            .ok_or_else(|| ClientError::InvalidUrl("endpoint is required".to_string()))?;
        let endpoint = Self::normalize_endpoint(&endpoint);

        let parsed = Url::parse(&endpoint)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", endpoint, e)))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if parsed.scheme() == "https" {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    endpoint = %endpoint,
                    "skip_verify=true has no effect on HTTP endpoints"
                );
            }
        }

        let http = http_builder.build()?;

        Ok(HarnessClient {
            http,
            endpoint,
            credentials: self.credentials,
            retry_policy: self.retry_policy,
            metrics: self.metrics,
        })
    }
}
