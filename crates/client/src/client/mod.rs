//! Cluster client used by harness setup and verification steps.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `indexes`: Index setup and teardown methods
//! - `plugins`: Plugin verification methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Aborting the test run on failure (see [`crate::suite`])
//!
//! # Invariants
//! - Every request goes through the same retry policy and credentials
//! - The endpoint never ends with a slash

pub mod builder;

mod indexes;
mod plugins;

use reqwest::Method;

use crate::auth::Credentials;
use crate::endpoints::{self, RetryPolicy};
use crate::error::Result;
use crate::metrics::MetricsCollector;

/// HTTP client bound to one cluster endpoint.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use harness_client::{Credentials, HarnessClient};
/// use secrecy::SecretString;
///
/// let client = HarnessClient::builder()
///     .endpoint("https://localhost:9200")
///     .credentials(Credentials::new("admin", SecretString::new("admin".into())))
///     .skip_verify(true)
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct HarnessClient {
    pub(crate) http: reqwest::Client,
    pub(crate) endpoint: String,
    pub(crate) credentials: Option<Credentials>,
    pub(crate) retry_policy: RetryPolicy,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl HarnessClient {
    /// Create a new client builder.
    pub fn builder() -> builder::HarnessClientBuilder {
        builder::HarnessClientBuilder::new()
    }

    /// Get the cluster endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the configured credentials, if any.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Get the retry policy applied to every request.
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Send a single request with this client's credentials and retry policy.
    ///
    /// `url` must be absolute. The response body is returned for any status
    /// the retry policy does not retry, 4xx included.
    pub async fn execute(&self, method: Method, body: Option<&[u8]>, url: &str) -> Result<Vec<u8>> {
        endpoints::execute(
            &self.http,
            method,
            body,
            url,
            self.credentials.as_ref(),
            &self.retry_policy,
            self.metrics.as_ref(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use secrecy::SecretString;

    #[test]
    fn test_client_builder_anonymous() {
        let client = HarnessClient::builder()
            .endpoint("http://localhost:9200")
            .build()
            .unwrap();

        assert_eq!(client.endpoint(), "http://localhost:9200");
        assert!(client.credentials().is_none());
    }

    #[test]
    fn test_client_builder_with_credentials() {
        let client = HarnessClient::builder()
            .endpoint("https://localhost:9200")
            .credentials(Credentials::new(
                "admin",
                SecretString::new("admin".to_string().into()),
            ))
            .build()
            .unwrap();

        assert_eq!(client.credentials().map(|c| c.username()), Some("admin"));
    }

    #[test]
    fn test_client_builder_missing_endpoint() {
        let client = HarnessClient::builder().build();
        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_client_builder_normalizes_endpoint() {
        let client = HarnessClient::builder()
            .endpoint("https://localhost:9200/")
            .build()
            .unwrap();

        assert_eq!(client.endpoint(), "https://localhost:9200");
    }

    #[test]
    fn test_client_builder_rejects_unparseable_endpoint() {
        let client = HarnessClient::builder().endpoint("not a url").build();
        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_skip_verify_with_http_url_still_builds() {
        let client = HarnessClient::builder()
            .endpoint("http://localhost:9200")
            .skip_verify(true)
            .build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_debug_does_not_expose_password() {
        let client = HarnessClient::builder()
            .endpoint("https://localhost:9200")
            .credentials(Credentials::new(
                "admin",
                SecretString::new("client-secret-42".to_string().into()),
            ))
            .build()
            .unwrap();

        assert!(!format!("{:?}", client).contains("client-secret-42"));
    }
}
