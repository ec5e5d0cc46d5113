//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Retry waits are a few milliseconds so retry tests stay fast
//! - Fixtures live under `testdata/` relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::path::PathBuf;
use std::time::Duration;

#[allow(unused_imports)]
pub use harness_client::endpoints;
#[allow(unused_imports)]
pub use harness_client::{ClientError, Credentials, HarnessClient, RetryPolicy};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Retry policy with millisecond waits.
#[allow(dead_code)]
pub fn fast_retry(max_retries: usize) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        wait_min: Duration::from_millis(5),
        wait_max: Duration::from_millis(20),
    }
}

/// The `admin:admin` credentials used by the default test cluster.
#[allow(dead_code)]
pub fn admin_credentials() -> Credentials {
    Credentials::new("admin", secrecy::SecretString::new("admin".to_string().into()))
}

/// Client against `server` with fast retries and no credentials.
#[allow(dead_code)]
pub fn harness_client(server: &MockServer, max_retries: usize) -> HarnessClient {
    HarnessClient::builder()
        .endpoint(server.uri())
        .retry_policy(fast_retry(max_retries))
        .build()
        .expect("build harness client")
}

/// Directory holding the checked-in fixtures.
#[allow(dead_code)]
pub fn testdata_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// An endpoint on localhost that refuses connections.
///
/// Binds an ephemeral port and releases it again, so nothing is listening
/// there by the time the test connects.
#[allow(dead_code)]
pub fn refused_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Render the method and path of every request the server received, in order.
#[allow(dead_code)]
pub async fn received_calls(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| format!("{} {}", r.method, r.url.path()))
        .collect()
}
