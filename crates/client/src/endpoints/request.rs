//! Authenticated request execution with retry on transient failures.
//!
//! [`execute`] is the single primitive every harness operation goes through:
//! it builds one request, sends it through [`send_request_with_retry`] and
//! returns the whole response body.

use std::error::Error as StdError;
use std::time::Instant;

use harness_config::constants::NDJSON_CONTENT_TYPE;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use tracing::{debug, warn};

use crate::auth::Credentials;
use crate::endpoints::retry::RetryPolicy;
use crate::error::{ClientError, Result};
use crate::metrics::{ErrorCategory, MetricsCollector};

/// Check if a transport error is worth another attempt.
///
/// Connection failures, timeouts and other errors raised while sending are
/// retried. Builder and redirect-policy errors are not.
fn is_retryable_transport_error(error: &reqwest::Error) -> bool {
    error.is_connect() || error.is_timeout() || error.is_request()
}

/// Fragments of rustls and TLS connector messages.
const TLS_FAILURE_MARKERS: &[&str] = &[
    "certificate",
    "tls",
    "ssl",
    "handshake",
    "received corrupt message",
    "received fatal alert",
    "peer is incompatible",
    "peer misbehaved",
];

/// Check whether any cause below `error` is a TLS failure.
///
/// reqwest reports these as connect errors, so they must be caught before
/// the retry check. The top-level message is skipped because it contains
/// the request URL.
fn is_tls_failure(error: &(dyn StdError + 'static)) -> bool {
    let mut source = error.source();
    while let Some(cause) = source {
        let message = cause.to_string().to_ascii_lowercase();
        if TLS_FAILURE_MARKERS.iter().any(|m| message.contains(m)) {
            return true;
        }
        source = cause.source();
    }
    false
}

/// Convert a failed send into the matching [`ClientError`].
fn send_error(error: reqwest::Error) -> ClientError {
    if is_tls_failure(&error) {
        ClientError::TlsError(error_chain(&error))
    } else {
        ClientError::from(error)
    }
}

/// Render `error` and all of its causes, joined by `": "`.
fn error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let message = cause.to_string();
        if !rendered.contains(&message) {
            rendered.push_str(": ");
            rendered.push_str(&message);
        }
        source = cause.source();
    }
    rendered
}

/// Sends an HTTP request, retrying transient failures.
///
/// This function wraps a `reqwest::RequestBuilder` with retry logic that:
/// - Retries connection errors, timeouts, HTTP 429 and HTTP 5xx except 501
/// - Fails immediately on TLS handshake and certificate errors
/// - Waits according to `policy` between attempts (exponential, capped,
///   `Retry-After` aware)
/// - Hands every other response back unchanged, including 4xx
/// - Returns `MaxRetriesExceeded` once `policy.max_attempts()` attempts failed
///
/// # Errors
///
/// - `ClientError::MaxRetriesExceeded` when all attempts are exhausted
/// - `ClientError::TlsError` when the TLS handshake fails
/// - `ClientError::HttpError` for non-retryable transport errors
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    url: &str,
    endpoint: &str,
    method: &str,
    policy: &RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    let max_attempts = policy.max_attempts();
    let mut last_error = String::new();

    for attempt in 0..max_attempts {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                // Streaming bodies cannot be replayed; send once.
                debug!(url, "Request builder cannot be cloned, single attempt only");
                return builder.send().await.map_err(send_error);
            }
        };

        if let Some(m) = metrics {
            m.record_request(endpoint, method);
            if attempt > 0 {
                m.record_retry(endpoint, method, attempt);
            }
        }

        let start = Instant::now();
        let outcome = attempt_builder.send().await;
        let elapsed = start.elapsed();

        let backoff = match outcome {
            Ok(response) => {
                let status = response.status().as_u16();
                if let Some(m) = metrics {
                    m.record_request_duration(endpoint, method, elapsed, Some(status));
                }

                if !ClientError::is_retryable_status(status) {
                    if attempt > 0 {
                        debug!(attempt = attempt + 1, status, url, "Request succeeded after retry");
                    }
                    if !response.status().is_success() {
                        debug!(status, url, "Non-success status returned to caller");
                    }
                    return Ok(response);
                }

                last_error = format!("HTTP {}", status);
                policy.backoff_for_response(attempt, &response)
            }
            Err(e) if is_retryable_transport_error(&e) && !is_tls_failure(&e) => {
                if let Some(m) = metrics {
                    m.record_request_duration(endpoint, method, elapsed, None);
                }
                last_error = error_chain(&e);
                policy.backoff(attempt)
            }
            Err(e) => {
                let err = send_error(e);
                if matches!(err, ClientError::TlsError(_)) {
                    warn!(url, error = %err, "TLS failure, not retrying");
                }
                if let Some(m) = metrics {
                    m.record_request_duration(endpoint, method, elapsed, None);
                    m.record_client_error(endpoint, method, &err);
                }
                return Err(err);
            }
        };

        if attempt + 1 < max_attempts {
            debug!(
                attempt = attempt + 1,
                max_attempts,
                backoff_ms = backoff.as_millis() as u64,
                error = %last_error,
                url,
                "Transient failure, retrying with backoff"
            );
            tokio::time::sleep(backoff).await;
        }
    }

    warn!(attempts = max_attempts, url, error = %last_error, "Retries exhausted");
    if let Some(m) = metrics {
        m.record_error(endpoint, method, ErrorCategory::RetriesExhausted);
    }
    Err(ClientError::MaxRetriesExceeded {
        attempts: max_attempts,
        url: url.to_string(),
        last_error,
    })
}

/// Execute one harness request and return the full response body.
///
/// - `Content-Type` is always `application/x-ndjson`.
/// - `body`, when present, is sent as the payload.
/// - `credentials`, when present, are applied as HTTP Basic auth.
///
/// The body is returned as-is for any status the retry policy does not
/// retry; interpreting it is up to the caller.
///
/// Metrics are labeled with the URL path. Harness operations use
/// [`execute_route`] instead so index names stay out of the labels.
///
/// # Errors
///
/// - `ClientError::InvalidUrl` if `url` does not parse; nothing is sent
/// - `ClientError::MaxRetriesExceeded` / `ClientError::TlsError` /
///   `ClientError::HttpError` from the transport
/// - `ClientError::ResponseRead` if the body cannot be drained
pub async fn execute(
    client: &Client,
    method: Method,
    body: Option<&[u8]>,
    url: &str,
    credentials: Option<&Credentials>,
    policy: &RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<u8>> {
    send_and_read(client, method, body, url, None, credentials, policy, metrics).await
}

/// [`execute`] with a fixed metrics label such as `/{index}` or `/_bulk`.
#[allow(clippy::too_many_arguments)]
pub async fn execute_route(
    client: &Client,
    method: Method,
    body: Option<&[u8]>,
    url: &str,
    route: &str,
    credentials: Option<&Credentials>,
    policy: &RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<u8>> {
    send_and_read(client, method, body, url, Some(route), credentials, policy, metrics).await
}

#[allow(clippy::too_many_arguments)]
async fn send_and_read(
    client: &Client,
    method: Method,
    body: Option<&[u8]>,
    url: &str,
    route: Option<&str>,
    credentials: Option<&Credentials>,
    policy: &RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<u8>> {
    let parsed =
        Url::parse(url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", url, e)))?;
    let endpoint = match route {
        Some(route) => route.to_string(),
        None => parsed.path().to_string(),
    };

    let mut builder = client
        .request(method.clone(), parsed)
        .header(CONTENT_TYPE, NDJSON_CONTENT_TYPE);
    if let Some(body) = body {
        builder = builder.body(body.to_vec());
    }
    if let Some(credentials) = credentials {
        builder = credentials.apply(builder);
    }

    let response =
        send_request_with_retry(builder, url, &endpoint, method.as_str(), policy, metrics).await?;
    let status = response.status().as_u16();

    // `bytes()` consumes the response, releasing the connection on every path.
    let body = response.bytes().await.map_err(|e| {
        let err = ClientError::ResponseRead(e);
        if let Some(m) = metrics {
            m.record_client_error(&endpoint, method.as_str(), &err);
        }
        err
    })?;

    debug!(method = %method, url, status, bytes = body.len(), "Request completed");
    Ok(body.to_vec())
}
