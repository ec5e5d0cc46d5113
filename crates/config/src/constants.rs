//! Centralized constants for the cluster harness workspace.
//!
//! This module contains default values and environment variable names used
//! across crates to avoid magic number duplication.

// =============================================================================
// Environment Variables
// =============================================================================

/// Cluster endpoint, e.g. `https://localhost:9200`.
pub const ENV_ENDPOINT: &str = "OPENSEARCH_ENDPOINT";

/// Basic-auth username. Leave unset for an anonymous profile.
pub const ENV_USERNAME: &str = "OPENSEARCH_USER";

/// Basic-auth password. Required whenever the username is set.
pub const ENV_PASSWORD: &str = "OPENSEARCH_PASSWORD";

/// Maximum number of retries for transient failures.
pub const ENV_MAX_RETRIES: &str = "OPENSEARCH_MAX_RETRIES";

/// Per-attempt request timeout in seconds.
pub const ENV_TIMEOUT: &str = "OPENSEARCH_TIMEOUT";

/// Lower bound of the retry backoff in milliseconds.
pub const ENV_RETRY_WAIT_MIN_MS: &str = "OPENSEARCH_RETRY_WAIT_MIN_MS";

/// Upper bound of the retry backoff in milliseconds.
pub const ENV_RETRY_WAIT_MAX_MS: &str = "OPENSEARCH_RETRY_WAIT_MAX_MS";

/// Skip TLS certificate verification (`true`/`false`).
pub const ENV_SKIP_VERIFY: &str = "OPENSEARCH_SKIP_VERIFY";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Connection & Retry Defaults
// =============================================================================

/// Default per-attempt HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed per-attempt timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: usize = 4;

/// Upper bound accepted for the retry count.
pub const MAX_MAX_RETRIES: usize = 10;

/// Default minimum backoff between attempts in milliseconds.
pub const DEFAULT_RETRY_WAIT_MIN_MS: u64 = 1_000;

/// Default maximum backoff between attempts in milliseconds.
pub const DEFAULT_RETRY_WAIT_MAX_MS: u64 = 30_000;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Harness Conventions
// =============================================================================

/// Media type sent as `Content-Type` on every harness request.
pub const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

/// Directory, relative to the working directory, that fixtures are read from.
pub const DEFAULT_FIXTURE_DIR: &str = "testdata";
