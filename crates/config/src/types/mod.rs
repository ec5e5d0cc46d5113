//! Configuration type definitions for the cluster harness.
//!
//! Responsibilities:
//! - Define the `Profile` (endpoint + credentials) and its validation.
//! - Define transport settings and the top-level `Config`.
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Actual network connections or authentication (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

mod connection;
mod profile;

pub use connection::{Config, ConnectionConfig};
pub use profile::Profile;
