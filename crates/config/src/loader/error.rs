//! Error types for configuration loading and validation.
//!
//! Responsibilities:
//! - Define error variants for all configuration failures.
//! - Name the environment variable a user has to set to fix the failure.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, values' constraints).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

use crate::constants::{ENV_DOTENV_DISABLED, ENV_ENDPOINT, ENV_PASSWORD};

/// Errors that can occur while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("endpoint cannot be empty. Set {}", ENV_ENDPOINT)]
    MissingEndpoint,

    #[error("password cannot be empty when a username is set. Set {}", ENV_PASSWORD)]
    MissingPassword,

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("invalid max retries: {message}")]
    InvalidMaxRetries { message: String },

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    #[error("invalid retry wait: {message}")]
    InvalidRetryWait { message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the byte index of the parse failure is kept, never the line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set {}=1 to skip .env loading",
        ENV_DOTENV_DISABLED
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set {}=1 to skip .env loading", ENV_DOTENV_DISABLED)]
    DotenvUnknown,
}
