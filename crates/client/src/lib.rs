//! Cluster test harness client.
//!
//! This crate prepares and verifies cluster state for integration tests:
//! bulk-loading fixture documents, creating indices with explicit mappings,
//! deleting them again and checking that required plugins are installed.
//!
//! Two layers are provided. [`HarnessClient`] and the [`endpoints`] functions
//! return errors to the caller. [`ClusterSuite`] wraps every failure as
//! [`ClientError::Fatal`] so setup code can stop the run with
//! [`OrAbort::or_abort`].

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod suite;

pub use auth::Credentials;
pub use client::HarnessClient;
pub use client::builder::HarnessClientBuilder;
pub use endpoints::RetryPolicy;
pub use error::{ClientError, Result};
pub use fixtures::FixtureLoader;
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::PluginList;
pub use suite::{ClusterSuite, OrAbort};
