//! Configuration for the cluster test harness.
//!
//! This crate provides the cluster `Profile`, transport settings and a loader
//! that assembles them from builder values, `OPENSEARCH_*` environment
//! variables and an optional `.env` file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig, Profile};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
