//! Loading of canned request payloads from disk.

use std::path::{Path, PathBuf};

use harness_config::constants::DEFAULT_FIXTURE_DIR;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Reads named fixture files from a root directory.
///
/// The default root is `testdata`, resolved against the working directory,
/// which for `cargo test` is the package root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureLoader {
    root: PathBuf,
}

impl Default for FixtureLoader {
    fn default() -> Self {
        Self::new(DEFAULT_FIXTURE_DIR)
    }
}

impl FixtureLoader {
    /// Create a loader reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory fixtures are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the fixture called `name`.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Read the fixture called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Fixture`] with the full path if the file cannot
    /// be read.
    pub fn load(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.path(name);
        let bytes = std::fs::read(&path).map_err(|source| ClientError::Fixture {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "Loaded fixture");
        Ok(bytes)
    }
}
