//! Fail-fast harness layer for test setup, teardown and precondition checks.
//!
//! Every method here runs the corresponding [`HarnessClient`] operation and
//! converts any failure into [`ClientError::Fatal`] naming the step that
//! failed. The test itself decides where to stop, usually with
//! [`OrAbort::or_abort`] at its outermost boundary.
//!
//! ```rust,ignore
//! use harness_client::{ClusterSuite, OrAbort};
//!
//! let suite = ClusterSuite::from_env(["analysis-icu"]).or_abort();
//! suite.create_index("ecommerce", Some("ecommerce_mapping.json")).await.or_abort();
//! assert!(suite.is_plugin_installed().await.or_abort());
//! suite.delete_index("ecommerce").await.or_abort();
//! ```

use harness_config::{Config, ConfigLoader};
use tracing::{error, info};

use crate::client::HarnessClient;
use crate::error::{ClientError, Result};
use crate::fixtures::FixtureLoader;

/// Per-test-run context: the client, the fixture loader and the plugins the
/// run depends on.
///
/// Immutable once built, so one suite can be shared across tests by
/// reference.
#[derive(Debug, Clone)]
pub struct ClusterSuite {
    client: HarnessClient,
    fixtures: FixtureLoader,
    plugins: Vec<String>,
}

impl ClusterSuite {
    /// Create a suite around an existing client, reading fixtures from
    /// `testdata`.
    pub fn new<I, S>(client: HarnessClient, plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            client,
            fixtures: FixtureLoader::default(),
            plugins: plugins.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the client from `config` and wrap it in a suite.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Fatal`] if the profile is invalid or the HTTP
    /// client cannot be built.
    pub fn from_config<I, S>(config: &Config, plugins: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let client = HarnessClient::builder()
            .from_config(config)
            .build()
            .map_err(|e| e.into_fatal("build client"))?;
        Ok(Self::new(client, plugins))
    }

    /// Load configuration from `.env` and `OPENSEARCH_*` variables, then
    /// build the suite.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Fatal`] if configuration is missing or invalid.
    pub fn from_env<I, S>(plugins: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let config = ConfigLoader::new()
            .load_dotenv()
            .and_then(ConfigLoader::from_env)
            .and_then(ConfigLoader::build)
            .map_err(|e| ClientError::from(e).into_fatal("load configuration"))?;
        Self::from_config(&config, plugins)
    }

    /// Replace the fixture loader.
    pub fn with_fixtures(mut self, fixtures: FixtureLoader) -> Self {
        self.fixtures = fixtures;
        self
    }

    /// The underlying error-returning client.
    pub fn client(&self) -> &HarnessClient {
        &self.client
    }

    /// The fixture loader used by [`create_index`](Self::create_index).
    pub fn fixtures(&self) -> &FixtureLoader {
        &self.fixtures
    }

    /// The plugins checked by [`is_plugin_installed`](Self::is_plugin_installed).
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// Set up `index` from fixtures.
    ///
    /// The bulk payload is the fixture named `index`. With `mapping_fixture`,
    /// that fixture is `PUT` as the index mapping before the bulk load. Both
    /// fixtures are read before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Fatal`] if a fixture cannot be read or a
    /// request fails.
    pub async fn create_index(&self, index: &str, mapping_fixture: Option<&str>) -> Result<Vec<u8>> {
        let operation = format!("create index {}", index);
        let docs = self
            .fixtures
            .load(index)
            .map_err(|e| e.into_fatal(&operation))?;

        match mapping_fixture {
            Some(name) => {
                let mapping = self
                    .fixtures
                    .load(name)
                    .map_err(|e| e.into_fatal(&operation))?;
                self.create_index_with_mapping(index, &mapping, &docs).await
            }
            None => self.bulk_load(index, &docs).await,
        }
    }

    /// Bulk-load `docs`, failing fast.
    pub async fn bulk_load(&self, index: &str, docs: &[u8]) -> Result<Vec<u8>> {
        self.client
            .create_index(index, docs)
            .await
            .map_err(|e| e.into_fatal(format!("bulk load into {}", index)))
    }

    /// Create `index` with `mapping` and bulk-load `docs`, failing fast.
    pub async fn create_index_with_mapping(
        &self,
        index: &str,
        mapping: &[u8],
        docs: &[u8],
    ) -> Result<Vec<u8>> {
        self.client
            .create_index_with_mapping(index, mapping, docs)
            .await
            .map_err(|e| e.into_fatal(format!("create index {}", index)))
    }

    /// Delete `index`, failing fast. A missing index is not a failure.
    pub async fn delete_index(&self, index: &str) -> Result<Vec<u8>> {
        self.client
            .delete_index(index)
            .await
            .map_err(|e| e.into_fatal(format!("delete index {}", index)))
    }

    /// Check the suite's plugin list against the cluster.
    pub async fn is_plugin_installed(&self) -> Result<bool> {
        self.are_plugins_installed(self.plugins.as_slice()).await
    }

    /// Check an explicit plugin list against the cluster.
    ///
    /// A missing plugin is `Ok(false)`; only a failed request is fatal.
    pub async fn are_plugins_installed<S: AsRef<str>>(&self, plugins: &[S]) -> Result<bool> {
        let installed = self
            .client
            .is_installed(plugins)
            .await
            .map_err(|e| e.into_fatal("verify plugins"))?;
        info!(installed, count = plugins.len(), "Checked required plugins");
        Ok(installed)
    }
}

/// Terminate the test process on error.
pub trait OrAbort<T> {
    /// Return the value, or log the error, print it to stderr and exit with
    /// status 1.
    fn or_abort(self) -> T;
}

impl<T> OrAbort<T> for Result<T> {
    fn or_abort(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                error!(error = %err, "Aborting test run");
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        }
    }
}
