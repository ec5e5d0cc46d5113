//! Plugin verification methods for [`HarnessClient`].

use crate::client::HarnessClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::PluginList;

impl HarnessClient {
    /// Fetch the names of installed plugins.
    pub async fn list_plugins(&self) -> Result<PluginList> {
        endpoints::list_plugins(
            &self.http,
            &self.endpoint,
            self.credentials.as_ref(),
            &self.retry_policy,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Check that every plugin in `required` is installed.
    pub async fn is_installed<S: AsRef<str>>(&self, required: &[S]) -> Result<bool> {
        endpoints::is_installed(
            &self.http,
            &self.endpoint,
            required,
            self.credentials.as_ref(),
            &self.retry_policy,
            self.metrics.as_ref(),
        )
        .await
    }
}
