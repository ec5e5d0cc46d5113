//! Index setup and teardown methods for [`HarnessClient`].

use crate::client::HarnessClient;
use crate::endpoints;
use crate::error::Result;

impl HarnessClient {
    /// Bulk-load newline-delimited JSON documents with refresh.
    pub async fn create_index(&self, index: &str, docs: &[u8]) -> Result<Vec<u8>> {
        endpoints::create_index(
            &self.http,
            &self.endpoint,
            index,
            docs,
            self.credentials.as_ref(),
            &self.retry_policy,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Create `index` with `mapping`, then bulk-load `docs`.
    pub async fn create_index_with_mapping(
        &self,
        index: &str,
        mapping: &[u8],
        docs: &[u8],
    ) -> Result<Vec<u8>> {
        endpoints::create_index_with_mapping(
            &self.http,
            &self.endpoint,
            index,
            mapping,
            docs,
            self.credentials.as_ref(),
            &self.retry_policy,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Delete `index`. A missing index yields the cluster's 404 body.
    pub async fn delete_index(&self, index: &str) -> Result<Vec<u8>> {
        endpoints::delete_index(
            &self.http,
            &self.endpoint,
            index,
            self.credentials.as_ref(),
            &self.retry_policy,
            self.metrics.as_ref(),
        )
        .await
    }
}
