//! Index setup and teardown endpoints.

use reqwest::{Client, Method};
use tracing::info;

use crate::auth::Credentials;
use crate::endpoints::encode_path_segment;
use crate::endpoints::request::execute_route;
use crate::endpoints::retry::RetryPolicy;
use crate::error::Result;
use crate::metrics::MetricsCollector;

/// Path of the bulk API, refreshing so loaded documents are searchable on return.
pub const BULK_REFRESH_PATH: &str = "_bulk?refresh";

/// Metrics label for bulk requests.
pub const BULK_ROUTE: &str = "/_bulk";

/// Metrics label for requests addressed to a single index.
pub const INDEX_ROUTE: &str = "/{index}";

fn index_url(endpoint: &str, index: &str) -> String {
    format!("{}/{}", endpoint, encode_path_segment(index))
}

/// Bulk-load documents.
///
/// `docs` is newline-delimited JSON in the bulk action/source line-pair
/// format; it is sent as-is. `index` only labels the log line, the payload
/// names its own target indices.
pub async fn create_index(
    client: &Client,
    endpoint: &str,
    index: &str,
    docs: &[u8],
    credentials: Option<&Credentials>,
    policy: &RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<u8>> {
    let url = format!("{}/{}", endpoint, BULK_REFRESH_PATH);
    let body = execute_route(
        client,
        Method::POST,
        Some(docs),
        &url,
        BULK_ROUTE,
        credentials,
        policy,
        metrics,
    )
    .await?;

    info!(index, bytes = docs.len(), "Bulk-loaded documents");
    Ok(body)
}

/// Create an index with an explicit mapping, then bulk-load documents.
///
/// The mapping `PUT` and the bulk `POST` are issued in that order. If the
/// `PUT` fails the bulk load is never sent. If the bulk load fails, the index
/// is left with its mapping and no (or partial) documents.
///
/// Returns the bulk response body.
#[allow(clippy::too_many_arguments)]
pub async fn create_index_with_mapping(
    client: &Client,
    endpoint: &str,
    index: &str,
    mapping: &[u8],
    docs: &[u8],
    credentials: Option<&Credentials>,
    policy: &RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<u8>> {
    let url = index_url(endpoint, index);
    let mapping_response = execute_route(
        client,
        Method::PUT,
        Some(mapping),
        &url,
        INDEX_ROUTE,
        credentials,
        policy,
        metrics,
    )
    .await?;

    info!(
        index,
        response = %String::from_utf8_lossy(&mapping_response),
        "Applied index mapping"
    );

    create_index(client, endpoint, index, docs, credentials, policy, metrics).await
}

/// Delete an index.
///
/// A missing index is not an error here; the cluster's 404 body is returned.
pub async fn delete_index(
    client: &Client,
    endpoint: &str,
    index: &str,
    credentials: Option<&Credentials>,
    policy: &RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<u8>> {
    let url = index_url(endpoint, index);
    let body = execute_route(
        client,
        Method::DELETE,
        None,
        &url,
        INDEX_ROUTE,
        credentials,
        policy,
        metrics,
    )
    .await?;

    info!(index, "Deleted index");
    Ok(body)
}
