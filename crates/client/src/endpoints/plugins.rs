//! Installed plugin verification endpoints.

use reqwest::{Client, Method};
use tracing::{debug, info};

use crate::auth::Credentials;
use crate::endpoints::request::execute_route;
use crate::endpoints::retry::RetryPolicy;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::PluginList;

/// `_cat` listing of installed plugin names only (the `c`omponent column).
pub const PLUGIN_NAMES_PATH: &str = "_cat/plugins?h=c";

/// Metrics label for the plugin listing.
pub const PLUGINS_ROUTE: &str = "/_cat/plugins";

/// Fetch the installed plugin names.
pub async fn list_plugins(
    client: &Client,
    endpoint: &str,
    credentials: Option<&Credentials>,
    policy: &RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<PluginList> {
    let url = format!("{}/{}", endpoint, PLUGIN_NAMES_PATH);
    let body = execute_route(
        client,
        Method::GET,
        None,
        &url,
        PLUGINS_ROUTE,
        credentials,
        policy,
        metrics,
    )
    .await?;

    let plugins = PluginList::parse(&body);
    debug!(count = plugins.len(), "Fetched plugin listing");
    Ok(plugins)
}

/// Check that every plugin in `required` is installed.
///
/// The listing is fetched fresh on every call. Returns `false` on the first
/// missing plugin; an empty `required` is always satisfied.
pub async fn is_installed<S: AsRef<str>>(
    client: &Client,
    endpoint: &str,
    required: &[S],
    credentials: Option<&Credentials>,
    policy: &RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<bool> {
    let plugins = list_plugins(client, endpoint, credentials, policy, metrics).await?;

    match plugins.first_missing(required) {
        Some(missing) => {
            info!(plugin = missing, "Required plugin is not installed");
            Ok(false)
        }
        None => Ok(true),
    }
}
