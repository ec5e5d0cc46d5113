//! Cluster REST endpoint implementations.
//!
//! Every function here takes the HTTP client, endpoint and request settings
//! explicitly and returns errors to the caller; nothing here aborts.

mod indexes;
mod plugins;
mod request;
mod retry;
pub mod url_encoding;

pub use indexes::{
    BULK_REFRESH_PATH, BULK_ROUTE, INDEX_ROUTE, create_index, create_index_with_mapping,
    delete_index,
};
pub use plugins::{PLUGIN_NAMES_PATH, PLUGINS_ROUTE, is_installed, list_plugins};
pub use request::{execute, execute_route, send_request_with_retry};
pub use retry::RetryPolicy;
pub use url_encoding::encode_path_segment;
