//! Data models for cluster responses.

mod plugins;

pub use plugins::PluginList;
