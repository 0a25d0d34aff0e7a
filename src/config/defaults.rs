//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

/// Environment variable that overrides `namespace.prefix`.
///
/// An empty value turns namespacing off.
pub const NAMESPACE_ENV: &str = "KVNS_NAMESPACE";

pub fn default_separator() -> String {
    kvns_core::DEFAULT_SEPARATOR.to_string()
}

pub fn default_log_filter() -> String {
    "info".to_string()
}
