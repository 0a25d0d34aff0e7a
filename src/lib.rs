//! kvns - transparent key namespacing for shared key-value stores.
//!
//! The rewriting engine lives in `kvns-core`. This crate adds the async
//! adapters that sit in front of a store connection, TOML configuration,
//! and logging setup for the `kvns` tool.

pub mod adapter;
pub mod config;
pub mod error;
pub mod telemetry;
