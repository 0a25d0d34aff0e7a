//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions and TOML loading
//! - [`defaults`]: serde default functions and the environment toggle
//! - [`validation`]: startup checks that report every problem at once

mod defaults;
mod types;
mod validation;

pub use defaults::NAMESPACE_ENV;
pub use types::{AdapterConfig, AdapterMode, Config, ConfigError, LogConfig, NamespaceConfig};
pub use validation::{ValidationError, validate};
