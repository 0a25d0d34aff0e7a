//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("namespace.separator must not be empty when a prefix is set")]
    EmptySeparator,
    #[error("namespace.prefix must not contain whitespace, got '{0}'")]
    WhitespaceInPrefix(String),
    #[error("namespace.separator must not contain whitespace, got '{0}'")]
    WhitespaceInSeparator(String),
    #[error("log.filter is not a valid filter directive: {0}")]
    InvalidLogFilter(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let ns = &config.namespace;

    if let Some(prefix) = ns.active_prefix() {
        if ns.separator.is_empty() {
            errors.push(ValidationError::EmptySeparator);
        }
        if prefix.chars().any(char::is_whitespace) {
            errors.push(ValidationError::WhitespaceInPrefix(prefix.to_string()));
        }
    }
    if ns.separator.chars().any(char::is_whitespace) {
        errors.push(ValidationError::WhitespaceInSeparator(ns.separator.clone()));
    }

    if EnvFilter::try_new(&config.log.filter).is_err() {
        errors.push(ValidationError::InvalidLogFilter(config.log.filter.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl Config {
    /// Validate this configuration, returning all errors found.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        validate(self)
    }
}
