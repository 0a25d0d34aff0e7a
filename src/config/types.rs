//! Core configuration types and loading.

use std::path::Path;

use kvns_core::{Namespace, Namespaced, Rewriter};
use serde::Deserialize;
use thiserror::Error;

use super::defaults::{NAMESPACE_ENV, default_log_filter, default_separator};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Namespace applied to every command.
    #[serde(default)]
    pub namespace: NamespaceConfig,
    /// Which adapter wraps the transport.
    #[serde(default)]
    pub adapter: AdapterConfig,
    /// Logging.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply the `KVNS_NAMESPACE` environment toggle, if set.
    pub fn apply_env(&mut self) {
        self.override_prefix(std::env::var(NAMESPACE_ENV).ok());
    }

    /// Replace the configured prefix when `value` is present.
    ///
    /// An empty value disables namespacing.
    pub fn override_prefix(&mut self, value: Option<String>) {
        if let Some(value) = value {
            self.namespace.prefix = Some(value);
        }
    }

    /// Build the rewriter described by the `[namespace]` section.
    pub fn rewriter(&self) -> Rewriter<'static> {
        self.namespace.rewriter()
    }
}

/// `[namespace]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct NamespaceConfig {
    /// Namespace prefix. Absent or empty means passthrough.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Separator between prefix and key (default: ":").
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            separator: default_separator(),
        }
    }
}

impl NamespaceConfig {
    /// The effective prefix: `None` when absent or empty.
    pub fn active_prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|p| !p.is_empty())
    }

    /// Build a rewriter for this section.
    pub fn rewriter(&self) -> Rewriter<'static> {
        Rewriter::from_prefix(self.active_prefix(), &self.separator)
    }

    /// Build a rewriter nested on top of `parent`.
    ///
    /// Used when one tenant's keys are further partitioned by component.
    pub fn nested_under<'p>(&self, parent: &'p Namespace) -> Namespaced<'p> {
        Namespaced::wrap(
            parent,
            self.active_prefix().unwrap_or_default(),
            self.separator.as_str(),
        )
    }
}

/// `[adapter]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdapterConfig {
    /// Adapter flavour (default: round_trip).
    #[serde(default)]
    pub mode: AdapterMode,
}

/// Adapter flavours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterMode {
    /// Prefix commands and strip replies.
    #[default]
    RoundTrip,
    /// Prefix commands only; replies come back as stored.
    PrefixOnly,
}

impl AdapterMode {
    /// Get the string representation of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoundTrip => "round_trip",
            Self::PrefixOnly => "prefix_only",
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}
