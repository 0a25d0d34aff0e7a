//! Error types for the namespacing engine.
//!
//! Only the forward pass can fail, and only when a command verb is not
//! present in the [registry](crate::registry). Malformed argument shapes
//! are never errors: strategies clamp or skip instead. [`ParseNameError`]
//! covers strategy and result shape names parsed from text.

use thiserror::Error;

/// Convenience type alias for Results using [`NamespaceError`].
pub type Result<T, E = NamespaceError> = std::result::Result<T, E>;

/// Errors raised while namespacing a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NamespaceError {
    /// The command verb has no registry entry, so its key positions are
    /// unknown. The command must not be sent.
    #[error("namespace does not know how to handle '{verb}'")]
    UnknownCommand {
        /// The offending verb, uppercased.
        verb: String,
    },
}

/// A strategy or result shape name that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} name: {name}")]
pub struct ParseNameError {
    /// What was being parsed (`"strategy"` or `"result shape"`).
    pub kind: &'static str,
    /// The rejected name.
    pub name: String,
}

impl NamespaceError {
    /// Get a static error code string for log and metric labels.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCommand { .. } => "unknown_command",
        }
    }

    /// The verb that caused the error, if any.
    pub fn verb(&self) -> Option<&str> {
        match self {
            Self::UnknownCommand { verb } => Some(verb),
        }
    }
}
