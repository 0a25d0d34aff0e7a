//! Unified error handling for kvns clients.
//!
//! Namespacing failures come from `kvns-core`; everything else comes from
//! the transport an adapter wraps.

use kvns_core::NamespaceError;
use thiserror::Error;

/// Errors surfaced by adapters and transports.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The command could not be namespaced and was not sent.
    #[error(transparent)]
    Namespace(#[from] NamespaceError),

    /// The store answered with an error reply.
    #[error("server error: {0}")]
    Server(String),

    /// The transport failed to deliver the command or read the reply.
    #[error("transport error: {0}")]
    Transport(String),

    /// The connection to the store failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Namespace(e) => e.error_code(),
            Self::Server(_) => "server_error",
            Self::Transport(_) => "transport_error",
            Self::Io(_) => "io_error",
        }
    }

    /// True when the command never left the process.
    pub fn is_rejected_locally(&self) -> bool {
        matches!(self, Self::Namespace(_))
    }
}
