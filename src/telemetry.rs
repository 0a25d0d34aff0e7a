//! Logging setup and span constructors.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter when it is set.
pub fn init(config: &LogConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.filter))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);
    if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}

/// Standardized span constructors for adapter observability.
pub mod spans {
    use kvns_core::Command;
    use tracing::{Span, debug_span};

    /// Create a span for a single adapted command.
    pub fn command(adapter: &'static str, command: &Command) -> Span {
        let verb = command.verb_upper().unwrap_or_default();
        debug_span!("command", adapter = adapter, verb = %verb)
    }

    /// Create a span for a pipelined batch.
    pub fn pipeline(adapter: &'static str, len: usize) -> Span {
        debug_span!("pipeline", adapter = adapter, len = len)
    }
}
