//! Adapter that namespaces outgoing commands and leaves replies alone.

use async_trait::async_trait;
use kvns_core::{Command, Reply, Rewrite};
use tracing::{Instrument, debug};

use super::transport::{Pipeline, Transport};
use crate::error::ClientError;
use crate::telemetry::spans;

/// Prefixes keys on the way out. Replies come back exactly as stored,
/// so `KEYS *` returns fully qualified names.
pub struct PrefixOnly<T, R> {
    inner: T,
    rewriter: R,
}

impl<T, R> PrefixOnly<T, R> {
    /// Adapter label recorded on spans.
    pub const NAME: &'static str = "prefix_only";

    /// Wrap `inner`, namespacing every command with `rewriter`.
    pub fn new(inner: T, rewriter: R) -> Self {
        Self { inner, rewriter }
    }
}

#[async_trait]
impl<T: Transport, R: Rewrite> Transport for PrefixOnly<T, R> {
    async fn call(&self, command: Command) -> Result<Reply, ClientError> {
        let span = spans::command(Self::NAME, &command);
        async {
            let command = self.rewriter.rewrite(command)?;
            debug!(command = %command, "sending");
            self.inner.call(command).await
        }
        .instrument(span)
        .await
    }

    async fn call_pipelined(&self, commands: Vec<Command>) -> Result<Pipeline, ClientError> {
        let span = spans::pipeline(Self::NAME, commands.len());
        async {
            let commands = self.rewriter.rewrite_all(commands)?;
            self.inner.call_pipelined(commands).await
        }
        .instrument(span)
        .await
    }
}
