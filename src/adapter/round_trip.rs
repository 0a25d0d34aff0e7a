//! Adapter that namespaces commands and un-namespaces their replies.

use async_trait::async_trait;
use kvns_core::{Command, Reply, Rewrite};
use tracing::{Instrument, debug};

use super::transport::{Pipeline, Transport};
use crate::error::ClientError;
use crate::telemetry::spans;

/// Full round trip: callers see the store as if the namespace did not
/// exist.
pub struct RoundTrip<T, R> {
    inner: T,
    rewriter: R,
}

impl<T, R> RoundTrip<T, R> {
    /// Adapter label recorded on spans.
    pub const NAME: &'static str = "round_trip";

    /// Wrap `inner`, namespacing commands and stripping replies with `rewriter`.
    pub fn new(inner: T, rewriter: R) -> Self {
        Self { inner, rewriter }
    }
}

#[async_trait]
impl<T: Transport, R: Rewrite> Transport for RoundTrip<T, R> {
    async fn call(&self, command: Command) -> Result<Reply, ClientError> {
        let span = spans::command(Self::NAME, &command);
        async {
            let original = command.clone();
            let command = self.rewriter.rewrite(command)?;
            debug!(command = %command, "sending");
            let reply = self.inner.call(command).await?;
            Ok::<_, ClientError>(self.rewriter.strip(&original, reply))
        }
        .instrument(span)
        .await
    }

    async fn call_pipelined(&self, commands: Vec<Command>) -> Result<Pipeline, ClientError> {
        let span = spans::pipeline(Self::NAME, commands.len());
        async {
            let originals = commands.clone();
            let commands = self.rewriter.rewrite_all(commands)?;
            let replies = self.inner.call_pipelined(commands).await?;
            if replies.len() != originals.len() {
                return Err(ClientError::Transport(format!(
                    "pipeline of {} commands got {} replies",
                    originals.len(),
                    replies.len()
                )));
            }
            let replies: Pipeline = originals
                .iter()
                .zip(replies)
                .map(|(command, reply)| reply.map(|r| self.rewriter.strip(command, r)))
                .collect();
            Ok::<_, ClientError>(replies)
        }
        .instrument(span)
        .await
    }
}
