//! The seam between adapters and whatever actually talks to the store.

use std::sync::Arc;

use async_trait::async_trait;
use kvns_core::{Command, Reply};

use crate::error::ClientError;

/// Per-command outcomes of a pipelined batch, in send order.
pub type Pipeline = Vec<Result<Reply, ClientError>>;

/// Sends commands to a key-value store and returns its replies.
///
/// Adapters implement this too, so they stack on top of any transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one command and wait for its reply.
    async fn call(&self, command: Command) -> Result<Reply, ClientError>;

    /// Send a batch of commands.
    ///
    /// The outer error means nothing was sent. Individual commands may
    /// still fail on the server.
    async fn call_pipelined(&self, commands: Vec<Command>) -> Result<Pipeline, ClientError> {
        let mut replies = Vec::with_capacity(commands.len());
        for command in commands {
            replies.push(self.call(command).await);
        }
        Ok(replies)
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn call(&self, command: Command) -> Result<Reply, ClientError> {
        (**self).call(command).await
    }

    async fn call_pipelined(&self, commands: Vec<Command>) -> Result<Pipeline, ClientError> {
        (**self).call_pipelined(commands).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn call(&self, command: Command) -> Result<Reply, ClientError> {
        (**self).call(command).await
    }

    async fn call_pipelined(&self, commands: Vec<Command>) -> Result<Pipeline, ClientError> {
        (**self).call_pipelined(commands).await
    }
}
