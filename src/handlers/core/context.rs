//! Command handler context and core types.

use super::registry::Registry;
use crate::error::HandlerResult;
use crate::reply::{Code, Reply};
use crate::state::{Matrix, Session};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Metadata key: the command requires operator status.
pub const OPER_ONLY: &str = "oper_only";

/// Metadata key: usage hint sent with "not enough parameters" replies.
pub const SYNTAX: &str = "syntax";

/// A command handler.
///
/// `args` is everything after the first argument delimiter, untouched.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, ctx: &mut Context<'_>, args: &str) -> HandlerResult;
}

/// Handler context passed to each command handler.
pub struct Context<'a> {
    /// The connection's unique ID.
    pub uid: &'a str,
    /// Shared daemon state.
    pub matrix: &'a Arc<Matrix>,
    /// Sender for replies to this connection.
    pub sender: &'a mpsc::Sender<Reply>,
    /// Per-connection session state.
    pub session: &'a mut Session,
    /// Remote address of the client.
    pub remote_addr: SocketAddr,
    /// Command registry (for usage statistics).
    pub registry: &'a Registry,
}

impl Context<'_> {
    /// Send a reply with the given code.
    pub async fn reply(&self, code: Code, text: impl Into<String>) -> HandlerResult {
        self.sender.send(Reply::new(code, text)).await?;
        Ok(())
    }

    /// Send a success reply.
    pub async fn ok(&self, text: impl Into<String>) -> HandlerResult {
        self.reply(Code::Ok, text).await
    }
}
