//! Echo and time commands.

use super::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;

/// Handler for the `echo` command.
///
/// `echo <text>`: replies the argument string exactly as received.
pub struct EchoHandler;

#[async_trait]
impl Handler for EchoHandler {
    async fn handle(&self, ctx: &mut Context<'_>, args: &str) -> HandlerResult {
        if args.is_empty() {
            return Err(HandlerError::NeedMoreParams);
        }
        ctx.ok(args).await
    }
}

/// Handler for the `time` command.
pub struct TimeHandler;

#[async_trait]
impl Handler for TimeHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _args: &str) -> HandlerResult {
        let now = chrono::Utc::now();
        let time_string = now.format("%A %B %d %Y -- %H:%M:%S %z").to_string();
        ctx.ok(format!("{} {}", ctx.matrix.server_name, time_string))
            .await
    }
}
