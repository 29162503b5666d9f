//! Operator login and statistics.

use super::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use tracing::{info, warn};

/// Handler for the `oper` command.
///
/// `oper <name> <password>`
///
/// Authenticates the connection against a configured `[[oper]]` block.
pub struct OperHandler;

#[async_trait]
impl Handler for OperHandler {
    async fn handle(&self, ctx: &mut Context<'_>, args: &str) -> HandlerResult {
        let mut parts = args.split_whitespace();
        let (Some(name), Some(password)) = (parts.next(), parts.next()) else {
            return Err(HandlerError::NeedMoreParams);
        };

        match ctx.matrix.find_oper(name) {
            Some(block) if block.verify_password(password) => {
                ctx.session.oper = Some(block.name.clone());
                info!(uid = %ctx.uid, oper = %name, remote = %ctx.remote_addr, "Operator login");
                ctx.ok(format!("You are now an operator ({name})")).await
            }
            _ => {
                warn!(uid = %ctx.uid, oper = %name, remote = %ctx.remote_addr, "Failed operator login");
                Err(HandlerError::PasswordMismatch)
            }
        }
    }
}

/// Handler for the `stats` command.
///
/// Lists per-command usage counters, most used first.
pub struct StatsHandler;

#[async_trait]
impl Handler for StatsHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _args: &str) -> HandlerResult {
        for (path, count) in ctx.registry.command_stats() {
            ctx.ok(format!("{path} {count}")).await?;
        }
        ctx.ok(format!(
            "End of stats, up since {}",
            ctx.matrix.started.to_rfc3339()
        ))
        .await
    }
}
