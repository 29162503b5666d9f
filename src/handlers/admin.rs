//! Ban management under the `admin` branch.
//!
//! All three commands are registered operator-only; the registry refuses
//! them before they get here.

use super::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use tracing::info;

/// Handler for `admin.ban <nick> [reason]`.
pub struct BanHandler;

#[async_trait]
impl Handler for BanHandler {
    async fn handle(&self, ctx: &mut Context<'_>, args: &str) -> HandlerResult {
        let (nick, reason) = args.trim_start().split_once(' ').unwrap_or((args.trim(), ""));
        if nick.is_empty() {
            return Err(HandlerError::NeedMoreParams);
        }
        let reason = match reason.trim() {
            "" => "No reason given",
            reason => reason,
        };
        let set_by = ctx.session.oper.as_deref().unwrap_or("*");

        let added = ctx.matrix.add_ban(nick, reason, set_by);
        info!(nick = %nick, reason = %reason, set_by = %set_by, added, "Ban set");

        if added {
            ctx.ok(format!("Banned {nick}")).await
        } else {
            ctx.ok(format!("Updated ban on {nick}")).await
        }
    }
}

/// Handler for `admin.unban <nick>`.
pub struct UnbanHandler;

#[async_trait]
impl Handler for UnbanHandler {
    async fn handle(&self, ctx: &mut Context<'_>, args: &str) -> HandlerResult {
        let nick = args
            .split_whitespace()
            .next()
            .ok_or(HandlerError::NeedMoreParams)?;

        let ban = ctx
            .matrix
            .remove_ban(nick)
            .ok_or_else(|| HandlerError::NoSuchTarget(nick.to_string()))?;
        info!(nick = %ban.nick, by = ?ctx.session.oper, "Ban removed");
        ctx.ok(format!("Unbanned {}", ban.nick)).await
    }
}

/// Handler for `admin.bans`.
pub struct BansHandler;

#[async_trait]
impl Handler for BansHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _args: &str) -> HandlerResult {
        let bans = ctx.matrix.list_bans();
        for ban in &bans {
            ctx.ok(format!(
                "{} set by {} at {}: {}",
                ban.nick,
                ban.set_by,
                ban.set_at.to_rfc3339(),
                ban.reason
            ))
            .await?;
        }
        ctx.ok(format!("End of ban list ({})", bans.len())).await
    }
}
