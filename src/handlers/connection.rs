//! Connection-level commands: ping, nick, whoami and quit.

use super::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use tracing::info;

/// Handler for the `ping` command.
///
/// `ping [token]`
pub struct PingHandler;

#[async_trait]
impl Handler for PingHandler {
    async fn handle(&self, ctx: &mut Context<'_>, args: &str) -> HandlerResult {
        let token = match args.trim() {
            "" => ctx.matrix.server_name.as_str(),
            token => token,
        };
        ctx.ok(format!("PONG {token}")).await
    }
}

/// Handler for the `nick` command.
///
/// `nick <name>`
///
/// Banned nicks are refused. Only the first word of the argument is used.
pub struct NickHandler;

#[async_trait]
impl Handler for NickHandler {
    async fn handle(&self, ctx: &mut Context<'_>, args: &str) -> HandlerResult {
        let nick = args
            .split_whitespace()
            .next()
            .ok_or(HandlerError::NeedMoreParams)?;

        if let Some(ban) = ctx.matrix.ban_for(nick) {
            info!(uid = %ctx.uid, nick = %nick, reason = %ban.reason, "Banned nick refused");
            return Err(HandlerError::AccessDenied(nick.to_string()));
        }

        let old = ctx.session.nick.replace(nick.to_string());
        info!(uid = %ctx.uid, old = ?old, new = %nick, "Nick changed");
        ctx.ok(format!("You are now known as {nick}")).await
    }
}

/// Handler for the `whoami` command.
pub struct WhoamiHandler;

#[async_trait]
impl Handler for WhoamiHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _args: &str) -> HandlerResult {
        let mut text = format!(
            "{} ({}) from {} on {}",
            ctx.session.nick_or_star(),
            ctx.uid,
            ctx.remote_addr,
            ctx.matrix.server_name
        );
        if !ctx.matrix.description.is_empty() {
            text.push_str(&format!(" ({})", ctx.matrix.description));
        }
        if let Some(oper) = &ctx.session.oper {
            text.push_str(&format!(", operator {oper}"));
        }
        ctx.ok(text).await
    }
}

/// Handler for the `quit` command.
///
/// `quit [reason]`
pub struct QuitHandler;

#[async_trait]
impl Handler for QuitHandler {
    async fn handle(&self, ctx: &mut Context<'_>, args: &str) -> HandlerResult {
        let reason = Some(args.trim())
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        info!(
            uid = %ctx.uid,
            nick = ?ctx.session.nick,
            reason = ?reason,
            "Client quit"
        );

        ctx.ok("Goodbye").await?;

        // Signal quit by returning Quit error that connection loop will handle
        Err(HandlerError::Quit(reason))
    }
}
