//! Command registry and dispatch.
//!
//! The `Registry` owns the command tree, resolves each incoming line against
//! it and invokes the handler found. It also keeps per-command usage counters
//! for the `stats` command.

use super::context::{Context, Handler, OPER_ONLY, SYNTAX};
use crate::config::{Casemapping, CommandsConfig};
use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{
    BanHandler, BansHandler, EchoHandler, NickHandler, OperHandler, PingHandler, QuitHandler,
    StatsHandler, TimeHandler, UnbanHandler, WhoamiHandler,
};
use crate::telemetry::spans;
use lineopt::{DOC, Invoke, InvokeId, ResolveError, Space, State};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{Instrument, debug, warn};

/// Usage counter for one registered command.
struct CommandCount {
    path: String,
    count: AtomicU64,
}

/// Registry of command handlers.
pub struct Registry {
    tree: State<Box<dyn Handler>>,
    markers: Vec<String>,
    casemapping: Casemapping,
    ignore_chat: bool,
    /// Usage counters keyed by handler identity.
    command_counts: HashMap<InvokeId, CommandCount>,
}

/// Wrap a handler with its metadata, boxing it for the tree.
fn command<T: Handler + 'static>(handler: T, space: Space) -> Invoke<Box<dyn Handler>> {
    Invoke::new(handler, space).map(|h| Box::new(h) as Box<dyn Handler>)
}

impl Registry {
    /// Create a new registry with all commands registered.
    pub fn new(config: &CommandsConfig) -> Self {
        let mut tree = State::with_delimiters(config.delimiters.clone());
        let lower = config.delimiters.lower.clone();
        let chain = |names: &[&str]| names.join(lower.as_str());

        tree.sub_invoke(
            "ping",
            command(
                PingHandler,
                Space::new()
                    .with(DOC, "Reply with PONG and the given token")
                    .with(SYNTAX, "ping [token]"),
            ),
        );
        tree.sub_invoke(
            "echo",
            command(
                EchoHandler,
                Space::new()
                    .with(DOC, "Reply with the argument unchanged")
                    .with(SYNTAX, "echo <text>"),
            ),
        );
        tree.sub_invoke(
            "time",
            command(TimeHandler, Space::new().with(DOC, "Show the server time")),
        );
        tree.sub_invoke(
            "nick",
            command(
                NickHandler,
                Space::new()
                    .with(DOC, "Set your nick")
                    .with(SYNTAX, "nick <name>"),
            ),
        );
        tree.sub_invoke(
            "whoami",
            command(WhoamiHandler, Space::new().with(DOC, "Show your session")),
        );
        tree.sub_invoke(
            "oper",
            command(
                OperHandler,
                Space::new()
                    .with(DOC, "Log in as an operator")
                    .with(SYNTAX, "oper <name> <password>"),
            ),
        );
        tree.sub_invoke(
            "stats",
            command(
                StatsHandler,
                Space::new()
                    .with(DOC, "Show command usage counters")
                    .with(OPER_ONLY, true),
            ),
        );
        tree.sub_invoke(
            "quit",
            command(QuitHandler, Space::new().with(DOC, "Close the connection")),
        );

        // Operator commands live under a branch with no handler of its own
        let admin = tree.branch("admin");
        admin.sub_invoke(
            "ban",
            command(
                BanHandler,
                Space::new()
                    .with(DOC, "Ban a nick")
                    .with(OPER_ONLY, true)
                    .with(SYNTAX, format!("{} <nick> [reason]", chain(&["admin", "ban"]))),
            ),
        );
        admin.sub_invoke(
            "unban",
            command(
                UnbanHandler,
                Space::new()
                    .with(DOC, "Lift a ban")
                    .with(OPER_ONLY, true)
                    .with(SYNTAX, format!("{} <nick>", chain(&["admin", "unban"]))),
            ),
        );
        admin.sub_invoke(
            "bans",
            command(
                BansHandler,
                Space::new()
                    .with(DOC, "List active bans")
                    .with(OPER_ONLY, true),
            ),
        );

        // Initialize usage counters for every registered handler
        let mut command_counts = HashMap::new();
        for (path, entry) in tree.paths() {
            let Some(invoke) = entry.invoke() else {
                continue;
            };
            let path = path.join(lower.as_str());
            debug!(
                path = %path,
                handler = invoke.name(),
                doc = invoke.doc().unwrap_or(""),
                "Registered command"
            );
            command_counts.insert(
                invoke.id(),
                CommandCount {
                    path,
                    count: AtomicU64::new(0),
                },
            );
        }

        Self {
            tree,
            markers: config.markers.clone(),
            casemapping: config.casemapping,
            ignore_chat: config.ignore_chat,
            command_counts,
        }
    }

    /// Number of registered commands (branches excluded).
    pub fn command_count(&self) -> usize {
        self.command_counts.len()
    }

    /// Get command usage statistics, most used first. Unused commands are
    /// left out.
    pub fn command_stats(&self) -> Vec<(&str, u64)> {
        let mut stats: Vec<_> = self
            .command_counts
            .values()
            .map(|c| (c.path.as_str(), c.count.load(Ordering::Relaxed)))
            .filter(|(_, count)| *count > 0)
            .collect();

        stats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        stats
    }

    /// Resolve a line and run the handler bound to it.
    ///
    /// Resolution and handler failures are answered with an error reply and
    /// swallowed. Only `Quit` and `Send` are returned to the connection loop.
    pub async fn dispatch(&self, ctx: &mut Context<'_>, line: &str) -> HandlerResult {
        let lower = self.tree.delimiters().lower.as_str();
        let casemapping = self.casemapping;

        let analysis = match self
            .tree
            .analyse_with(line, self.markers.as_slice(), |names| casemapping.apply(names))
        {
            Ok(analysis) => analysis,
            Err(ResolveError::InvalidStart) if self.ignore_chat => return Ok(()),
            Err(e) => {
                debug!(uid = %ctx.uid, error = %e, "Resolution failed");
                if let Some(reply) = HandlerError::from_resolve(e, lower).to_reply(None) {
                    ctx.sender.send(reply).await?;
                }
                return Ok(());
            }
        };

        let invoke = analysis.invoke;
        let path = analysis.path(lower);

        if invoke.get(OPER_ONLY).truthy() && !ctx.session.is_oper() {
            debug!(uid = %ctx.uid, command = %path, "Operator command refused");
            if let Some(reply) = HandlerError::NoPrivileges.to_reply(None) {
                ctx.sender.send(reply).await?;
            }
            return Ok(());
        }

        if let Some(counter) = self.command_counts.get(&invoke.id()) {
            counter.count.fetch_add(1, Ordering::Relaxed);
        }

        let span = spans::command(&path, ctx.uid);
        let result = invoke
            .call()
            .handle(ctx, analysis.argument)
            .instrument(span)
            .await;

        match result {
            Ok(()) => Ok(()),
            Err(e @ (HandlerError::Quit(_) | HandlerError::Send(_))) => Err(e),
            Err(e) => {
                match &e {
                    HandlerError::Internal(_) => {
                        warn!(command = %path, error = %e, "Command failed")
                    }
                    _ => debug!(command = %path, code = e.error_code(), error = %e, "Command error"),
                }
                if let Some(reply) = e.to_reply(invoke.get(SYNTAX).as_str()) {
                    ctx.sender.send(reply).await?;
                }
                Ok(())
            }
        }
    }
}
