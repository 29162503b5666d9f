//! Per-connection session state.

/// What the daemon knows about one connection.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Nick chosen with the `nick` command.
    pub nick: Option<String>,
    /// Name of the oper block the connection authenticated against.
    pub oper: Option<String>,
}

impl Session {
    /// Get the nick or "*" for replies.
    pub fn nick_or_star(&self) -> &str {
        self.nick.as_deref().unwrap_or("*")
    }

    /// Whether the connection has operator status.
    pub fn is_oper(&self) -> bool {
        self.oper.is_some()
    }
}
