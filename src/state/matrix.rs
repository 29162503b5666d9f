//! The Matrix - shared daemon state.
//!
//! Everything here is shared by all connection tasks. The command tree is
//! not part of it: it is built once at startup and never mutated.

use super::uid::UidGenerator;
use crate::config::{Config, OperBlock};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use lineopt::irc_to_lower;

/// A ban on a nick.
#[derive(Debug, Clone)]
pub struct Ban {
    /// The nick as it was given.
    pub nick: String,
    /// Reason given by the operator.
    pub reason: String,
    /// Oper name that set the ban.
    pub set_by: String,
    /// When the ban was set.
    pub set_at: DateTime<Utc>,
}

/// Shared daemon state.
pub struct Matrix {
    /// Server name used in replies.
    pub server_name: String,
    /// Server description.
    pub description: String,
    /// Startup time.
    pub started: DateTime<Utc>,
    /// Configured operator blocks.
    pub opers: Vec<OperBlock>,
    /// Active bans, keyed by casefolded nick.
    pub bans: DashMap<String, Ban>,
    /// Connection ID generator.
    pub uid_gen: UidGenerator,
}

impl Matrix {
    /// Create the shared state from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            server_name: config.server.name.clone(),
            description: config.server.description.clone(),
            started: Utc::now(),
            opers: config.oper.clone(),
            bans: DashMap::new(),
            uid_gen: UidGenerator::new(),
        }
    }

    /// Find an operator block by name.
    pub fn find_oper(&self, name: &str) -> Option<&OperBlock> {
        self.opers.iter().find(|block| block.name == name)
    }

    /// Add or replace a ban. Returns true if the nick was not banned before.
    pub fn add_ban(&self, nick: &str, reason: &str, set_by: &str) -> bool {
        let ban = Ban {
            nick: nick.to_string(),
            reason: reason.to_string(),
            set_by: set_by.to_string(),
            set_at: Utc::now(),
        };
        self.bans.insert(irc_to_lower(nick), ban).is_none()
    }

    /// Remove a ban, returning it if it existed.
    pub fn remove_ban(&self, nick: &str) -> Option<Ban> {
        self.bans.remove(&irc_to_lower(nick)).map(|(_, ban)| ban)
    }

    /// Look up the ban for a nick.
    pub fn ban_for(&self, nick: &str) -> Option<Ban> {
        self.bans.get(&irc_to_lower(nick)).map(|ban| ban.clone())
    }

    /// All bans, oldest first.
    pub fn list_bans(&self) -> Vec<Ban> {
        let mut bans: Vec<Ban> = self.bans.iter().map(|entry| entry.value().clone()).collect();
        bans.sort_by(|a, b| a.set_at.cmp(&b.set_at).then_with(|| a.nick.cmp(&b.nick)));
        bans
    }
}
