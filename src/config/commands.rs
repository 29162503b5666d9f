//! Command resolution configuration.

use lineopt::{Delimiters, Names, ascii_lower, irc_lower};
use serde::Deserialize;

/// How segment names are folded before lookup.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Casemapping {
    /// Names must match exactly.
    #[default]
    None,
    /// ASCII letters are lowercased.
    Ascii,
    /// RFC 1459 mapping: ASCII plus `[]\~` folded onto `{}|^`.
    Rfc1459,
}

impl Casemapping {
    /// Fold `names` according to this mapping.
    pub fn apply(self, names: Names<'_>) -> Names<'_> {
        match self {
            Self::None => names,
            Self::Ascii => ascii_lower(names),
            Self::Rfc1459 => irc_lower(names),
        }
    }
}

/// Command resolution settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandsConfig {
    /// Leading markers that identify a line as a command, tried in order.
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,
    /// Segment (`lower`) and argument (`upper`) delimiters.
    #[serde(flatten)]
    pub delimiters: Delimiters,
    /// Folding applied to segment names before lookup.
    #[serde(default)]
    pub casemapping: Casemapping,
    /// Silently ignore lines that start with no marker (default: true).
    /// When false they are answered with an error reply.
    #[serde(default = "default_true")]
    pub ignore_chat: bool,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            markers: default_markers(),
            delimiters: Delimiters::default(),
            casemapping: Casemapping::default(),
            ignore_chat: default_true(),
        }
    }
}

fn default_markers() -> Vec<String> {
    vec![".".to_string()]
}

fn default_true() -> bool {
    true
}
