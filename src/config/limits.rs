//! Per-connection limits configuration.

use serde::Deserialize;

/// Per-connection limits configuration.
///
/// These limits keep a single client from exhausting server memory with
/// unbounded lines or by not reading its replies.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum length of an incoming line in bytes (default: 512).
    /// Longer lines are dropped with a 417 reply; the connection stays open.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
    /// Capacity of the outgoing reply queue (default: 64).
    #[serde(default = "default_outgoing_queue")]
    pub outgoing_queue: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            outgoing_queue: default_outgoing_queue(),
        }
    }
}

fn default_max_line_length() -> usize {
    512
}

fn default_outgoing_queue() -> usize {
    64
}
