//! Connection identifiers.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generates unique connection IDs.
///
/// Format: `c` followed by a zero-padded counter, e.g. `c000001`.
pub struct UidGenerator {
    counter: AtomicU64,
}

impl UidGenerator {
    /// Create a generator whose first ID is `c000001`.
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }

    /// Generate the next unique ID.
    pub fn next(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("c{n:06}")
    }
}

impl Default for UidGenerator {
    fn default() -> Self {
        Self::new()
    }
}
