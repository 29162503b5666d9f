//! Error types for command resolution.
//!
//! Resolution is exact-match only, so every failure is reported as soon as
//! it happens and no partial result is ever returned.

use thiserror::Error;

/// Convenience type alias for Results using [`ResolveError`].
pub type Result<T, E = ResolveError> = std::result::Result<T, E>;

/// Errors raised while stripping, splitting or walking a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// The text does not begin with any of the candidate markers.
    #[error("invalid start")]
    InvalidStart,

    /// A segment has no registration at the current level of the tree.
    #[error("name not found: {name:?} at depth {depth}")]
    NameNotFound {
        /// The segment that was looked up.
        name: String,
        /// Zero-based index of the segment in the chain.
        depth: usize,
    },

    /// The chain ends on a node that was registered without a handler.
    #[error("no handler registered at {}", path.join("."))]
    NoHandler {
        /// The full chain that was walked.
        path: Vec<String>,
    },

    /// A walk was requested with zero segment names.
    #[error("empty command chain")]
    EmptyChain,
}

impl ResolveError {
    /// Get a static error code string for labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidStart => "invalid_start",
            Self::NameNotFound { .. } => "name_not_found",
            Self::NoHandler { .. } => "no_handler",
            Self::EmptyChain => "empty_chain",
        }
    }

    pub(crate) fn name_not_found(name: &str, depth: usize) -> Self {
        Self::NameNotFound {
            name: name.to_owned(),
            depth,
        }
    }
}
