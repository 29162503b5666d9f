//! Leading marker detection.

use crate::error::{ResolveError, Result};

/// Separate a leading marker from `content`.
///
/// Candidates are tried in the given order and the first one `content`
/// starts with wins, even if a later candidate is longer. Both halves of the
/// result borrow from `content`.
///
/// ```rust
/// use lineopt::strip_prefix;
///
/// assert_eq!(strip_prefix(&["-", ".", "!"], "./echo").unwrap(), (".", "/echo"));
/// assert!(strip_prefix(&["-"], "echo").is_err());
/// ```
pub fn strip_prefix<'c, S: AsRef<str>>(starts: &[S], content: &'c str) -> Result<(&'c str, &'c str)> {
    starts
        .iter()
        .map(AsRef::as_ref)
        .find(|start| content.starts_with(start))
        .map(|start| content.split_at(start.len()))
        .ok_or(ResolveError::InvalidStart)
}
