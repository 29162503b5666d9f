//! Resolving a full command line against a tree.

use crate::error::Result;
use crate::invoke::Invoke;
use crate::parse::Names;
use crate::prefix::strip_prefix;
use crate::state::State;
use std::fmt;

/// The outcome of a successful resolution.
pub struct Analysis<'s, 'c, H> {
    /// The marker the line started with.
    pub start: &'c str,
    /// Segment names, after the transform.
    pub names: Names<'c>,
    /// Everything after the first argument delimiter.
    pub argument: &'c str,
    /// The handler bound to `names`.
    pub invoke: &'s Invoke<H>,
}

impl<'s, 'c, H> Analysis<'s, 'c, H> {
    /// Join the segment names back together with `lower`.
    pub fn path(&self, lower: &str) -> String {
        self.names.join(lower)
    }

    /// Split into `(start, names, argument, invoke)`.
    pub fn into_parts(self) -> (&'c str, Names<'c>, &'c str, &'s Invoke<H>) {
        (self.start, self.names, self.argument, self.invoke)
    }
}

impl<H> fmt::Debug for Analysis<'_, '_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analysis")
            .field("start", &self.start)
            .field("names", &self.names)
            .field("argument", &self.argument)
            .field("invoke", &self.invoke)
            .finish()
    }
}

/// Strip a marker, split the rest, transform the names and walk the tree.
///
/// Fails with the first error of any stage; there is no partial result.
///
/// ```rust
/// use lineopt::{analyse, Space, State};
///
/// let mut root: State<&str> = State::new();
/// root.sub("admin", "admin", Space::new()).sub("ban", "admin.ban", Space::new());
///
/// let analysis = analyse(&root, ".admin.ban u", &[".", "!"], |names| names).unwrap();
/// assert_eq!(analysis.start, ".");
/// assert_eq!(analysis.names.as_slice(), ["admin", "ban"]);
/// assert_eq!(analysis.argument, "u");
/// assert_eq!(*analysis.invoke.call(), "admin.ban");
/// ```
pub fn analyse<'s, 'c, H, S, F>(
    state: &'s State<H>,
    content: &'c str,
    starts: &[S],
    apply: F,
) -> Result<Analysis<'s, 'c, H>>
where
    S: AsRef<str>,
    F: FnOnce(Names<'c>) -> Names<'c>,
{
    let (start, content) = strip_prefix(starts, content)?;
    let (names, argument) = state.parse(content);
    let names = apply(names);
    let invoke = state.trail(&names[..])?;
    Ok(Analysis {
        start,
        names,
        argument,
        invoke,
    })
}
