//! The registration tree.
//!
//! A [`State`] maps segment names to an [`Entry`]: an optional handler
//! wrapper plus the child node for nested sub-commands. Every node owns its
//! children exclusively and carries the [`Delimiters`] it was created with;
//! children created through registration inherit them unchanged.
//!
//! ```rust
//! use lineopt::{Space, State};
//!
//! let mut root: State<&str> = State::new();
//! root.sub("ban", "ban", Space::new());
//! root.branch("admin").sub("kick", "admin kick", Space::new());
//!
//! assert_eq!(*root.trail(&["ban"]).unwrap().call(), "ban");
//! assert_eq!(*root.trail(&["admin", "kick"]).unwrap().call(), "admin kick");
//! assert!(root.trail(&["admin"]).is_err());
//! ```

use crate::analyse::{self, Analysis};
use crate::error::{ResolveError, Result};
use crate::invoke::{Invoke, Space};
use crate::parse::{self, Names};
use std::collections::hash_map::{self, HashMap};
use std::fmt;
use std::sync::Arc;

/// Segment and argument delimiters of a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Delimiters {
    /// Separates segment names from each other (default `.`).
    pub lower: String,
    /// Separates the command chain from the argument string (default ` `).
    pub upper: String,
}

impl Delimiters {
    /// Create a delimiter pair.
    ///
    /// # Panics
    ///
    /// Panics if either delimiter is empty.
    pub fn new(lower: impl Into<String>, upper: impl Into<String>) -> Self {
        let delimiters = Self {
            lower: lower.into(),
            upper: upper.into(),
        };
        delimiters.assert_non_empty();
        delimiters
    }

    /// Whether both delimiters are non-empty. An empty delimiter cannot split
    /// anything meaningfully.
    pub fn is_valid(&self) -> bool {
        !self.lower.is_empty() && !self.upper.is_empty()
    }

    fn assert_non_empty(&self) {
        assert!(!self.lower.is_empty(), "segment delimiter must not be empty");
        assert!(!self.upper.is_empty(), "argument delimiter must not be empty");
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new(".", " ")
    }
}

/// One registration: the handler bound to a name and the node below it.
pub struct Entry<H> {
    invoke: Option<Invoke<H>>,
    state: State<H>,
}

impl<H> Entry<H> {
    /// The handler, or `None` for a branch registered without one.
    pub fn invoke(&self) -> Option<&Invoke<H>> {
        self.invoke.as_ref()
    }

    /// The child node holding sub-commands.
    pub fn state(&self) -> &State<H> {
        &self.state
    }

    /// Mutable access to the child node, for registering more sub-commands.
    pub fn state_mut(&mut self) -> &mut State<H> {
        &mut self.state
    }
}

impl<H> fmt::Debug for Entry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("invoke", &self.invoke)
            .field("state", &self.state)
            .finish()
    }
}

/// A node of the registration tree.
pub struct State<H> {
    delimiters: Arc<Delimiters>,
    entries: HashMap<String, Entry<H>>,
}

impl<H> State<H> {
    /// Create an empty root with the default delimiters.
    pub fn new() -> Self {
        Self::with_delimiters(Delimiters::default())
    }

    /// Create an empty root with the given delimiters.
    ///
    /// # Panics
    ///
    /// Panics if either delimiter is empty, which can happen when they were
    /// deserialized rather than built with [`Delimiters::new`].
    pub fn with_delimiters(delimiters: Delimiters) -> Self {
        delimiters.assert_non_empty();
        Self {
            delimiters: Arc::new(delimiters),
            entries: HashMap::new(),
        }
    }

    /// The delimiters this node was created with.
    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Create an empty node configured like this one.
    ///
    /// This is the default child factory used by [`sub`](Self::sub) and
    /// [`branch`](Self::branch).
    pub fn child(&self) -> Self {
        Self {
            delimiters: Arc::clone(&self.delimiters),
            entries: HashMap::new(),
        }
    }

    /// Store `(invoke, child)` under `name` and return the stored child.
    ///
    /// An existing registration under the same name is replaced as a whole,
    /// sub-commands included.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        invoke: Option<Invoke<H>>,
        child: State<H>,
    ) -> &mut State<H> {
        let entry = Entry {
            invoke,
            state: child,
        };
        let slot = match self.entries.entry(name.into()) {
            hash_map::Entry::Occupied(mut occupied) => {
                occupied.insert(entry);
                occupied.into_mut()
            }
            hash_map::Entry::Vacant(vacant) => vacant.insert(entry),
        };
        &mut slot.state
    }

    /// Register `target` with `space` under `name`.
    ///
    /// Returns the new child node so sub-commands can be chained below it.
    pub fn sub(&mut self, name: impl Into<String>, target: H, space: Space) -> &mut State<H> {
        self.sub_invoke(name, Invoke::new(target, space))
    }

    /// Register an already built wrapper under `name`.
    pub fn sub_invoke(&mut self, name: impl Into<String>, invoke: Invoke<H>) -> &mut State<H> {
        let child = self.child();
        self.insert(name, Some(invoke), child)
    }

    /// Register `name` as a group of sub-commands without a handler of its own.
    pub fn branch(&mut self, name: impl Into<String>) -> &mut State<H> {
        let child = self.child();
        self.insert(name, None, child)
    }

    /// Look up a single name at this level.
    pub fn get(&self, name: &str) -> Option<&Entry<H>> {
        self.entries.get(name)
    }

    /// Mutable lookup of a single name at this level.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Entry<H>> {
        self.entries.get_mut(name)
    }

    /// Number of names registered at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered at this level.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the registrations at this level, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry<H>)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Every registered chain in the tree, depth first and sorted by name.
    pub fn paths(&self) -> Vec<(Vec<&str>, &Entry<H>)> {
        let mut out = Vec::new();
        self.collect_paths(&mut Vec::new(), &mut out);
        out
    }

    fn collect_paths<'s>(
        &'s self,
        prefix: &mut Vec<&'s str>,
        out: &mut Vec<(Vec<&'s str>, &'s Entry<H>)>,
    ) {
        let mut names: Vec<_> = self.iter().collect();
        names.sort_unstable_by_key(|(name, _)| *name);
        for (name, entry) in names {
            prefix.push(name);
            out.push((prefix.clone(), entry));
            entry.state.collect_paths(prefix, out);
            prefix.pop();
        }
    }

    fn lookup(&self, name: &str, depth: usize) -> Result<&Entry<H>> {
        self.entries
            .get(name)
            .ok_or_else(|| ResolveError::name_not_found(name, depth))
    }

    /// Walk `names` one level at a time and return the entry reached.
    ///
    /// Fails with [`ResolveError::NameNotFound`] at the first missing name
    /// and with [`ResolveError::EmptyChain`] when `names` is empty.
    pub fn asset<S: AsRef<str>>(&self, names: &[S]) -> Result<&Entry<H>> {
        let (first, rest) = names.split_first().ok_or(ResolveError::EmptyChain)?;
        let mut entry = self.lookup(first.as_ref(), 0)?;
        for (depth, name) in rest.iter().enumerate() {
            entry = entry.state.lookup(name.as_ref(), depth + 1)?;
        }
        Ok(entry)
    }

    /// Like [`asset`](Self::asset) but returns only the handler.
    ///
    /// A chain ending on a branch fails with [`ResolveError::NoHandler`].
    pub fn trail<S: AsRef<str>>(&self, names: &[S]) -> Result<&Invoke<H>> {
        self.asset(names)?
            .invoke
            .as_ref()
            .ok_or_else(|| ResolveError::NoHandler {
                path: names.iter().map(|n| n.as_ref().to_owned()).collect(),
            })
    }

    /// Split `content` with this node's delimiters.
    pub fn parse<'c>(&self, content: &'c str) -> (Names<'c>, &'c str) {
        parse::parse(content, &self.delimiters.lower, &self.delimiters.upper)
    }

    /// Resolve a full command line against this tree.
    ///
    /// See [`analyse`](crate::analyse()) for the pipeline.
    pub fn analyse<'s, 'c, S: AsRef<str>>(
        &'s self,
        content: &'c str,
        starts: &[S],
    ) -> Result<Analysis<'s, 'c, H>> {
        analyse::analyse(self, content, starts, |names| names)
    }

    /// Resolve a full command line, passing the segment names through
    /// `apply` before the walk.
    pub fn analyse_with<'s, 'c, S, F>(
        &'s self,
        content: &'c str,
        starts: &[S],
        apply: F,
    ) -> Result<Analysis<'s, 'c, H>>
    where
        S: AsRef<str>,
        F: FnOnce(Names<'c>) -> Names<'c>,
    {
        analyse::analyse(self, content, starts, apply)
    }
}

impl<H> Default for State<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for State<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("delimiters", &self.delimiters)
            .field("entries", &self.entries)
            .finish()
    }
}
