//! Splitting a command line into segment names and an argument string.

use smallvec::SmallVec;
use std::borrow::Cow;

/// Ordered segment names of a command chain.
///
/// Names borrow from the input until a transform replaces them.
pub type Names<'c> = SmallVec<[Cow<'c, str>; 4]>;

/// Split `content` into its command chain and trailing argument.
///
/// The text is split once on the first `upper` (argument delimiter); without
/// one the whole text is the chain and the argument is empty. The chain is
/// then split on every `lower` (segment delimiter). Nothing is trimmed, so
/// adjacent delimiters produce empty names.
///
/// Both delimiters must be non-empty. [`State`](crate::State) enforces this
/// for the trees it builds; callers of this function must check it
/// themselves.
///
/// ```rust
/// use lineopt::parse;
///
/// let (names, argument) = parse("admin.ban user1 spam", ".", " ");
/// assert_eq!(names.as_slice(), ["admin", "ban"]);
/// assert_eq!(argument, "user1 spam");
/// ```
pub fn parse<'c>(content: &'c str, lower: &str, upper: &str) -> (Names<'c>, &'c str) {
    let (instruct, argument) = content.split_once(upper).unwrap_or((content, ""));
    let names = instruct.split(lower).map(Cow::Borrowed).collect();
    (names, argument)
}
