//! Case-mapping transforms for segment names.
//!
//! These are meant to be passed to [`State::analyse_with`](crate::State::analyse_with)
//! so that `.ADMIN.Ban` resolves like `.admin.ban`. Registration names are
//! not touched; register them already lowercased.
//!
//! [`irc_lower`] implements the `rfc1459` mapping, which in addition to ASCII
//! folds `[]\~` onto `{}|^`.

use crate::parse::Names;
use std::borrow::Cow;

/// Convert a single character to lowercase using RFC 1459 case mapping.
///
/// In addition to ASCII lowercase conversion, this maps:
/// - `[` → `{`
/// - `]` → `}`
/// - `\` → `|`
/// - `~` → `^`
#[inline]
pub const fn irc_lower_char(c: char) -> char {
    match c {
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        '~' => '^',
        'A'..='Z' => (c as u8 + 32) as char,
        _ => c,
    }
}

/// Convert a string to lowercase using RFC 1459 case mapping.
pub fn irc_to_lower(s: &str) -> String {
    s.chars().map(irc_lower_char).collect()
}

/// Lowercase every name with ASCII rules. Names that are already lowercase
/// stay borrowed.
pub fn ascii_lower(names: Names<'_>) -> Names<'_> {
    names
        .into_iter()
        .map(|name| {
            if name.bytes().any(|b| b.is_ascii_uppercase()) {
                Cow::Owned(name.to_ascii_lowercase())
            } else {
                name
            }
        })
        .collect()
}

/// Lowercase every name with RFC 1459 rules.
pub fn irc_lower(names: Names<'_>) -> Names<'_> {
    names
        .into_iter()
        .map(|name| {
            if name.chars().any(|c| irc_lower_char(c) != c) {
                Cow::Owned(irc_to_lower(&name))
            } else {
                name
            }
        })
        .collect()
}
