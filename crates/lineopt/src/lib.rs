//! # lineopt
//!
//! Registration and resolution of dotted command chains for line-based
//! command hosts (chat bots, admin consoles, text protocols).
//!
//! ## Features
//!
//! - A registration tree of named handlers with nested sub-commands
//! - Handler wrappers carrying per-registration metadata with a shared
//!   "absent" default
//! - Marker stripping (`.`, `!`, ...) with ordered first-match semantics
//! - Splitting into segment names and a trailing argument string with
//!   configurable delimiters
//! - Exact-match resolution with depth-aware errors
//!
//! The crate resolves; it never executes. Invoking the handler is up to
//! the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use lineopt::{ResolveError, Space, State};
//!
//! let mut root: State<fn(&str) -> String> = State::new();
//! root.sub("ping", |arg| format!("pong {arg}"), Space::new());
//! root.branch("admin")
//!     .sub("ban", |arg| format!("banned {arg}"), Space::new().with("oper", true));
//!
//! let analysis = root.analyse(".admin.ban user1", &[".", "!"]).unwrap();
//! assert_eq!(analysis.start, ".");
//! assert_eq!(analysis.names.as_slice(), ["admin", "ban"]);
//! assert_eq!(analysis.argument, "user1");
//! assert!(analysis.invoke.get("oper").truthy());
//! assert_eq!((analysis.invoke.call())(analysis.argument), "banned user1");
//!
//! assert_eq!(root.analyse("?ping", &[".", "!"]).unwrap_err(), ResolveError::InvalidStart);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod analyse;
pub mod casemap;
pub mod error;
pub mod invoke;
pub mod parse;
pub mod prefix;
pub mod state;

pub use self::analyse::{analyse, Analysis};
pub use self::casemap::{ascii_lower, irc_lower, irc_to_lower};
pub use self::error::{ResolveError, Result};
pub use self::invoke::{Invoke, InvokeId, Space, Value, DOC, EMPTY};
pub use self::parse::{parse, Names};
pub use self::prefix::strip_prefix;
pub use self::state::{Delimiters, Entry, State};
