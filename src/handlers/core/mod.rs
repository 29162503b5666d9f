//! Core handler infrastructure.
//!
//! The handler trait, the per-line context passed to handlers, and the
//! registry that owns the command tree.

pub mod context;
pub mod registry;

pub use context::{Context, Handler};
pub use registry::Registry;
