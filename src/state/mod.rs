//! State management module.
//!
//! Contains the Matrix (shared daemon state) and per-connection sessions.

mod matrix;
mod session;
mod uid;

pub use matrix::Matrix;
pub use session::Session;
