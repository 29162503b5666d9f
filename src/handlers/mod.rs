//! Command handlers.
//!
//! This module contains the Handler trait and the command registry that
//! resolves incoming lines against the command tree and invokes the
//! handler found there.
//!
//! Handlers receive the argument string as a slice of the incoming line;
//! splitting it further is up to each handler.

mod admin;
mod connection;
mod core;
mod misc;
mod oper;

pub use admin::{BanHandler, BansHandler, UnbanHandler};
pub use connection::{NickHandler, PingHandler, QuitHandler, WhoamiHandler};
pub use misc::{EchoHandler, TimeHandler};
pub use oper::{OperHandler, StatsHandler};

pub use self::core::{Context, Handler, Registry};
