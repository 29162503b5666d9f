//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, ServerConfig) and loading
//! - [`listen`]: Network listener configuration (ListenConfig)
//! - [`commands`]: Command resolution settings (markers, delimiters, casemapping)
//! - [`limits`]: Per-connection limits (LimitsConfig)
//! - [`oper`]: Operator block configuration (OperBlock)
//! - [`validation`]: Startup checks over a loaded config

mod commands;
mod limits;
mod listen;
mod oper;
mod types;
mod validation;

pub use commands::{Casemapping, CommandsConfig};
pub use limits::LimitsConfig;
pub use oper::OperBlock;
pub use types::Config;
pub use validation::validate;
