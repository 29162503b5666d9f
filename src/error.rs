//! Unified error handling for lineoptd.
//!
//! Command outcomes are reported through [`HandlerError`], which maps onto
//! reply lines and onto static labels for logging.

use crate::reply::{Code, Reply};
use lineopt::ResolveError;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during command resolution and handling.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("not enough parameters")]
    NeedMoreParams,

    #[error("operator status required")]
    NoPrivileges,

    #[error("password incorrect")]
    PasswordMismatch,

    #[error("access denied: {0} is banned")]
    AccessDenied(String),

    #[error("no such target: {0}")]
    NoSuchTarget(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("not a command")]
    NotACommand,

    #[error("no handler registered at {0}")]
    NoHandler(String),

    #[error("send error: {0}")]
    Send(#[from] mpsc::error::SendError<Reply>),

    #[error("client quit: {0:?}")]
    Quit(Option<String>),

    #[error("internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// Convert a resolution failure, joining chains with `lower`.
    pub fn from_resolve(err: ResolveError, lower: &str) -> Self {
        match err {
            ResolveError::InvalidStart => Self::NotACommand,
            ResolveError::NameNotFound { name, .. } => Self::UnknownCommand(name),
            ResolveError::NoHandler { path } => Self::NoHandler(path.join(lower)),
            other => Self::Internal(other.to_string()),
        }
    }

    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NeedMoreParams => "need_more_params",
            Self::NoPrivileges => "no_privileges",
            Self::PasswordMismatch => "password_mismatch",
            Self::AccessDenied(_) => "access_denied",
            Self::NoSuchTarget(_) => "no_such_target",
            Self::UnknownCommand(_) => "unknown_command",
            Self::NotACommand => "not_a_command",
            Self::NoHandler(_) => "no_handler",
            Self::Send(_) => "send_error",
            Self::Quit(_) => "quit",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Convert to a reply line.
    ///
    /// `syntax` is the syntax hint of the command that failed, if known.
    /// Returns `None` for errors that don't warrant a client-visible reply.
    pub fn to_reply(&self, syntax: Option<&str>) -> Option<Reply> {
        let reply = match self {
            Self::NeedMoreParams => match syntax {
                Some(syntax) => Reply::new(Code::NeedMoreParams, format!("Syntax: {syntax}")),
                None => Reply::new(Code::NeedMoreParams, "Not enough parameters"),
            },
            Self::NoPrivileges => Reply::new(
                Code::NoPrivileges,
                "Permission denied - you are not an operator",
            ),
            Self::PasswordMismatch => Reply::new(Code::PasswordMismatch, "Password incorrect"),
            Self::AccessDenied(nick) => Reply::new(Code::Banned, format!("{nick} is banned")),
            Self::NoSuchTarget(target) => {
                Reply::new(Code::NoSuchTarget, format!("{target}: No such target"))
            }
            Self::UnknownCommand(name) => {
                Reply::new(Code::UnknownCommand, format!("{name}: Unknown command"))
            }
            Self::NotACommand => Reply::new(Code::NotACommand, "Not a command"),
            Self::NoHandler(path) => {
                Reply::new(Code::NoHandler, format!("{path}: Incomplete command"))
            }

            // These errors don't get client-visible replies
            Self::Send(_) => return None,
            Self::Quit(_) => return None,
            Self::Internal(_) => return None,
        };
        Some(reply)
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;
