//! Numeric reply lines sent back to clients.
//!
//! Every reply is a single line: a three-digit code, a space, and free text.

use std::fmt;

/// Reply codes. The numbering follows the IRC numerics they resemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    /// Command succeeded.
    Ok,
    /// The named target does not exist.
    NoSuchTarget,
    /// The line did not start with a command marker.
    NotACommand,
    /// A segment of the command chain is not registered.
    UnknownCommand,
    /// The chain names a group of sub-commands, not a command.
    NoHandler,
    /// The command needs an argument.
    NeedMoreParams,
    /// Operator login failed.
    PasswordMismatch,
    /// The nick is banned.
    Banned,
    /// The command requires operator status.
    NoPrivileges,
    /// The line exceeded the configured maximum length.
    InputTooLong,
}

impl Code {
    /// The numeric value.
    pub const fn number(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::NoSuchTarget => 401,
            Self::NotACommand => 420,
            Self::UnknownCommand => 421,
            Self::NoHandler => 422,
            Self::NeedMoreParams => 461,
            Self::PasswordMismatch => 464,
            Self::Banned => 465,
            Self::InputTooLong => 417,
            Self::NoPrivileges => 481,
        }
    }
}

/// A reply line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub code: Code,
    pub text: String,
}

impl Reply {
    /// Create a reply.
    pub fn new(code: Code, text: impl Into<String>) -> Self {
        Self {
            code,
            text: text.into(),
        }
    }

    /// Create a success reply.
    pub fn ok(text: impl Into<String>) -> Self {
        Self::new(Code::Ok, text)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03} {}", self.code.number(), self.text)
    }
}
