//! Operator block configuration.

use serde::Deserialize;

/// Operator block configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OperBlock {
    /// Operator name (used in the `oper` command).
    pub name: String,
    /// Password, plaintext or a bcrypt hash.
    pub password: String,
}

impl OperBlock {
    /// Verify the provided password against the stored one. Values starting
    /// with `$2` are checked as bcrypt hashes.
    pub fn verify_password(&self, password: &str) -> bool {
        if self.password.starts_with("$2") {
            bcrypt::verify(password, &self.password).unwrap_or(false)
        } else {
            self.password == password
        }
    }
}
