//! Telemetry utilities.

/// Standardized span constructors.
pub mod spans {
    use std::net::SocketAddr;
    use tracing::{Span, info_span};

    /// Create a span for a client connection.
    pub fn connection(uid: &str, addr: &SocketAddr) -> Span {
        info_span!("connection", uid = %uid, addr = %addr)
    }

    /// Create a span for a command execution.
    pub fn command(name: &str, uid: &str) -> Span {
        info_span!("command", name = %name, uid = %uid)
    }
}
