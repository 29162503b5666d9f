//! Network listener configuration.

use serde::Deserialize;
use std::net::SocketAddr;

/// Network listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ListenConfig {
    /// Address to bind to (e.g., "0.0.0.0:6670").
    pub address: SocketAddr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_socket_address() {
        let config: ListenConfig = toml::from_str("address = \"0.0.0.0:6670\"").unwrap();
        assert_eq!(config.address.port(), 6670);
        assert!(config.address.ip().is_unspecified());
    }

    #[test]
    fn rejects_bad_address() {
        assert!(toml::from_str::<ListenConfig>("address = \"localhost\"").is_err());
    }
}
