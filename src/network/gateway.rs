//! Gateway - TCP listener that accepts incoming connections.
//!
//! The Gateway binds to a socket and spawns a Connection task for each
//! incoming client.

use crate::config::LimitsConfig;
use crate::handlers::Registry;
use crate::network::Connection;
use crate::state::Matrix;
use crate::telemetry::spans;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{Instrument, error, info, instrument};

/// The Gateway accepts incoming TCP connections and spawns handlers.
pub struct Gateway {
    listener: TcpListener,
    matrix: Arc<Matrix>,
    registry: Arc<Registry>,
    limits: LimitsConfig,
}

impl Gateway {
    /// Bind the gateway to the specified address.
    ///
    /// The registry must be complete: it is shared read-only with every
    /// connection from here on.
    pub async fn bind(
        addr: SocketAddr,
        matrix: Arc<Matrix>,
        registry: Arc<Registry>,
        limits: LimitsConfig,
    ) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!(addr = %listener.local_addr()?, "Listener bound");

        Ok(Self {
            listener,
            matrix,
            registry,
            limits,
        })
    }

    /// Run the gateway, accepting connections forever.
    #[instrument(skip(self), name = "gateway")]
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let uid = self.matrix.uid_gen.next();
                    info!(%uid, %addr, "Connection accepted");

                    let connection = Connection::new(
                        uid.clone(),
                        stream,
                        addr,
                        Arc::clone(&self.matrix),
                        Arc::clone(&self.registry),
                        self.limits.clone(),
                    );
                    let span = spans::connection(&uid, &addr);

                    tokio::spawn(
                        async move {
                            if let Err(e) = connection.run().await {
                                error!(%uid, %addr, error = %e, "Connection error");
                            }
                            info!(%uid, %addr, "Connection closed");
                        }
                        .instrument(span),
                    );
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }
}
