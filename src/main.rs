//! lineoptd - line-oriented command daemon.
//!
//! Accepts TCP connections and resolves every incoming line against a tree
//! of dotted command chains (`.admin.ban nick reason`).

mod config;
mod error;
mod handlers;
mod network;
mod reply;
mod state;
mod telemetry;

use crate::config::{Config, validate};
use crate::handlers::Registry;
use crate::network::Gateway;
use crate::state::Matrix;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    if let Err(errors) = validate(&config) {
        for e in &errors {
            error!(path = %config_path, error = %e, "Invalid config");
        }
        anyhow::bail!("{} configuration error(s) in {config_path}", errors.len());
    }

    info!(
        server = %config.server.name,
        markers = ?config.commands.markers,
        lower = %config.commands.delimiters.lower,
        casemapping = ?config.commands.casemapping,
        "Starting lineoptd"
    );

    // The command tree is complete before anything can resolve against it
    let registry = Arc::new(Registry::new(&config.commands));
    info!(commands = registry.command_count(), "Command registry built");

    let matrix = Arc::new(Matrix::new(&config));

    let gateway = Gateway::bind(
        config.listen.address,
        Arc::clone(&matrix),
        registry,
        config.limits.clone(),
    )
    .await?;

    tokio::select! {
        result = gateway.run() => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
