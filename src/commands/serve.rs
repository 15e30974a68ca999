//! Serve command implementation.
//!
//! Binds the listener and runs the statistics server until Ctrl-C.

use crate::server;
use crate::utils::config::ServerConfig;
use anyhow::{Context, Result};
use log::{info, warn};
use tokio::net::TcpListener;

/// Arguments for the serve command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ServeArgs {
    pub config: ServerConfig,
}

/// Execute the serve command
///
/// **Public** - main entry point for the server
pub async fn execute_serve(args: ServeArgs) -> Result<()> {
    let listener = TcpListener::bind(args.config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", args.config.bind_addr))?;

    info!(
        "Server started on {} (body limit {} bytes)",
        args.config.bind_addr, args.config.body_limit
    );

    server::run(listener, &args.config, shutdown_signal())
        .await
        .context("Server terminated unexpectedly")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
