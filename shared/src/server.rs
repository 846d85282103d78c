//! HTTP server bootstrap with graceful shutdown

use axum::Router;
use std::net::SocketAddr;
use tokio::signal;

use crate::errors::{SharedError, SharedResult};
use crate::logging;
use crate::types::AppId;

/// Bind, serve and wait for Ctrl+C
pub async fn serve(router: Router, addr: SocketAddr) -> SharedResult<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| SharedError::ServerStartup {
            addr: addr.to_string(),
            message: e.to_string(),
        })?;

    let local_addr = listener.local_addr()?;
    crate::app_info!("🌐 {} listening on http://{}", AppId::current(), local_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    logging::log_success(AppId::current(), "Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(AppId::current(), "Received Ctrl+C signal"),
        Err(err) => logging::log_error(AppId::current(), "Signal handling", &err),
    }
}
