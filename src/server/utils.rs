//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::CatalogError;
use tracing::{info, warn};

impl HttpServer {
    /// Resolves on Ctrl+C or SIGTERM
    pub async fn shutdown_signal() {
        let ctrl_c = async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received Ctrl+C signal, shutting down gracefully"),
                Err(e) => warn!("Failed to install Ctrl+C handler: {}", e),
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut signal) => {
                    signal.recv().await;
                    info!("Received terminate signal, shutting down gracefully");
                }
                Err(e) => {
                    warn!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
    }

    /// Turn a bind failure into an actionable message
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> CatalogError {
        match error.kind() {
            std::io::ErrorKind::AddrInUse => CatalogError::server(format!(
                "Port {} is already in use. Stop the other process or start with PORT={}",
                port,
                port.saturating_add(1)
            )),
            std::io::ErrorKind::PermissionDenied => CatalogError::server(format!(
                "Permission denied for port {}. Use a port >= 1024, for example PORT=3000",
                port
            )),
            _ => CatalogError::server(format!("Failed to bind to {}: {}", bind_addr, error)),
        }
    }
}
