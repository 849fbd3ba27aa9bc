//! Graceful shutdown handling
//!
//! Resolves on SIGTERM or SIGINT so `axum::serve` can stop accepting
//! connections and let in-flight requests finish.

use tracing::{info, warn};

/// Wait for a shutdown signal (SIGTERM, SIGINT)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT signal (Ctrl+C)"),
        _ = terminate => info!("Received SIGTERM signal"),
    }

    info!("Shutting down, waiting for in-flight requests");
}
