//! Shutdown coordination for the server.
//!
//! # Responsibilities
//! - Wait for an interrupt (Ctrl+C, SIGTERM on Unix)
//! - Drive the listener through graceful shutdown with a bounded drain
//!
//! # Design Decisions
//! - New connections stop immediately; in-flight requests get a short
//!   grace period, then the process exits

use std::time::Duration;

use axum_server::Handle;
use tracing::info;

/// Grace period for draining in-flight requests.
const DRAIN_GRACE: Duration = Duration::from_secs(5);

/// Wait for an interrupt, then shut the server handle down gracefully.
///
/// Spawned alongside the listener; resolves only when a signal arrives.
pub async fn watch(handle: Handle) {
    shutdown_signal().await;
    println!("\nShutting down...");
    info!("shutdown signal received, draining connections");
    handle.graceful_shutdown(Some(DRAIN_GRACE));
}

/// Wait for a shutdown signal (Ctrl+C, plus SIGTERM on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
