//! Graceful shutdown
//!
//! ```rust,ignore
//! axum::serve(listener, router)
//!     .with_graceful_shutdown(demo_api::lifecycle::shutdown_signal())
//!     .await?;
//! ```

use tokio::signal;

/// Completes when Ctrl+C or SIGTERM is received
///
/// A signal handler that cannot be installed is logged and never fires, so
/// the server keeps running until the other signal arrives.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }
}
