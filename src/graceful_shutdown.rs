use tokio::signal;

/// Resolves when the process is asked to stop (Ctrl+C, or SIGTERM on unix),
/// so `main` can drop the listener and let in-flight requests finish.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        signal(SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        result = signal::ctrl_c() => {
            result.expect("Failed to listen for Ctrl+C");
            tracing::warn!("Ctrl+C received, shutting down CoachDesk API");
        }
        _ = terminate => {
            tracing::warn!("SIGTERM received, shutting down CoachDesk API");
        }
    }
}
