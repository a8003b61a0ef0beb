use std::future::{Future, IntoFuture};
use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::oneshot;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("server I/O error")]
    Io(#[from] std::io::Error),

    #[error("server forced to shutdown: in-flight requests still running after {0:?}")]
    ShutdownTimeout(Duration),

    #[error("server task failed")]
    Join(#[from] tokio::task::JoinError),
}

/// Serves `app` on a background task until `shutdown` resolves, then stops
/// accepting connections and waits at most `grace` for in-flight requests.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()>,
    grace: Duration,
) -> Result<(), ServeError> {
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = stop_rx.await;
        })
        .into_future();
    let mut handle = tokio::spawn(server);

    tokio::select! {
        joined = &mut handle => {
            // Listener died before any shutdown request
            joined??;
            return Ok(());
        }
        _ = shutdown => {}
    }

    info!("Shutting down server...");
    let _ = stop_tx.send(());

    match tokio::time::timeout(grace, &mut handle).await {
        Ok(joined) => {
            joined??;
            info!("Server exiting");
            Ok(())
        }
        Err(_) => {
            handle.abort();
            Err(ServeError::ShutdownTimeout(grace))
        }
    }
}

/// Resolves on SIGINT (Ctrl+C) or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C), shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully");
        },
    }
}
