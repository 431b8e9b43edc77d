use anyhow::{Context, Result};
use axum_server::Handle;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;

/// In-flight requests get this long to finish once a shutdown signal arrives.
pub(crate) const GRACE_PERIOD: Duration = Duration::from_secs(30);

/// Spawns a task that starts a graceful shutdown of `handle` on Ctrl+C or SIGTERM.
pub(crate) fn watch(handle: Handle<SocketAddr>) {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(signal) => {
                tracing::info!(signal, grace = ?GRACE_PERIOD, "Shutting down");
                handle.graceful_shutdown(Some(GRACE_PERIOD));
            },
            Err(e) => tracing::error!(error = %e, "Shutdown signal listener failed"),
        }
    });
}

async fn wait_for_signal() -> Result<&'static str> {
    let ctrl_c = async {
        signal::ctrl_c().await.context("Ctrl+C handler could not be installed")?;
        Ok::<_, anyhow::Error>("SIGINT")
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("SIGTERM handler could not be installed")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>("SIGTERM")
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<&'static str>>();

    tokio::select! {
        received = ctrl_c => received,
        received = terminate => received,
    }
}
