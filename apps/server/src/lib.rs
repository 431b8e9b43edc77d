//! # Warehouse Hub Server
//!
//! Axum server exposing the print-position catalog over REST, with `OpenAPI`
//! documentation served by Scalar at `/api`.
//!
//! ## Example
//! ```no_run
//! use whub_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(4583)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod router;
mod shutdown;

use anyhow::{Context, Result, anyhow, bail};
use axum::Router;
use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;
use std::net::SocketAddr;
use tracing::info;
use whub::domain::config::{ApiConfig, SslConfig};
use whub::kernel::server::ApiState;

/// Collects the configuration for a [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ApiConfig,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Overrides `server.port` from the configuration.
    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Initializes the feature slices and assembles the API state.
    ///
    /// # Errors
    /// Returns an error if a configured certificate or key file is missing, or
    /// if a feature slice fails to initialize.
    pub fn build(self) -> Result<Server> {
        if let Some(ssl) = &self.cfg.server.ssl {
            check_tls_files(ssl)?;
        }

        let slices = whub::init(&self.cfg).map_err(|e| anyhow!("Feature bootstrap failed: {e}"))?;
        info!(slices = slices.len(), port = self.cfg.server.port, "Server state assembled");

        let state = ApiState::builder()
            .config(self.cfg)
            .register_slices(slices)
            .build()
            .context("API state could not be built")?;

        Ok(Server { state })
    }
}

fn check_tls_files(ssl: &SslConfig) -> Result<()> {
    if !ssl.cert.exists() {
        bail!("SSL certificate not found at: {}", ssl.cert.display());
    }
    if !ssl.key.exists() {
        bail!("SSL key not found at: {}", ssl.key.display());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = ssl.key.metadata()?.permissions().mode();
        if mode & 0o077 != 0 {
            tracing::warn!(key = %ssl.key.display(), mode = %format_args!("{mode:o}"), "SSL key is readable by group or others");
        }
    }

    Ok(())
}

/// An assembled server; call [`Server::run`] to start listening.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// The complete application router (API routes, trace layer and docs).
    pub fn router(&self) -> Router {
        router::init(self.state.clone())
    }

    /// Serves HTTP, or HTTPS when `server.ssl` is set, until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    /// Returns an error if the address cannot be bound or the TLS files cannot be loaded.
    pub async fn run(self) -> Result<()> {
        let server_cfg = self.state.config.server.clone();
        let address = SocketAddr::new(server_cfg.address, server_cfg.port);
        let service = self.router().into_make_service();

        let handle = Handle::<SocketAddr>::new();
        shutdown::watch(handle.clone());

        let served = match &server_cfg.ssl {
            Some(ssl) => {
                let tls = RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
                    .await
                    .context("TLS certificate or key could not be loaded")?;
                info!(%address, "Listening on https://{address}");
                axum_server::bind_rustls(address, tls).handle(handle).serve(service).await
            },
            None => {
                info!(%address, "Listening on http://{address}");
                axum_server::bind(address).handle(handle).serve(service).await
            },
        };
        served.with_context(|| format!("Server on {address} stopped with an error"))?;

        info!("Server stopped");
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }
}
