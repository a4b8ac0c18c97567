//! HTTP Server
//!
//! Binds the listener and serves the router until shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use super::router;
use crate::config::Config;
use crate::error::Result;
use crate::store::Store;

/// HTTP server for nullkv
pub struct Server {
    listener: TcpListener,
    store: Arc<Store>,
}

impl Server {
    /// Bind to `config.addr()`
    ///
    /// Port 0 picks an ephemeral port; see [`Server::local_addr`].
    pub async fn bind(config: &Config, store: Arc<Store>) -> Result<Self> {
        let listener = TcpListener::bind(config.addr()).await?;
        Ok(Self { listener, store })
    }

    /// Address the listener is actually bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// The store served by this instance
    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        self.run_until(ctrl_c()).await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        let Server { listener, store } = self;

        tracing::info!("Listening on http://{}", addr);

        axum::serve(listener, router(Arc::clone(&store)))
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server stopped, discarding {} keys", store.len());
        Ok(())
    }
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => tracing::warn!("Ctrl+C handler failed: {}", e),
    }
}
