//! Local counting service.
//!
//! Implements the collaborator contract (`GET /count?amount=N` answering
//! `{"data": <delta>}`) so the client can be exercised without a remote
//! deployment.

mod routes;

pub use routes::{build_router, ServeOptions};

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

pub struct CountServer {
    listener: TcpListener,
    options: ServeOptions,
    shutdown: Arc<Notify>,
}

impl CountServer {
    /// Bind the listener. Port 0 picks a free port; see [`CountServer::local_addr`].
    pub async fn bind(addr: SocketAddr, options: ServeOptions) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            options,
            shutdown: Arc::new(Notify::new()),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: Arc::clone(&self.shutdown),
        }
    }

    /// Serve until [`ServerHandle::shutdown`] is called.
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self.listener.local_addr()?;
        tracing::info!(%addr, delta = ?self.options.delta, "Counting service listening");

        let shutdown = self.shutdown;
        axum::serve(self.listener, build_router(self.options))
            .with_graceful_shutdown(async move {
                shutdown.notified().await;
            })
            .await?;

        tracing::info!("Counting service stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<Notify>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        // Stores a permit, so a shutdown requested before `run` awaits is not lost.
        self.shutdown.notify_one();
    }
}

/// Run the service on `addr` until Ctrl+C.
pub async fn serve(addr: SocketAddr, options: ServeOptions) -> std::io::Result<()> {
    let server = CountServer::bind(addr, options).await?;
    let handle = server.handle();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Ctrl+C received, shutting down"),
            Err(err) => tracing::error!(error = %err, "Failed to listen for Ctrl+C"),
        }
        handle.shutdown();
    });
    server.run().await
}
