//! Local HTTP server hosting a stub responder.
//!
//! # Responsibilities
//! - Bind a listener (ephemeral port by default) and report its URL
//! - Serve the stub router with tracing and request timeout layers
//! - Shut down gracefully on request or when dropped

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use url::Url;

use crate::config::ServerConfig;
use crate::lifecycle::Shutdown;
use crate::responder::StubResponder;

/// A running HTTP server answering every request with a [`StubResponder`].
///
/// The server stops when [`StubServer::shutdown`] is awaited or the value is dropped.
#[derive(Debug)]
pub struct StubServer {
    addr: SocketAddr,
    url: Url,
    shutdown: Shutdown,
    handle: Option<JoinHandle<io::Result<()>>>,
}

impl StubServer {
    /// Start a server on an ephemeral port of the loopback interface.
    pub async fn start(responder: StubResponder) -> io::Result<Self> {
        Self::start_with_config(responder, &ServerConfig::ephemeral()).await
    }

    /// Start a server on the configured address.
    pub async fn start_with_config(
        responder: StubResponder,
        config: &ServerConfig,
    ) -> io::Result<Self> {
        let listener = TcpListener::bind(&config.bind_address).await?;
        Self::from_listener(listener, responder, config)
    }

    /// Serve on an already bound listener.
    pub fn from_listener(
        listener: TcpListener,
        responder: StubResponder,
        config: &ServerConfig,
    ) -> io::Result<Self> {
        let addr = listener.local_addr()?;
        let url = Url::parse(&format!("http://{}/", addr)).map_err(io::Error::other)?;

        let shutdown = Shutdown::new();
        let mut signal = shutdown.subscribe();
        let app = Self::build_router(responder, config);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = signal.recv().await;
                })
                .await
        });

        tracing::info!(
            address = %addr,
            request_timeout_secs = config.request_timeout_secs,
            "Stub server listening"
        );

        Ok(Self {
            addr,
            url,
            shutdown,
            handle: Some(handle),
        })
    }

    /// Build the router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(responder: StubResponder, config: &ServerConfig) -> Router {
        responder
            .into_router()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// The bound socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL of the server, e.g. `http://127.0.0.1:41234/`.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Stop accepting connections and wait for in-flight requests to finish.
    pub async fn shutdown(mut self) -> io::Result<()> {
        self.shutdown.trigger();
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        handle.await.map_err(io::Error::other)??;
        tracing::info!(address = %self.addr, "Stub server stopped");
        Ok(())
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}
