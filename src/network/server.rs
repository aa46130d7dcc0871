//! HTTP Server
//!
//! Binds the listener and dispatches requests to the handlers.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, put};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::engine::Engine;
use crate::error::Result;
use super::handlers;

/// HTTP server for a PeerCache node
pub struct Server {
    config: Config,
    engine: Arc<Engine>,
}

impl Server {
    /// Create a new server with the given config and engine
    pub fn new(config: Config, engine: Arc<Engine>) -> Self {
        Self { config, engine }
    }

    /// Bind the listen address and serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.listen_addr()).await?;
        tracing::info!("Cache started on {}", listener.local_addr()?);

        axum::serve(listener, router(self.engine))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Serve on an already-bound listener until the task is dropped
pub async fn serve(listener: TcpListener, engine: Arc<Engine>) -> Result<()> {
    axum::serve(listener, router(engine)).await?;
    Ok(())
}

/// Routes for the client API and the peer sync endpoint
pub fn router(engine: Arc<Engine>) -> Router {
    Router::new()
        .route("/put/", put(handlers::put))
        .route("/put/:key", put(handlers::put))
        .route("/get/", get(handlers::get))
        .route("/get/:key", get(handlers::get))
        .route("/delete/", axum::routing::delete(handlers::delete))
        .route("/delete/:key", axum::routing::delete(handlers::delete))
        .route("/all", get(handlers::all))
        .route("/sync/", put(handlers::sync_put).delete(handlers::sync_delete))
        .route("/sync/:key", put(handlers::sync_put).delete(handlers::sync_delete))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, initiating shutdown...");
}
