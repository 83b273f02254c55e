//! HTTP server startup logic.
//!
//! Binds the listener and serves the router until the process is terminated
//! externally. A bind failure (port in use, permission denied) propagates to
//! the caller and aborts startup.

use std::net::SocketAddr;

use axum::Router;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Bind the listen address and serve the application.
///
/// This function blocks until the server is terminated.
pub async fn start_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting server at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
