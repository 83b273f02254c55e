//! ShiftX web frontend.
//!
//! This is the application entry point. It initializes tracing, resolves the
//! listen address from CLI arguments and the environment, sets up the Axum
//! router, and starts the HTTP server.

mod config;
mod middleware;
mod routes;
mod server;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{ServerConfig, DEFAULT_LOG_FILTER};
use routes::create_router;

/// ShiftX platform web frontend
#[derive(Parser, Debug)]
#[command(name = "shiftx-web", version, about)]
struct Args {
    /// Interface to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "shiftx_web=debug,axum=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Resolve listen address: CLI > PORT env var > defaults
    let config = ServerConfig::resolve(args.host, args.port)?;
    tracing::info!(host = %config.host, port = config.port, "Resolved configuration");

    // Create router
    let app = create_router();

    // Start server; runs until the process is terminated externally
    server::start_server(app, config.socket_addr()?).await?;

    Ok(())
}
