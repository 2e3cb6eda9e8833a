//! atrium-server - REST API server binary.

use std::net::SocketAddr;

use atrium_core::config::{AppConfig, EnvProfile};
use atrium_server::{build_state, create_server};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with the verbosity profile selected by ENVIRONMENT
    let profile = EnvProfile::from_env();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(profile.default_directive().parse()?))
        .init();

    // Load configuration; a missing variable aborts startup here, not
    // inside the loader
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            std::process::exit(1);
        }
    };

    // Connect the stores and ensure the graph schema; failures here are
    // fatal - the service must not run without its schema
    let state = match build_state(&config).await {
        Ok(state) => state,
        Err(err) => {
            error!(error = %err, "startup failed");
            std::process::exit(1);
        }
    };

    let app = create_server(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Starting atrium-server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped cleanly");
    Ok(())
}
