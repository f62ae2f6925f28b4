use std::path::PathBuf;

use signup::config::Configuration;
use signup::error::ServerError;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    if let Err(err) = signup::telemetry::setup_logging() {
        eprintln!("logging already initialized: {err}");
    }

    let mut config = Configuration::default();
    if let Ok(path) = std::env::var("CONFIG_PATH") {
        config = config.path(PathBuf::from(path));
    }
    let config = config.read();

    let addr = config.socket_addr();
    let state = signup::initialize_state(config);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, version = state.config.version(), "server started");

    axum::serve(listener, signup::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
