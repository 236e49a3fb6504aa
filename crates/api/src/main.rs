//! Main entry point for the ZakVibe backend.
//!
//! Initializes tracing, loads configuration from the environment, builds the
//! in-memory store and router, and serves until the process is stopped.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use zakvibe_api::{routes, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let addr = config.bind_address();

    let state = AppState::new(config.clone());
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, environment = %config.environment, "ZakVibe backend listening");

    axum::serve(listener, app)
        .await
        .context("server exited with error")?;

    Ok(())
}
