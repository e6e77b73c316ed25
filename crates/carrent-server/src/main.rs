//! CarRent Server: application entry point.

use anyhow::{Context, Result};
use carrent_imagekit::ImageKitClient;
use carrent_server::config::DEFAULT_CONFIG_FILE;
use carrent_server::{AppState, ServerConfig, build_router};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;

    let config = ServerConfig::load(DEFAULT_CONFIG_FILE).context("Failed to load configuration")?;

    tracing::info!("Starting CarRent server...");

    let db = carrent_db::DbManager::connect(&config.database)
        .await
        .context("Failed to connect to SurrealDB")?;
    carrent_db::run_migrations(db.client())
        .await
        .context("Failed to apply migrations")?;

    // Every repository handle lives inside the router and is dropped when
    // `serve` returns, leaving `db` as the last one.
    let served = serve(&config, db.client().clone()).await;

    db.disconnect();
    tracing::info!("CarRent server stopped.");
    served
}

async fn serve(config: &ServerConfig, client: Surreal<Any>) -> Result<()> {
    let images =
        ImageKitClient::new(config.imagekit.clone()).context("Failed to build ImageKit client")?;
    let state = AppState::new(client, images, config.auth.clone(), config.images.clone());
    let app = build_router(state, config);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Unexpected error happened in server")
        .inspect_err(|e| {
            tracing::error!(error.cause_chain = ?e, error.message = %e, "Unexpected error")
        })
}

fn init_logger() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("carrent=info,tower_http=info"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error.message = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
