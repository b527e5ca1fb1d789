use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use archive_server::{config::Config, create_router, AppState};
use shared::store::S3ObjectStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting archive server...");

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded successfully");

    // Build the storage client once; every request shares it.
    let store = Arc::new(S3ObjectStore::new(&config.storage)?);
    info!(bucket = %config.storage.bucket, "Storage client initialized");

    let state = Arc::new(AppState {
        config: config.clone(),
        store,
    });

    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Archive server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
