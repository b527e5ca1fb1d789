use anyhow::Result;
use axum::{
    body::Body,
    extract::{Query, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use archive_function::{config::Config, handle_event, FunctionEvent, FunctionResponse, FunctionState};
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

    info!("Starting archive function adapter...");

    // Load configuration
    let config = Config::from_env()?;

    // Build the storage client once; invocations share it.
    let store = Arc::new(S3ObjectStore::new(&config.storage)?);
    info!(bucket = %config.storage.bucket, "Storage client initialized");

    let state = Arc::new(FunctionState {
        store,
        root_prefix: config.root_prefix.clone(),
        public_base_url: config.public_base_url.clone(),
    });

    // Every path goes through the event handler, 404s included.
    let app = Router::new().fallback(adapt).with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Archive function listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Adapt a plain HTTP request into a platform event and the handler's
/// envelope back into an HTTP response.
async fn adapt(
    State(state): State<Arc<FunctionState>>,
    Query(params): Query<HashMap<String, String>>,
    request: Request,
) -> Response {
    let event = FunctionEvent {
        http_method: request.method().to_string(),
        path: request.uri().path().to_string(),
        query_string: params,
    };

    envelope_response(handle_event(&state, &event).await)
}

fn envelope_response(envelope: FunctionResponse) -> Response {
    let mut builder = Response::builder().status(envelope.status_code);
    for (name, value) in &envelope.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    builder
        .body(Body::from(envelope.body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
