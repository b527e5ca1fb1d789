use axum::{middleware::from_fn_with_state, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use shared::store::ObjectStore;

use crate::config::Config;
use crate::{handlers, middleware};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn ObjectStore>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS is unconditional; the referer gate covers /api/* only.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/api/years", get(handlers::years))
        .route("/api/issues", get(handlers::issues))
        .route("/api/pages", get(handlers::pages))
        .layer(from_fn_with_state(state.clone(), middleware::referer_gate));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
