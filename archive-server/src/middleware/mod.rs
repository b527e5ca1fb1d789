use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::AppState;

/// Reject `/api/*` requests whose Referer does not start with the allowed
/// origin. A plain-text 403, matching the original deployment's behavior.
pub async fn referer_gate(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, RefererRejection> {
    let allowed = state.config.archive.allowed_referer.as_str();

    let permitted = request
        .headers()
        .get(header::REFERER)
        .and_then(|h| h.to_str().ok())
        .map(|referer| referer.starts_with(allowed))
        .unwrap_or(false);

    if !permitted {
        return Err(RefererRejection);
    }

    Ok(next.run(request).await)
}

#[derive(Debug)]
pub struct RefererRejection;

impl IntoResponse for RefererRejection {
    fn into_response(self) -> Response {
        (StatusCode::FORBIDDEN, "Forbidden").into_response()
    }
}
