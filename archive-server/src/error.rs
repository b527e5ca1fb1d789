use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shared::ListingError;

/// Request-boundary error type. Everything converts to the
/// `{"error": "<message>"}` JSON envelope the clients expect.
#[derive(Debug)]
pub enum ApiError {
    /// A required query parameter is absent; rejected before any remote
    /// call is made.
    MissingParameter(&'static str),
    Listing(ListingError),
}

impl From<ListingError> for ApiError {
    fn from(err: ListingError) -> Self {
        ApiError::Listing(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingParameter(name) => (
                StatusCode::BAD_REQUEST,
                format!("missing required parameter: {name}"),
            ),
            ApiError::Listing(err) => {
                tracing::error!("listing failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
