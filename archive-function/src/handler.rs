use serde_json::json;
use std::sync::Arc;

use shared::listing;
use shared::store::ObjectStore;
use shared::ListingError;

use crate::event::{FunctionEvent, FunctionResponse};

/// State built once at startup and shared across invocations.
pub struct FunctionState {
    pub store: Arc<dyn ObjectStore>,
    /// Key prefix of the archive root inside the bucket; always ends in `/`.
    pub root_prefix: String,
    /// Base URL that page image filenames are appended to.
    pub public_base_url: String,
}

/// Route one platform event to the listers and build the response envelope.
pub async fn handle_event(state: &FunctionState, event: &FunctionEvent) -> FunctionResponse {
    match event.path.as_str() {
        "/api/years" => {
            let result = listing::list_folders(state.store.as_ref(), &state.root_prefix).await;
            respond_with(result)
        }
        "/api/issues" => {
            let Some(year) = param(event, "year") else {
                return missing_parameter("year");
            };

            let prefix = format!("{}{}/", state.root_prefix, year);
            let result = listing::list_folders(state.store.as_ref(), &prefix).await;
            respond_with(result)
        }
        "/api/pages" => {
            let Some(year) = param(event, "year") else {
                return missing_parameter("year");
            };
            let Some(issue) = param(event, "issue") else {
                return missing_parameter("issue");
            };

            let prefix = format!("{}{}/{}/", state.root_prefix, year, issue);
            match listing::list_images(state.store.as_ref(), &prefix).await {
                Ok(names) => {
                    let urls = listing::page_urls(&state.public_base_url, year, issue, &names);
                    FunctionResponse::json(200, json!(urls))
                }
                Err(err) => listing_failure(err),
            }
        }
        _ => FunctionResponse::json(404, json!({ "error": "no such endpoint" })),
    }
}

fn param<'a>(event: &'a FunctionEvent, name: &str) -> Option<&'a str> {
    event
        .query_string
        .get(name)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

fn missing_parameter(name: &str) -> FunctionResponse {
    FunctionResponse::json(400, json!({ "error": format!("missing required parameter: {name}") }))
}

fn respond_with(result: Result<Vec<String>, ListingError>) -> FunctionResponse {
    match result {
        Ok(entries) => FunctionResponse::json(200, json!(entries)),
        Err(err) => listing_failure(err),
    }
}

fn listing_failure(err: ListingError) -> FunctionResponse {
    tracing::error!("listing failed: {}", err);
    FunctionResponse::json(500, json!({ "error": err.to_string() }))
}
