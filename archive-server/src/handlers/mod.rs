use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use shared::listing;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct IssuesQuery {
    pub year: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PagesQuery {
    pub year: Option<String>,
    pub issue: Option<String>,
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// List the year folders at the archive root
pub async fn years(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let years =
        listing::list_folders(state.store.as_ref(), &state.config.archive.root_prefix).await?;
    Ok(Json(years))
}

/// List the issue folders within a year
pub async fn issues(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IssuesQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    let year = require(query.year.as_deref(), "year")?;

    let prefix = format!("{}{}/", state.config.archive.root_prefix, year);
    let issues = listing::list_folders(state.store.as_ref(), &prefix).await?;
    Ok(Json(issues))
}

/// List the page image URLs within an issue, numeric-aware sorted
pub async fn pages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PagesQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    let year = require(query.year.as_deref(), "year")?;
    let issue = require(query.issue.as_deref(), "issue")?;

    let prefix = format!("{}{}/{}/", state.config.archive.root_prefix, year, issue);
    let names = listing::list_images(state.store.as_ref(), &prefix).await?;
    Ok(Json(listing::page_urls(
        &state.config.archive.public_base_url,
        year,
        issue,
        &names,
    )))
}

/// An absent or empty parameter is rejected before any remote call.
fn require<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ApiError::MissingParameter(name))
}
