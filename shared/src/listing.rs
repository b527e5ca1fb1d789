//! The two listing routines behind the three API endpoints.
//!
//! Both issue exactly one listing call against the injected store, scoped
//! to a key prefix that always ends in `/`. Results are capped at
//! [`LIST_LIMIT`] items; anything beyond the first page of a larger bucket
//! is ignored, an accepted limitation of the API.

use crate::natsort;
use crate::store::ObjectStore;
use crate::Result;

/// Maximum entries considered per listing call. No pagination follow-up.
pub const LIST_LIMIT: usize = 1000;

/// List the immediate child folders under `prefix`.
///
/// Uses a `/` delimiter so the provider groups one directory level; each
/// common prefix comes back with the queried prefix and trailing slash
/// stripped. Order is whatever the provider returned.
pub async fn list_folders(store: &dyn ObjectStore, prefix: &str) -> Result<Vec<String>> {
    let page = store
        .list_page(prefix, Some("/".to_string()), LIST_LIMIT)
        .await?;
    Ok(page
        .common_prefixes
        .iter()
        .map(|p| {
            p.strip_prefix(prefix)
                .unwrap_or(p)
                .trim_end_matches('/')
                .to_string()
        })
        .filter(|name| !name.is_empty())
        .collect())
}

/// List the page images under `prefix`, sorted numeric-aware ascending.
///
/// Lists recursively (no delimiter), strips the queried prefix from each
/// key, keeps only case-insensitive `.jpg` names, and sorts so `2.jpg`
/// precedes `10.jpg`.
pub async fn list_images(store: &dyn ObjectStore, prefix: &str) -> Result<Vec<String>> {
    let page = store.list_page(prefix, None, LIST_LIMIT).await?;
    let mut names: Vec<String> = page
        .keys
        .iter()
        .map(|key| key.strip_prefix(prefix).unwrap_or(key))
        .filter(|name| has_jpg_extension(name))
        .map(str::to_string)
        .collect();
    names.sort_by(|a, b| natsort::compare(a, b));
    Ok(names)
}

/// Build the public URL for each page image, `{base}/{year}/{issue}/{name}`.
pub fn page_urls(base_url: &str, year: &str, issue: &str, names: &[String]) -> Vec<String> {
    let base = base_url.trim_end_matches('/');
    names
        .iter()
        .map(|name| format!("{base}/{year}/{issue}/{name}"))
        .collect()
}

fn has_jpg_extension(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".jpg")
}
