//! Storage provider client.
//!
//! The listers only see the [`ObjectStore`] trait; the production
//! implementation wraps a rust-s3 bucket against the provider's
//! S3-compatible endpoint. The client is built once at process startup and
//! injected, never held as ambient global state.

use async_trait::async_trait;
use s3::bucket::Bucket;
use s3::creds::Credentials;
use s3::region::Region;
use serde::{Deserialize, Serialize};

use crate::error::ListingError;
use crate::Result;

/// One page of listing results, at most `max_keys` entries. No follow-up
/// page is ever requested.
#[derive(Debug, Default, Clone)]
pub struct ListPage {
    /// Delimiter-grouped folder results, verbatim from the provider
    /// (queried prefix and trailing `/` still attached).
    pub common_prefixes: Vec<String>,
    /// Object keys under the queried prefix.
    pub keys: Vec<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch a single listing page for `prefix`. A delimiter of `"/"`
    /// groups results one folder level deep; `None` lists all keys
    /// recursively up to `max_keys`.
    async fn list_page(
        &self,
        prefix: &str,
        delimiter: Option<String>,
        max_keys: usize,
    ) -> Result<ListPage>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub endpoint: String,
    pub region: String,
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
}

pub struct S3ObjectStore {
    bucket: Box<Bucket>,
}

impl S3ObjectStore {
    pub fn new(config: &StorageConfig) -> anyhow::Result<Self> {
        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )?;
        let bucket = Bucket::new(&config.bucket, region, credentials)?.with_path_style();
        Ok(Self { bucket })
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn list_page(
        &self,
        prefix: &str,
        delimiter: Option<String>,
        max_keys: usize,
    ) -> Result<ListPage> {
        let (result, status) = self
            .bucket
            .list_page(prefix.to_string(), delimiter, None, None, Some(max_keys))
            .await
            .map_err(|e| ListingError::Provider(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(ListingError::Status(status));
        }

        Ok(ListPage {
            common_prefixes: result
                .common_prefixes
                .into_iter()
                .flatten()
                .map(|p| p.prefix)
                .collect(),
            keys: result.contents.into_iter().map(|obj| obj.key).collect(),
        })
    }
}
