use anyhow::Result;
use serde::{Deserialize, Serialize};
use shared::store::StorageConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub archive: ArchiveConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Key prefix of the archive root inside the bucket; always ends in `/`.
    pub root_prefix: String,
    /// Base URL that page image filenames are appended to.
    pub public_base_url: String,
    /// Requests to `/api/*` must carry a Referer starting with this origin.
    pub allowed_referer: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut root_prefix = std::env::var("ARCHIVE_ROOT")
            .unwrap_or_else(|_| "dazhongruanjian/".to_string());
        if !root_prefix.ends_with('/') {
            root_prefix.push('/');
        }

        Ok(Self {
            server: ServerConfig {
                host: std::env::var("SERVER_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()?,
            },
            storage: StorageConfig {
                endpoint: std::env::var("STORAGE_ENDPOINT")
                    .unwrap_or_else(|_| "https://s3.ap-southeast-1.qiniucs.com".to_string()),
                region: std::env::var("STORAGE_REGION")
                    .unwrap_or_else(|_| "ap-southeast-1".to_string()),
                bucket: std::env::var("STORAGE_BUCKET")
                    .unwrap_or_else(|_| "dazhongruanjian".to_string()),
                access_key: std::env::var("QINIU_ACCESS_KEY")?,
                secret_key: std::env::var("QINIU_SECRET_KEY")?,
            },
            archive: ArchiveConfig {
                root_prefix,
                public_base_url: std::env::var("PUBLIC_BASE_URL")
                    .unwrap_or_else(|_| "https://www.chinesegamearchive.com".to_string()),
                allowed_referer: std::env::var("ALLOWED_REFERER")
                    .unwrap_or_else(|_| "https://www.chinesegamearchive.com".to_string()),
            },
        })
    }
}
