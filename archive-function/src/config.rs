use anyhow::Result;
use serde::{Deserialize, Serialize};
use shared::store::StorageConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub port: u16,
    pub storage: StorageConfig,
    pub root_prefix: String,
    pub public_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut root_prefix = std::env::var("ARCHIVE_ROOT")
            .unwrap_or_else(|_| "dazhongruanjian/".to_string());
        if !root_prefix.ends_with('/') {
            root_prefix.push('/');
        }

        Ok(Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
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
            root_prefix,
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "https://www.chinesegamearchive.com".to_string()),
        })
    }
}
