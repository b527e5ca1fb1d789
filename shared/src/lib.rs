//! Shared listing logic for the magazine scan archive API.
//!
//! Both deployment variants (the standalone server and the cloud function
//! adapter) consume this crate: the storage client abstraction, the two
//! listing routines, the numeric-aware filename comparator, and page URL
//! construction all live here so the entry points stay thin adapters.

pub mod error;
pub mod listing;
pub mod natsort;
pub mod store;

pub use error::ListingError;
pub use store::{ListPage, ObjectStore, S3ObjectStore, StorageConfig};

pub type Result<T> = std::result::Result<T, ListingError>;
