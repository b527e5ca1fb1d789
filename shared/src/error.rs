//! Error types for storage listing operations.

use thiserror::Error;

/// Failure of a storage listing call. Both variants surface as a server
/// error at the HTTP boundary; the distinction is whether the provider
/// returned anything at all.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Transport or auth failure from the provider client. The provider's
    /// message is passed through verbatim.
    #[error("storage listing failed: {0}")]
    Provider(String),

    /// The listing call completed but with a non-success status code.
    #[error("storage listing failed with status {0}")]
    Status(u16),
}

impl ListingError {
    pub fn http_status_code(&self) -> u16 {
        match self {
            ListingError::Provider(_) => 500,
            ListingError::Status(_) => 500,
        }
    }
}
