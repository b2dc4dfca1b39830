use std::time::Duration;

/// Failure reading or writing the browser key-value store.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Local storage is unavailable")]
    Unavailable,

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Failure fetching one category feed from the catalog.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse JSON: {0}")]
    Decode(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}
