use thiserror::Error;

use crate::keys::StorageKey;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Generic I/O error (e.g. creating the data directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted value exists but does not decode into the expected shape.
    #[error("malformed data under {key}: {source}")]
    Malformed {
        key: StorageKey,
        #[source]
        source: serde_json::Error,
    },

    /// Value could not be encoded for storage.
    #[error("failed to encode {key}: {source}")]
    Serialize {
        key: StorageKey,
        #[source]
        source: serde_json::Error,
    },

    /// Backend-specific failure that is not an I/O error.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
