// Fri Jan 16 2026 - Alex

use thiserror::Error;

/// Failures inside the index cache. These never leave the cache: every one of
/// them is logged and handled as a miss.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Key mismatch: expected {expected}, found {found}")]
    KeyMismatch { expected: String, found: String },
    #[error("Persist failed: {0}")]
    Persist(#[from] tempfile::PersistError),
}
