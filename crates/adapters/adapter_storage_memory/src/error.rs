//! Storage-specific error type.

use quill_domain::error::QuillError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A writer panicked while holding the store lock.
    #[error("post store lock poisoned")]
    Poisoned,

    /// The embedded seed document could not be decoded.
    #[error("invalid seed data")]
    Seed(#[from] serde_json::Error),
}

impl From<StorageError> for QuillError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
