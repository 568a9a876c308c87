//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`QuillError`]
//! via `From`.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum QuillError {
    /// Caller-supplied data broke an invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A lookup that must succeed found nothing.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations detected before touching the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A draft was submitted without a title.
    #[error("title must not be empty")]
    EmptyTitle,

    /// A draft was submitted without body content.
    #[error("content must not be empty")]
    EmptyContent,

    /// A post identifier was empty.
    #[error("post id must not be empty")]
    EmptyPostId,

    /// A category label outside the fixed set.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A sort key naming an unsupported field.
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}

/// A required record does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// Identifier that was looked up.
    pub id: String,
}
