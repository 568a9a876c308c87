//! Storage port: the repository contract for posts.

use std::future::Future;

use quill_domain::error::QuillError;
use quill_domain::id::PostId;
use quill_domain::post::{Post, PostDraft};
use quill_domain::query::ListQuery;

/// Read/append access to the post collection.
///
/// There is deliberately no update or delete: stored posts are immutable.
pub trait PostRepository {
    /// Return posts ordered and truncated according to `query`.
    fn list(&self, query: ListQuery) -> impl Future<Output = Result<Vec<Post>, QuillError>> + Send;

    /// Look up a post. Absence is `Ok(None)`, not an error.
    fn get_by_id(&self, id: PostId)
    -> impl Future<Output = Result<Option<Post>, QuillError>> + Send;

    /// Merge `draft` over the creation defaults, append it, and return the
    /// stored record. Required fields are not validated here.
    fn create(&self, draft: PostDraft) -> impl Future<Output = Result<Post, QuillError>> + Send;
}

impl<T: PostRepository + Send + Sync> PostRepository for std::sync::Arc<T> {
    fn list(&self, query: ListQuery) -> impl Future<Output = Result<Vec<Post>, QuillError>> + Send {
        (**self).list(query)
    }

    fn get_by_id(
        &self,
        id: PostId,
    ) -> impl Future<Output = Result<Option<Post>, QuillError>> + Send {
        (**self).get_by_id(id)
    }

    fn create(&self, draft: PostDraft) -> impl Future<Output = Result<Post, QuillError>> + Send {
        (**self).create(draft)
    }
}
