//! Shared application state for axum handlers.

use std::sync::Arc;

use quill_app::ports::{EventPublisher, PostRepository};
use quill_app::queries::PostQueries;
use quill_app::services::post_service::PostService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and event publisher to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<R, P> {
    /// Post use-cases.
    pub post_service: Arc<PostService<R, P>>,
    /// Cached view queries.
    pub queries: Arc<PostQueries>,
}

impl<R, P> Clone for AppState<R, P> {
    fn clone(&self) -> Self {
        Self {
            post_service: Arc::clone(&self.post_service),
            queries: Arc::clone(&self.queries),
        }
    }
}

impl<R, P> AppState<R, P>
where
    R: PostRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    /// Create a new application state.
    ///
    /// `queries` should also be (part of) the service's publisher so that
    /// creating a post invalidates the cached lists.
    pub fn new(post_service: PostService<R, P>, queries: Arc<PostQueries>) -> Self {
        Self {
            post_service: Arc::new(post_service),
            queries,
        }
    }
}
