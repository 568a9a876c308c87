//! Cached view queries over the post service.
//!
//! The landing page and the library each read a bounded, newest-first list;
//! the detail page reads a single post. Results are cached per query and
//! dropped again when a post is created.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use quill_domain::error::QuillError;
use quill_domain::event::PostEvent;
use quill_domain::id::PostId;
use quill_domain::post::Post;
use quill_domain::query::ListQuery;

use crate::ports::{EventPublisher, PostRepository};
use crate::query_cache::{QueryCache, QueryState};
use crate::services::post_service::PostService;

/// Posts fetched for the landing page.
pub const LANDING_FETCH_LIMIT: usize = 10;

/// Posts fetched for the library listing.
pub const LIBRARY_FETCH_LIMIT: usize = 50;

/// The list queries the views issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKey {
    Landing,
    Library,
}

impl ListKey {
    #[must_use]
    pub fn query(self) -> ListQuery {
        match self {
            Self::Landing => ListQuery::newest(LANDING_FETCH_LIMIT),
            Self::Library => ListQuery::newest(LIBRARY_FETCH_LIMIT),
        }
    }
}

/// Cached list and detail queries.
pub struct PostQueries {
    lists: QueryCache<ListKey, Vec<Post>>,
    /// Only found posts are kept; ids are client input.
    details: QueryCache<PostId, Option<Post>>,
    budget: Duration,
}

impl PostQueries {
    /// Create empty caches; each fetch waits at most `budget` before
    /// reporting [`QueryState::Loading`].
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self {
            lists: QueryCache::new(),
            details: QueryCache::retaining(Option::is_some),
            budget,
        }
    }

    /// Fetch one of the list queries.
    pub async fn list<R, P>(
        &self,
        service: &Arc<PostService<R, P>>,
        key: ListKey,
    ) -> QueryState<Vec<Post>>
    where
        R: PostRepository + Send + Sync + 'static,
        P: EventPublisher + Send + Sync + 'static,
    {
        let service = Arc::clone(service);
        self.lists
            .fetch(key, self.budget, async move {
                service.list_posts(key.query()).await
            })
            .await
    }

    /// Fetch a single post; `Ready(None)` means it does not exist.
    pub async fn post<R, P>(
        &self,
        service: &Arc<PostService<R, P>>,
        id: PostId,
    ) -> QueryState<Option<Post>>
    where
        R: PostRepository + Send + Sync + 'static,
        P: EventPublisher + Send + Sync + 'static,
    {
        let service = Arc::clone(service);
        self.details
            .fetch(id.clone(), self.budget, async move {
                service.get_post(id).await
            })
            .await
    }

    /// Drop every cached list and the cached lookup of `id`.
    pub fn invalidate_for(&self, id: &PostId) {
        self.lists.invalidate_all();
        self.details.invalidate(id);
    }
}

impl EventPublisher for PostQueries {
    fn publish(&self, event: PostEvent) -> impl Future<Output = Result<(), QuillError>> + Send {
        match &event {
            PostEvent::Created { id } => self.invalidate_for(id),
        }
        async { Ok(()) }
    }
}
