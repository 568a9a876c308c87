//! In-memory implementation of [`PostRepository`].

use std::future::Future;
use std::sync::Arc;

use quill_app::ports::PostRepository;
use quill_domain::error::QuillError;
use quill_domain::id::PostId;
use quill_domain::post::{Post, PostDraft};
use quill_domain::query::ListQuery;
use quill_domain::time::today;

use crate::latency::{Latency, pause};
use crate::store::PostStore;

/// Repository over a shared [`PostStore`], delaying each call by [`Latency`].
///
/// The delay only emulates network I/O: there is no retry, timeout, or
/// cancellation. A caller that stops polling simply abandons the call.
pub struct InMemoryPostRepository {
    store: Arc<PostStore>,
    latency: Latency,
}

impl InMemoryPostRepository {
    /// Create a repository over `store`.
    #[must_use]
    pub fn new(store: Arc<PostStore>, latency: Latency) -> Self {
        Self { store, latency }
    }
}

impl PostRepository for InMemoryPostRepository {
    fn list(&self, query: ListQuery) -> impl Future<Output = Result<Vec<Post>, QuillError>> + Send {
        let store = Arc::clone(&self.store);
        let delay = self.latency.list;
        async move {
            pause(delay).await;
            let posts = store.snapshot()?;
            Ok(query.apply(posts))
        }
    }

    fn get_by_id(
        &self,
        id: PostId,
    ) -> impl Future<Output = Result<Option<Post>, QuillError>> + Send {
        let store = Arc::clone(&self.store);
        let delay = self.latency.get;
        async move {
            pause(delay).await;
            Ok(store.find(&id)?)
        }
    }

    fn create(&self, draft: PostDraft) -> impl Future<Output = Result<Post, QuillError>> + Send {
        let store = Arc::clone(&self.store);
        let delay = self.latency.create;
        async move {
            pause(delay).await;
            let post = store.append(draft, today())?;
            tracing::debug!(post_id = %post.id, "appended post to store");
            Ok(post)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_domain::query::SortKey;
    use std::time::{Duration, Instant};

    fn repo() -> InMemoryPostRepository {
        InMemoryPostRepository::new(Arc::new(PostStore::seeded().unwrap()), Latency::none())
    }

    #[tokio::test]
    async fn should_list_seed_posts_newest_first() {
        let posts = repo().list(ListQuery::newest(50)).await.unwrap();
        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[tokio::test]
    async fn should_put_new_post_first_when_sorted_by_date() {
        let repo = repo();
        let created = repo.create(PostDraft::new("Test", "Body")).await.unwrap();

        let posts = repo
            .list(ListQuery::all().sort(SortKey::NEWEST_FIRST))
            .await
            .unwrap();

        assert_eq!(posts.first(), Some(&created));
    }

    #[tokio::test]
    async fn should_keep_insertion_order_without_sort() {
        let repo = repo();
        let created = repo.create(PostDraft::new("Test", "Body")).await.unwrap();

        let posts = repo.list(ListQuery::all()).await.unwrap();

        assert_eq!(posts.last(), Some(&created));
    }

    #[tokio::test]
    async fn should_never_return_more_than_limit() {
        let posts = repo().list(ListQuery::all().limit(3)).await.unwrap();
        assert_eq!(posts.len(), 3);
    }

    #[tokio::test]
    async fn should_return_none_for_never_issued_id() {
        let found = repo().get_by_id("unicorn".parse().unwrap()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn should_create_with_defaults_and_today_date() {
        let before = today();
        let post = repo().create(PostDraft::new("Test", "Body")).await.unwrap();
        let after = today();

        assert_eq!(post.id.as_str(), "7");
        assert!(!post.featured);
        assert!(post.category.is_none());
        assert!(post.created_date >= before && post.created_date <= after);
    }

    #[tokio::test]
    async fn should_share_store_between_repositories() {
        let store = Arc::new(PostStore::default());
        let writer = InMemoryPostRepository::new(Arc::clone(&store), Latency::none());
        let reader = InMemoryPostRepository::new(store, Latency::none());

        let post = writer.create(PostDraft::new("Test", "Body")).await.unwrap();

        assert_eq!(reader.get_by_id(post.id.clone()).await.unwrap(), Some(post));
    }

    #[tokio::test]
    async fn should_delay_operations_by_configured_latency() {
        let repo = InMemoryPostRepository::new(
            Arc::new(PostStore::default()),
            Latency::uniform(Duration::from_millis(30)),
        );

        let started = Instant::now();
        repo.list(ListQuery::all()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
