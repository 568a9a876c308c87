//! Post service: use-cases for reading and creating posts.

use quill_domain::error::QuillError;
use quill_domain::event::PostEvent;
use quill_domain::id::PostId;
use quill_domain::post::{Post, PostDraft};
use quill_domain::query::ListQuery;

use crate::ports::{EventPublisher, PostRepository};

/// Application service in front of the post repository.
pub struct PostService<R, P> {
    repo: R,
    publisher: P,
}

impl<R: PostRepository, P: EventPublisher> PostService<R, P> {
    /// Create a new service backed by the given repository and publisher.
    pub fn new(repo: R, publisher: P) -> Self {
        Self { repo, publisher }
    }

    /// List posts according to `query`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_posts(&self, query: ListQuery) -> Result<Vec<Post>, QuillError> {
        self.repo.list(query).await
    }

    /// Look up a post by id. A missing post is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self), fields(post_id = %id))]
    pub async fn get_post(&self, id: PostId) -> Result<Option<Post>, QuillError> {
        self.repo.get_by_id(id).await
    }

    /// Store a new post and announce it.
    ///
    /// The draft is stored as given; callers that need required fields must
    /// check [`PostDraft::validate_required`] first.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the repository. Once the post is
    /// stored, a failing publisher is logged and the post is still returned.
    #[tracing::instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_post(&self, draft: PostDraft) -> Result<Post, QuillError> {
        let post = self.repo.create(draft).await?;
        tracing::info!(post_id = %post.id, "post created");
        let event = PostEvent::Created {
            id: post.id.clone(),
        };
        if let Err(err) = self.publisher.publish(event).await {
            tracing::error!(error = %err, post_id = %post.id, "failed to publish post event");
        }
        Ok(post)
    }
}
