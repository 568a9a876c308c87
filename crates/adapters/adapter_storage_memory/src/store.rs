//! The post store: an append-only, process-local collection.
//!
//! Creation computes the next id and appends under a single write lock, so
//! ids stay unique when several tasks create posts at once.

use std::sync::RwLock;

use chrono::NaiveDate;

use quill_domain::id::PostId;
use quill_domain::post::{Post, PostDraft};

use crate::error::StorageError;
use crate::seed;

/// Shared, ordered collection of posts.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: RwLock<Vec<Post>>,
}

impl PostStore {
    /// Store holding `posts` in the given order.
    #[must_use]
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// Store holding the bundled sample posts.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Seed`] if the sample data cannot be decoded.
    pub fn seeded() -> Result<Self, StorageError> {
        Ok(Self::new(seed::sample_posts()?))
    }

    /// Copy of every post, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Poisoned`] if a writer panicked.
    pub fn snapshot(&self) -> Result<Vec<Post>, StorageError> {
        let posts = self.posts.read().map_err(|_| StorageError::Poisoned)?;
        Ok(posts.clone())
    }

    /// Linear scan for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Poisoned`] if a writer panicked.
    pub fn find(&self, id: &PostId) -> Result<Option<Post>, StorageError> {
        let posts = self.posts.read().map_err(|_| StorageError::Poisoned)?;
        Ok(posts.iter().find(|post| &post.id == id).cloned())
    }

    /// Assign the next id, merge `draft` over the defaults, and append.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Poisoned`] if a writer panicked.
    pub fn append(&self, draft: PostDraft, today: NaiveDate) -> Result<Post, StorageError> {
        let mut posts = self.posts.write().map_err(|_| StorageError::Poisoned)?;
        let id = PostId::from_sequence(posts.len() + 1);
        let post = Post::from_draft(id, draft, today);
        posts.push(post.clone());
        Ok(post)
    }

    /// Number of stored posts.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Poisoned`] if a writer panicked.
    pub fn len(&self) -> Result<usize, StorageError> {
        let posts = self.posts.read().map_err(|_| StorageError::Poisoned)?;
        Ok(posts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn should_continue_numbering_after_seed_posts() {
        let store = PostStore::seeded().unwrap();
        let post = store.append(PostDraft::new("Test", "Body"), today()).unwrap();
        assert_eq!(post.id.as_str(), "7");
        assert_eq!(store.len().unwrap(), 7);
    }

    #[test]
    fn should_append_at_the_end() {
        let store = PostStore::seeded().unwrap();
        let post = store.append(PostDraft::new("Test", "Body"), today()).unwrap();
        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.last(), Some(&post));
    }

    #[test]
    fn should_return_none_for_unknown_id() {
        let store = PostStore::seeded().unwrap();
        let found = store.find(&"999".parse().unwrap()).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn should_start_empty_by_default() {
        let store = PostStore::default();
        assert_eq!(store.len().unwrap(), 0);
        assert!(store.snapshot().unwrap().is_empty());
    }

    #[test]
    fn should_issue_unique_ids_under_concurrent_appends() {
        let store = Arc::new(PostStore::default());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..25)
                        .map(|j| {
                            store
                                .append(PostDraft::new(format!("{i}-{j}"), "Body"), today())
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<_> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        assert_eq!(ids.len(), 200);
    }
}
