//! Landing partition: featured posts and recent non-featured posts.

use crate::post::Post;

/// Number of featured cards on the landing page.
pub const FEATURED_LIMIT: usize = 2;

/// Number of recent cards on the landing page.
pub const RECENT_LIMIT: usize = 6;

/// The two curated subsets shown on the landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Landing {
    pub featured: Vec<Post>,
    pub recent: Vec<Post>,
}

impl Landing {
    /// Split `posts` by their `featured` flag, preserving order and applying
    /// [`FEATURED_LIMIT`] and [`RECENT_LIMIT`].
    #[must_use]
    pub fn partition(posts: Vec<Post>) -> Self {
        let (mut featured, mut recent): (Vec<Post>, Vec<Post>) =
            posts.into_iter().partition(|post| post.featured);
        featured.truncate(FEATURED_LIMIT);
        recent.truncate(RECENT_LIMIT);
        Self { featured, recent }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.recent.is_empty()
    }
}
