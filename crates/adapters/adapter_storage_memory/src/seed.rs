//! Sample posts shipped with the application.

use quill_domain::post::Post;

use crate::error::StorageError;

const SEED_POSTS: &str = include_str!("../seed/posts.json");

/// Decode the embedded sample posts, newest first.
///
/// # Errors
///
/// Returns [`StorageError::Seed`] if the embedded document is malformed.
pub fn sample_posts() -> Result<Vec<Post>, StorageError> {
    Ok(serde_json::from_str(SEED_POSTS)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_six_sample_posts() {
        let posts = sample_posts().unwrap();
        assert_eq!(posts.len(), 6);
    }

    #[test]
    fn should_flag_exactly_two_featured_posts() {
        let posts = sample_posts().unwrap();
        let featured: Vec<_> = posts.iter().filter(|p| p.featured).collect();
        assert_eq!(featured.len(), 2);
    }

    #[test]
    fn should_number_ids_in_insertion_order() {
        let posts = sample_posts().unwrap();
        for (index, post) in posts.iter().enumerate() {
            assert_eq!(post.id.as_str(), (index + 1).to_string());
        }
    }

    #[test]
    fn should_categorize_every_sample_post() {
        let posts = sample_posts().unwrap();
        assert!(posts.iter().all(|p| p.category.is_some()));
    }
}
