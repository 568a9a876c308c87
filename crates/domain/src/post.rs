//! Post: a single blog entry, and the draft it is created from.
//!
//! Posts are immutable once stored: there is no update or delete path.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::category::Category;
use crate::error::ValidationError;
use crate::id::PostId;

/// Reading time assigned when the draft does not carry one.
pub const DEFAULT_READING_TIME_MINUTES: u32 = 5;

/// Author shown for posts stored without one.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous Wizard";

/// A stored blog entry.
///
/// `author_name` and `cover_image` are accepted as aliases so records written
/// in the older field layout still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, alias = "author_name", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, alias = "cover_image", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_date: NaiveDate,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_reading_time")]
    pub reading_time: u32,
}

fn default_reading_time() -> u32 {
    DEFAULT_READING_TIME_MINUTES
}

impl Post {
    /// Merge a draft over the creation defaults.
    ///
    /// No field of the draft is validated here; required-field checks belong
    /// to the caller (see [`PostDraft::validate_required`]).
    #[must_use]
    pub fn from_draft(id: PostId, draft: PostDraft, created_date: NaiveDate) -> Self {
        Self {
            id,
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            category: draft.category,
            author: draft.author,
            image_url: draft.image_url,
            created_date,
            featured: draft.featured.unwrap_or(false),
            reading_time: draft
                .reading_time
                .unwrap_or(DEFAULT_READING_TIME_MINUTES),
        }
    }

    /// Author name, falling back to the anonymous placeholder.
    #[must_use]
    pub fn author_display(&self) -> &str {
        self.author
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(ANONYMOUS_AUTHOR)
    }
}

/// Category of an incoming draft: a blank or unknown label files the post
/// without a category instead of rejecting the draft.
fn lenient_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label.and_then(|label| label.trim().parse().ok()))
}

/// Caller-supplied fields for a new post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(deserialize_with = "lenient_category")]
    pub category: Option<Category>,
    #[serde(alias = "author_name")]
    pub author: Option<String>,
    #[serde(alias = "cover_image")]
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub reading_time: Option<u32>,
}

impl PostDraft {
    /// Start a draft with the two fields a composer requires.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    #[must_use]
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    #[must_use]
    pub fn reading_time(mut self, minutes: u32) -> Self {
        self.reading_time = Some(minutes);
        self
    }

    /// Check the fields a composer must fill before submitting.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] or
    /// [`ValidationError::EmptyContent`] when either is blank.
    pub fn validate_required(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 20).unwrap()
    }

    #[test]
    fn should_apply_creation_defaults_when_draft_is_minimal() {
        let post = Post::from_draft(
            PostId::from_sequence(7),
            PostDraft::new("Test", "Body"),
            date(),
        );

        assert_eq!(post.id.as_str(), "7");
        assert!(!post.featured);
        assert_eq!(post.reading_time, DEFAULT_READING_TIME_MINUTES);
        assert_eq!(post.created_date, date());
        assert!(post.category.is_none());
    }

    #[test]
    fn should_keep_caller_supplied_fields_over_defaults() {
        let draft = PostDraft::new("Test", "Body")
            .featured(true)
            .reading_time(12)
            .category(Category::Potions);
        let post = Post::from_draft(PostId::from_sequence(1), draft, date());

        assert!(post.featured);
        assert_eq!(post.reading_time, 12);
        assert_eq!(post.category, Some(Category::Potions));
    }

    #[test]
    fn should_not_validate_when_building_from_draft() {
        let post = Post::from_draft(PostId::from_sequence(1), PostDraft::default(), date());
        assert!(post.title.is_empty());
    }

    #[test]
    fn should_fall_back_to_anonymous_author() {
        let post = Post::from_draft(
            PostId::from_sequence(1),
            PostDraft::new("t", "c").author("  "),
            date(),
        );
        assert_eq!(post.author_display(), ANONYMOUS_AUTHOR);
    }

    #[test]
    fn should_reject_blank_title() {
        let draft = PostDraft::new("  ", "Body");
        assert_eq!(draft.validate_required(), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn should_reject_blank_content() {
        let draft = PostDraft::new("Title", "");
        assert_eq!(
            draft.validate_required(),
            Err(ValidationError::EmptyContent)
        );
    }

    #[test]
    fn should_accept_legacy_field_names() {
        let json = r#"{
            "id": "9",
            "title": "Old shape",
            "content": "Body",
            "author_name": "Minerva",
            "cover_image": "https://example.test/cover.png",
            "created_date": "2024-12-01"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();

        assert_eq!(post.author.as_deref(), Some("Minerva"));
        assert_eq!(
            post.image_url.as_deref(),
            Some("https://example.test/cover.png")
        );
        assert_eq!(post.reading_time, DEFAULT_READING_TIME_MINUTES);
        assert!(!post.featured);
    }

    #[test]
    fn should_serialize_created_date_as_iso_date() {
        let post = Post::from_draft(PostId::from_sequence(1), PostDraft::new("t", "c"), date());
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["created_date"], "2024-12-20");
        assert!(value.get("excerpt").is_none());
    }

    #[test]
    fn should_file_draft_without_category_when_label_is_blank_or_unknown() {
        let json = r#"{
            "title": "T",
            "excerpt": "",
            "content": "Body",
            "cover_image": "",
            "category": "",
            "author_name": "",
            "featured": false
        }"#;
        let draft: PostDraft = serde_json::from_str(json).unwrap();
        assert!(draft.category.is_none());
        assert_eq!(draft.featured, Some(false));

        let draft: PostDraft =
            serde_json::from_str(r#"{"title": "T", "category": "Divination"}"#).unwrap();
        assert!(draft.category.is_none());

        let draft: PostDraft = serde_json::from_str(r#"{"category": null}"#).unwrap();
        assert!(draft.category.is_none());
    }

    #[test]
    fn should_read_known_draft_category() {
        let draft: PostDraft =
            serde_json::from_str(r#"{"title": "T", "category": "Dark Arts Defense"}"#).unwrap();
        assert_eq!(draft.category, Some(Category::DarkArtsDefense));
    }
}
