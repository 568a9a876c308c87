//! Listing filter: free-text search combined with a category selection.

use std::str::FromStr;

use crate::category::Category;
use crate::error::ValidationError;
use crate::post::Post;

/// Label of the wildcard category chip.
pub const ALL_CATEGORIES: &str = "All";

/// Category selection of the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Match every post, including uncategorized ones.
    #[default]
    All,
    /// Match posts filed under exactly this category.
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => post.category == Some(category),
        }
    }

    /// Label shown on the selected chip.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category.label(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == ALL_CATEGORIES {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Search text plus category, combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    search: String,
    category: CategoryFilter,
}

impl ListingFilter {
    /// The search text is matched as typed (lowercased, not trimmed).
    #[must_use]
    pub fn new(search: &str, category: CategoryFilter) -> Self {
        Self {
            search: search.to_lowercase(),
            category,
        }
    }

    #[must_use]
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    /// Case-insensitive substring match on title or excerpt, and a category match.
    #[must_use]
    pub fn matches(&self, post: &Post) -> bool {
        self.matches_search(post) && self.category.matches(post)
    }

    fn matches_search(&self, post: &Post) -> bool {
        if self.search.is_empty() {
            return true;
        }
        post.title.to_lowercase().contains(&self.search)
            || post
                .excerpt
                .as_deref()
                .is_some_and(|excerpt| excerpt.to_lowercase().contains(&self.search))
    }

    /// Keep the matching posts, preserving their order.
    #[must_use]
    pub fn apply(&self, posts: &[Post]) -> Vec<Post> {
        posts
            .iter()
            .filter(|post| self.matches(post))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::id::PostId;
    use crate::post::PostDraft;

    fn post(id: usize, draft: PostDraft) -> Post {
        Post::from_draft(
            PostId::from_sequence(id),
            draft,
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
        )
    }

    fn sample() -> Vec<Post> {
        vec![
            post(
                1,
                PostDraft::new("Caring for Your Hippogriff", "body")
                    .excerpt("Majestic creatures.")
                    .category(Category::MagicalCreatures),
            ),
            post(
                2,
                PostDraft::new("Brewing Polyjuice", "body")
                    .excerpt("Transformation potions, the hippogriff way.")
                    .category(Category::Potions),
            ),
            post(3, PostDraft::new("Uncategorized musings", "body")),
        ]
    }

    #[test]
    fn should_match_everything_when_filter_is_empty() {
        let filter = ListingFilter::default();
        assert_eq!(filter.apply(&sample()).len(), 3);
    }

    #[test]
    fn should_match_title_case_insensitively() {
        let filter = ListingFilter::new("HIPPOGRIFF", CategoryFilter::All);
        let ids: Vec<_> = filter
            .apply(&sample())
            .into_iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn should_match_whitespace_search_literally() {
        let filter = ListingFilter::new("   ", CategoryFilter::All);
        assert!(filter.apply(&sample()).is_empty());

        let filter = ListingFilter::new("for your", CategoryFilter::All);
        assert_eq!(filter.apply(&sample()).len(), 1);
    }

    #[test]
    fn should_combine_search_and_category_with_and() {
        let filter = ListingFilter::new("hippogriff", CategoryFilter::Only(Category::Potions));
        let result = filter.apply(&sample());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "2");
    }

    #[test]
    fn should_exclude_uncategorized_posts_when_category_selected() {
        let filter = ListingFilter::new("", CategoryFilter::Only(Category::Quidditch));
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn should_be_idempotent() {
        let filter = ListingFilter::new("brew", CategoryFilter::Only(Category::Potions));
        let once = filter.apply(&sample());
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn should_parse_all_and_empty_as_wildcard() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
    }

    #[test]
    fn should_parse_category_label() {
        assert_eq!(
            "Quidditch".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Quidditch))
        );
    }

    #[test]
    fn should_reject_unknown_category_label() {
        assert!("Divination".parse::<CategoryFilter>().is_err());
    }
}
