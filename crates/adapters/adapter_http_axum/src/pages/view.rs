//! View models: posts flattened into the strings templates print.

use quill_domain::category::Category;
use quill_domain::filter::{ALL_CATEGORIES, CategoryFilter};
use quill_domain::post::Post;
use quill_domain::time::{long_date, short_date};

use super::{Page, post_url};
use crate::markdown;

fn badge(category: Option<Category>) -> String {
    category
        .map(|c| format!("{} {}", c.icon(), c.label()))
        .unwrap_or_default()
}

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

/// A post summarized as a card.
pub struct PostCard {
    pub href: String,
    pub title: String,
    pub excerpt: String,
    pub badge: String,
    pub author: String,
    pub author_initial: String,
    pub date: String,
    pub reading_time: u32,
    pub image_url: String,
    pub featured: bool,
}

impl From<&Post> for PostCard {
    fn from(post: &Post) -> Self {
        let author = post.author_display().to_string();
        Self {
            href: post_url(&post.id),
            title: post.title.clone(),
            excerpt: post.excerpt.clone().unwrap_or_default(),
            badge: badge(post.category),
            author_initial: initial(&author),
            author,
            date: short_date(post.created_date),
            reading_time: post.reading_time,
            image_url: post.image_url.clone().unwrap_or_default(),
            featured: post.featured,
        }
    }
}

/// Cards for a slice of posts.
pub fn cards(posts: &[Post]) -> Vec<PostCard> {
    posts.iter().map(PostCard::from).collect()
}

/// A post laid out for reading.
pub struct PostView {
    pub title: String,
    pub excerpt: String,
    /// Content rendered from Markdown; raw HTML in the source is escaped.
    pub body_html: String,
    pub badge: String,
    pub author: String,
    pub author_initial: String,
    pub date: String,
    pub reading_time: u32,
    pub image_url: String,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        let author = post.author_display().to_string();
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone().unwrap_or_default(),
            body_html: markdown::to_html(&post.content),
            badge: badge(post.category),
            author_initial: initial(&author),
            author,
            date: long_date(post.created_date),
            reading_time: post.reading_time,
            image_url: post.image_url.clone().unwrap_or_default(),
        }
    }
}

/// A category chip on the listing page.
pub struct CategoryChip {
    pub label: &'static str,
    pub href: String,
    pub selected: bool,
}

/// The "All" chip followed by one chip per category, keeping `search`.
pub fn category_chips(search: &str, selected: CategoryFilter) -> Vec<CategoryChip> {
    std::iter::once(ALL_CATEGORIES)
        .chain(Category::ALL.into_iter().map(Category::label))
        .map(|label| CategoryChip {
            label,
            href: listing_url(search, label),
            selected: selected.label() == label,
        })
        .collect()
}

fn listing_url(search: &str, category: &str) -> String {
    let mut url = format!(
        "{}?category={}",
        Page::AllPosts.url(),
        urlencoding::encode(category)
    );
    if !search.is_empty() {
        url.push_str("&q=");
        url.push_str(&urlencoding::encode(search));
    }
    url
}

/// An `<option>` of the composer's category select.
pub struct CategoryOption {
    pub label: &'static str,
    pub selected: bool,
}

/// One option per category, marking `selected`.
pub fn category_options(selected: Option<Category>) -> Vec<CategoryOption> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryOption {
            label: category.label(),
            selected: selected == Some(category),
        })
        .collect()
}
