//! List queries: an optional sort key and an optional limit.
//!
//! Sorting is stable, so posts that compare equal keep insertion order.
//! Without a sort key the sequence is returned as inserted.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::post::Post;

/// Field a list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    CreatedDate,
    Title,
    ReadingTime,
}

impl SortField {
    fn name(self) -> &'static str {
        match self {
            Self::CreatedDate => "created_date",
            Self::Title => "title",
            Self::ReadingTime => "reading_time",
        }
    }

    fn compare(self, a: &Post, b: &Post) -> Ordering {
        match self {
            Self::CreatedDate => a.created_date.cmp(&b.created_date),
            Self::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            Self::ReadingTime => a.reading_time.cmp(&b.reading_time),
        }
    }
}

/// A sort request in the `field` / `-field` notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub descending: bool,
}

impl SortKey {
    /// Newest first.
    pub const NEWEST_FIRST: Self = Self {
        field: SortField::CreatedDate,
        descending: true,
    };

    fn compare(self, a: &Post, b: &Post) -> Ordering {
        let ordering = self.field.compare(a, b);
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            f.write_str("-")?;
        }
        f.write_str(self.field.name())
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (descending, name) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let field = match name {
            "created_date" => SortField::CreatedDate,
            "title" => SortField::Title,
            "reading_time" => SortField::ReadingTime,
            _ => return Err(ValidationError::UnknownSortKey(s.to_string())),
        };
        Ok(Self { field, descending })
    }
}

/// Parameters of a `list` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub sort: Option<SortKey>,
    pub limit: Option<usize>,
}

impl ListQuery {
    /// Every post, in insertion order.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Up to `limit` posts, newest first.
    #[must_use]
    pub fn newest(limit: usize) -> Self {
        Self {
            sort: Some(SortKey::NEWEST_FIRST),
            limit: Some(limit),
        }
    }

    #[must_use]
    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Order and truncate a sequence of posts.
    #[must_use]
    pub fn apply(&self, mut posts: Vec<Post>) -> Vec<Post> {
        if let Some(sort) = self.sort {
            posts.sort_by(|a, b| sort.compare(a, b));
        }
        if let Some(limit) = self.limit {
            posts.truncate(limit);
        }
        posts
    }
}
