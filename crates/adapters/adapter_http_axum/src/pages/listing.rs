//! Library listing: every tale, narrowed by search text and category.
//!
//! The list is fetched once through the query cache; filtering runs on the
//! fetched posts for every request.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use quill_app::ports::{EventPublisher, PostRepository};
use quill_app::queries::ListKey;
use quill_domain::error::QuillError;
use quill_domain::filter::{CategoryFilter, ListingFilter};

use super::view::{CategoryChip, PostCard, cards, category_chips};
use super::{PageError, PageResponse};
use crate::state::AppState;

/// Query string of the listing, e.g. `?q=hippogriff&category=All`.
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
}

/// Listing page template.
#[derive(Template)]
#[template(path = "listing.html")]
pub struct ListingTemplate {
    search: String,
    chips: Vec<CategoryChip>,
    cards: Vec<PostCard>,
    count_label: String,
}

impl IntoResponse for ListingTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// "1 magical tale found" / "N magical tales found".
#[must_use]
pub fn count_label(count: usize) -> String {
    let noun = if count == 1 { "tale" } else { "tales" };
    format!("{count} magical {noun} found")
}

/// `GET /posts`: searchable, filterable listing.
pub async fn index<R, P>(
    State(state): State<AppState<R, P>>,
    Query(params): Query<ListingParams>,
) -> Result<PageResponse<ListingTemplate>, PageError>
where
    R: PostRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let category: CategoryFilter = params.category.parse().map_err(QuillError::from)?;
    let filter = ListingFilter::new(&params.q, category);

    let posts = state
        .queries
        .list(&state.post_service, ListKey::Library)
        .await;

    PageResponse::from_query(posts, "Opening the library", |posts| {
        let matching = filter.apply(&posts);
        ListingTemplate {
            chips: category_chips(&params.q, filter.category()),
            count_label: count_label(matching.len()),
            cards: cards(&matching),
            search: params.q,
        }
    })
}
