//! Post detail: loading, not found, or the post itself.

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use quill_app::ports::{EventPublisher, PostRepository};
use quill_domain::id::PostId;

use super::view::PostView;
use super::{Page, PageError, PageResponse};
use crate::state::AppState;

/// Post page template.
#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    post: PostView,
}

/// Shown when no post has the requested id.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    home_url: &'static str,
}

impl Default for NotFoundTemplate {
    fn default() -> Self {
        Self {
            home_url: Page::Home.url(),
        }
    }
}

/// The two terminal states of the detail page.
pub enum DetailPage {
    Found(DetailTemplate),
    NotFound(NotFoundTemplate),
}

impl IntoResponse for DetailPage {
    fn into_response(self) -> Response {
        match self {
            Self::Found(page) => Html(page.to_string()).into_response(),
            Self::NotFound(page) => (StatusCode::NOT_FOUND, Html(page.to_string())).into_response(),
        }
    }
}

/// Query string of the `?id=` detail route.
#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    pub id: Option<String>,
}

/// `GET /post?id={id}`
pub async fn by_query<R, P>(
    State(state): State<AppState<R, P>>,
    Query(params): Query<DetailParams>,
) -> Result<PageResponse<DetailPage>, PageError>
where
    R: PostRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    render(state, params.id.as_deref().unwrap_or_default()).await
}

/// `GET /post/{id}`
pub async fn by_path<R, P>(
    State(state): State<AppState<R, P>>,
    Path(id): Path<String>,
) -> Result<PageResponse<DetailPage>, PageError>
where
    R: PostRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    render(state, &id).await
}

async fn render<R, P>(
    state: AppState<R, P>,
    raw_id: &str,
) -> Result<PageResponse<DetailPage>, PageError>
where
    R: PostRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let Ok(id) = raw_id.parse::<PostId>() else {
        return Ok(PageResponse::Ready(DetailPage::NotFound(NotFoundTemplate::default())));
    };

    let post = state.queries.post(&state.post_service, id).await;

    PageResponse::from_query(post, "Unrolling the scroll", |post| match post {
        Some(post) => DetailPage::Found(DetailTemplate {
            post: PostView::from(&post),
        }),
        None => DetailPage::NotFound(NotFoundTemplate::default()),
    })
}
