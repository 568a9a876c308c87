//! Server-side rendered HTML pages (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod create;
#[allow(clippy::missing_errors_doc)]
pub mod detail;
#[allow(clippy::missing_errors_doc)]
pub mod home;
#[allow(clippy::missing_errors_doc)]
pub mod listing;
pub mod view;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use quill_app::ports::{EventPublisher, PostRepository};
use quill_app::query_cache::QueryState;
use quill_domain::error::QuillError;
use quill_domain::id::PostId;

use crate::error::classify;
use crate::state::AppState;

/// Seconds between reloads of a loading page.
const LOADING_REFRESH_SECONDS: u32 = 1;

/// The top-level pages and where they live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    AllPosts,
    BlogPost,
    CreatePost,
}

impl Page {
    #[must_use]
    pub fn url(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::AllPosts => "/posts",
            Self::BlogPost => "/post",
            Self::CreatePost => "/create",
        }
    }
}

/// Link to a post's detail page, in the `?id=` form.
#[must_use]
pub fn post_url(id: &PostId) -> String {
    format!(
        "{}?id={}",
        Page::BlogPost.url(),
        urlencoding::encode(id.as_str())
    )
}

/// Build the page sub-router.
pub fn routes<R, P>() -> Router<AppState<R, P>>
where
    R: PostRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        .route(Page::Home.url(), get(home::index::<R, P>))
        .route(Page::AllPosts.url(), get(listing::index::<R, P>))
        .route(Page::BlogPost.url(), get(detail::by_query::<R, P>))
        .route("/post/{id}", get(detail::by_path::<R, P>))
        .route(
            Page::CreatePost.url(),
            get(create::form).post(create::submit::<R, P>),
        )
}

/// Placeholder page shown while a query is still in flight.
#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingTemplate {
    heading: &'static str,
    refresh_seconds: u32,
}

impl LoadingTemplate {
    #[must_use]
    pub fn new(heading: &'static str) -> Self {
        Self {
            heading,
            refresh_seconds: LOADING_REFRESH_SECONDS,
        }
    }
}

impl IntoResponse for LoadingTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// A page that is either rendered or still loading.
pub enum PageResponse<T> {
    Ready(T),
    Loading(LoadingTemplate),
}

impl<T: IntoResponse> IntoResponse for PageResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ready(page) => page.into_response(),
            Self::Loading(page) => page.into_response(),
        }
    }
}

impl<T> PageResponse<T> {
    /// Turn a query outcome into a page, rendering ready values with `render`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Unavailable`] when the query failed.
    pub fn from_query<V>(
        state: QueryState<V>,
        heading: &'static str,
        render: impl FnOnce(V) -> T,
    ) -> Result<Self, PageError> {
        match state {
            QueryState::Ready(value) => Ok(Self::Ready(render(value))),
            QueryState::Loading => {
                tracing::debug!(heading, "render budget exhausted, serving loading page");
                Ok(Self::Loading(LoadingTemplate::new(heading)))
            }
            QueryState::Failed => Err(PageError::Unavailable),
        }
    }
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: String,
}

/// Errors rendered as an HTML page.
pub enum PageError {
    /// A service call failed.
    Quill(QuillError),
    /// A cached query could not be resolved.
    Unavailable,
}

impl From<QuillError> for PageError {
    fn from(err: QuillError) -> Self {
        Self::Quill(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Quill(err) => classify(err),
            Self::Unavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "The archives could not be reached. Please try again.".to_string(),
            ),
        };
        let page = ErrorTemplate {
            status: status.as_u16(),
            message,
        };
        (status, Html(page.to_string())).into_response()
    }
}
