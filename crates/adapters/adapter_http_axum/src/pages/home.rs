//! Landing page: hero, featured tales, and recent tales.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use quill_app::ports::{EventPublisher, PostRepository};
use quill_app::queries::ListKey;
use quill_domain::landing::Landing;

use super::view::{PostCard, cards};
use super::{PageError, PageResponse};
use crate::state::AppState;

/// Landing page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    featured: Vec<PostCard>,
    recent: Vec<PostCard>,
    empty: bool,
}

impl From<Landing> for HomeTemplate {
    fn from(landing: Landing) -> Self {
        Self {
            empty: landing.is_empty(),
            featured: cards(&landing.featured),
            recent: cards(&landing.recent),
        }
    }
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /`: landing page.
pub async fn index<R, P>(
    State(state): State<AppState<R, P>>,
) -> Result<PageResponse<HomeTemplate>, PageError>
where
    R: PostRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let posts = state
        .queries
        .list(&state.post_service, ListKey::Landing)
        .await;

    PageResponse::from_query(posts, "Summoning the latest tales", |posts| {
        HomeTemplate::from(Landing::partition(posts))
    })
}
