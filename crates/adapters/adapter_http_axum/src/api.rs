//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod categories;
#[allow(clippy::missing_errors_doc)]
pub mod posts;

use axum::Router;
use axum::routing::get;

use quill_app::ports::{EventPublisher, PostRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R, P>() -> Router<AppState<R, P>>
where
    R: PostRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/posts",
            get(posts::list::<R, P>).post(posts::create::<R, P>),
        )
        .route("/posts/{id}", get(posts::get::<R, P>))
        .route("/categories", get(categories::list))
}
