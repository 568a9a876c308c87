//! JSON REST handlers for posts.
//!
//! These expose the repository contract as-is: `create` stores whatever it is
//! given, and a missing post on `get` is reported as 404.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use quill_app::ports::{EventPublisher, PostRepository};
use quill_domain::error::NotFoundError;
use quill_domain::id::PostId;
use quill_domain::post::{Post, PostDraft};
use quill_domain::query::{ListQuery, SortKey};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the list endpoint, e.g. `?sort=-created_date&limit=10`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub sort: Option<String>,
    pub limit: Option<usize>,
}

impl ListParams {
    fn into_query(self) -> Result<ListQuery, ApiError> {
        let mut query = ListQuery::all();
        if let Some(sort) = self.sort.filter(|s| !s.is_empty()) {
            query = query.sort(sort.parse::<SortKey>()?);
        }
        if let Some(limit) = self.limit {
            query = query.limit(limit);
        }
        Ok(query)
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Post>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Post>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Post>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/posts`
pub async fn list<R, P>(
    State(state): State<AppState<R, P>>,
    Query(params): Query<ListParams>,
) -> Result<ListResponse, ApiError>
where
    R: PostRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let query = params.into_query()?;
    let posts = state.post_service.list_posts(query).await?;
    Ok(ListResponse::Ok(Json(posts)))
}

/// `GET /api/posts/{id}`
pub async fn get<R, P>(
    State(state): State<AppState<R, P>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: PostRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let post_id: PostId = id.parse()?;
    let post = state
        .post_service
        .get_post(post_id)
        .await?
        .ok_or(NotFoundError { entity: "Post", id })?;
    Ok(GetResponse::Ok(Json(post)))
}

/// `POST /api/posts`
pub async fn create<R, P>(
    State(state): State<AppState<R, P>>,
    Json(draft): Json<PostDraft>,
) -> Result<CreateResponse, ApiError>
where
    R: PostRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let created = state.post_service.create_post(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}
