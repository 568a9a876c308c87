//! Composer: the form that writes a new tale.
//!
//! Submitting checks the required fields, stores the post, and redirects to
//! its detail page (PRG). Creating a post invalidates the cached lists, so the
//! landing page and the library show it on their next render.

use askama::Template;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use quill_app::ports::{EventPublisher, PostRepository};
use quill_domain::category::Category;
use quill_domain::error::ValidationError;
use quill_domain::id::PostId;
use quill_domain::post::{Post, PostDraft};
use quill_domain::time::today;

use super::view::{CategoryOption, PostView, category_options};
use super::{PageError, post_url};
use crate::state::AppState;

/// Message shown when a required field is blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in the title and content";

/// Raw form fields as submitted by the browser.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ComposeForm {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub author: String,
    pub image_url: String,
    /// Present (as `"on"`) when the checkbox is ticked.
    pub featured: Option<String>,
    /// `"preview"` renders the draft without storing it.
    pub action: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl ComposeForm {
    fn wants_preview(&self) -> bool {
        self.action.as_deref() == Some("preview")
    }

    fn selected_category(&self) -> Result<Option<Category>, ValidationError> {
        non_empty(&self.category)
            .map(|label| label.parse::<Category>())
            .transpose()
    }

    /// Convert the form into a draft, keeping blank optional fields unset.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownCategory`] for a category outside
    /// the fixed set.
    pub fn to_draft(&self) -> Result<PostDraft, ValidationError> {
        Ok(PostDraft {
            title: self.title.trim().to_string(),
            excerpt: non_empty(&self.excerpt),
            content: self.content.replace("\r\n", "\n").trim().to_string(),
            category: self.selected_category()?,
            author: non_empty(&self.author),
            image_url: non_empty(&self.image_url),
            featured: Some(self.featured.is_some()),
            reading_time: None,
        })
    }
}

/// Composer page template.
#[derive(Template)]
#[template(path = "create.html")]
pub struct CreateTemplate {
    form: ComposeForm,
    categories: Vec<CategoryOption>,
    error: String,
    preview: Option<PostView>,
}

impl CreateTemplate {
    fn new(form: ComposeForm) -> Self {
        let selected = form.selected_category().ok().flatten();
        Self {
            form,
            categories: category_options(selected),
            error: String::new(),
            preview: None,
        }
    }

    fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = message.into();
        self
    }

    fn with_preview(mut self, post: &Post) -> Self {
        self.preview = Some(PostView::from(post));
        self
    }
}

impl IntoResponse for CreateTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Possible responses from the form submission.
pub enum SubmitResponse {
    /// The form again, with a status (422 for rejected input, 200 for previews).
    Form(StatusCode, CreateTemplate),
    /// Redirect to the new post (PRG).
    Redirect(Redirect),
}

impl IntoResponse for SubmitResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Form(status, page) => (status, page).into_response(),
            Self::Redirect(redirect) => redirect.into_response(),
        }
    }
}

/// `GET /create`: blank composer.
pub async fn form() -> CreateTemplate {
    CreateTemplate::new(ComposeForm::default())
}

/// `POST /create`: preview or publish the draft.
pub async fn submit<R, P>(
    State(state): State<AppState<R, P>>,
    Form(form): Form<ComposeForm>,
) -> Result<SubmitResponse, PageError>
where
    R: PostRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(err) => {
            let page = CreateTemplate::new(form).with_error(capitalize(&err.to_string()));
            return Ok(SubmitResponse::Form(StatusCode::UNPROCESSABLE_ENTITY, page));
        }
    };

    if form.wants_preview() {
        let post = Post::from_draft(PostId::from_sequence(0), draft, today());
        let page = CreateTemplate::new(form).with_preview(&post);
        return Ok(SubmitResponse::Form(StatusCode::OK, page));
    }

    if draft.validate_required().is_err() {
        let page = CreateTemplate::new(form).with_error(MISSING_FIELDS_MESSAGE);
        return Ok(SubmitResponse::Form(StatusCode::UNPROCESSABLE_ENTITY, page));
    }

    let post = state.post_service.create_post(draft).await?;
    Ok(SubmitResponse::Redirect(Redirect::to(&post_url(&post.id))))
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
