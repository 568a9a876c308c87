//! JSON handler for the category list.

use axum::Json;

use quill_domain::category::Category;

/// `GET /api/categories`
pub async fn list() -> Json<Vec<&'static str>> {
    Json(Category::ALL.into_iter().map(Category::label).collect())
}
