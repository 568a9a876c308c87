//! # quill-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered blog**: landing page, library listing
//!   with search and category filter, post detail, and the composer form
//! - Serve a **JSON API** exposing the repository contract
//!   (`/api/posts`, `/api/posts/{id}`, `/api/categories`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (HTML or JSON)
//!
//! ## Loading states without JavaScript
//! - Every page read goes through the query cache with a render budget.
//! - A query still in flight when the budget runs out renders a loading page
//!   carrying `<meta http-equiv="refresh">`; the query keeps running and the
//!   reload picks up the cached result.
//! - The composer is a plain `<form>` that POSTs and redirects (PRG pattern).
//!
//! ## Dependency rule
//! Depends on `quill-app` (for port traits and services) and `quill-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod markdown;
pub mod pages;
pub mod router;
pub mod state;
