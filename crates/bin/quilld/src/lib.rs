//! # quilld, the Enchanted Quill daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Build the in-memory post store, seeded with the sample tales
//! - Construct the repository (with its artificial latency) and the
//!   application service, injecting the query cache as event publisher
//! - Build the axum router and mount the static assets directory
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown on Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

pub mod config;

use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;

use quill_adapter_http_axum::state::AppState;
use quill_adapter_storage_memory::{InMemoryPostRepository, PostStore, StorageError};
use quill_app::queries::PostQueries;
use quill_app::services::post_service::PostService;

use crate::config::Config;

/// Assemble the full application router from `config`.
///
/// # Errors
///
/// Returns an error if the bundled sample posts cannot be loaded.
pub fn build_app(config: &Config) -> Result<Router, StorageError> {
    let store = if config.seed.enabled {
        PostStore::seeded()?
    } else {
        PostStore::default()
    };
    tracing::info!(posts = store.len()?, "post store ready");
    let repo = InMemoryPostRepository::new(Arc::new(store), config.latency());

    // Created posts invalidate the cached page queries.
    let queries = Arc::new(PostQueries::new(config.render_budget()));
    let post_service = PostService::new(repo, Arc::clone(&queries));

    let app = quill_adapter_http_axum::router::build(AppState::new(post_service, queries));

    Ok(match &config.server.assets_dir {
        Some(dir) => app.nest_service("/assets", ServeDir::new(dir)),
        None => app,
    })
}
