//! # quill-adapter-storage-memory
//!
//! Process-local post storage.
//!
//! ## Responsibilities
//! - Hold the append-only [`PostStore`], optionally seeded with sample posts
//! - Implement the [`PostRepository`](quill_app::ports::PostRepository) port
//!   on top of it, delaying every operation by a configurable [`Latency`]
//!   so that loading states are exercised
//!
//! Nothing survives a restart.
//!
//! ## Dependency rule
//! Depends on `quill-app` (for port traits) and `quill-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod latency;
pub mod post_repo;
pub mod seed;
pub mod store;

pub use error::StorageError;
pub use latency::Latency;
pub use post_repo::InMemoryPostRepository;
pub use store::PostStore;
