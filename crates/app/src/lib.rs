//! # quill-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PostRepository`: list, get, and create posts
//!   - `EventPublisher`: announce post events to interested parties
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PostService`: list, get, create
//! - Provide **in-process infrastructure** that doesn't need IO:
//!   - `QueryCache`: keyed, generation-tokened result cache
//!   - `PostQueries`: the cached view queries, invalidated on post events
//!
//! ## Dependency rule
//! Depends on `quill-domain` only (plus `tokio` for sync primitives and tasks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod queries;
pub mod query_cache;
pub mod services;
