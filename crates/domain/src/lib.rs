//! # quill-domain
//!
//! Pure domain model for the Enchanted Quill blog.
//!
//! ## Responsibilities
//! - Foundational types: post identifiers, error conventions, dates
//! - Define **Posts** (the only entity) and the **Drafts** they are created from
//! - Define **Categories** (the closed set of seven topics)
//! - Define **List queries** (sort key + limit) and how they order a sequence
//! - Define the **Listing filter** (search + category) and the **Landing** partition
//! - Define **Events** emitted when posts are created
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod category;
pub mod event;
pub mod filter;
pub mod landing;
pub mod post;
pub mod query;
