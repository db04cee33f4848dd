//! # newsdesk-engine
//!
//! The article lifecycle and retrieval engines.
//!
//! - [`LifecycleEngine`] — submission, status transitions, edits, and
//!   deletion, enforcing the state machine and ownership reference rules
//! - [`QueryEngine`] — audience-scoped filtered views over the article
//!   store (public, owner, editor) plus substring search
//! - [`projection`] — the outward-facing shapes each audience sees
//!
//! Both engines operate against the trait seams in `newsdesk-store`;
//! role gating happens upstream in `newsdesk-auth` and is not re-checked
//! here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod lifecycle;
pub mod projection;
pub mod query;

pub use lifecycle::{ArticleUpdate, LifecycleEngine};
pub use projection::{ArticleView, EditorArticle, Listing, PublicArticle, StatusView};
pub use query::QueryEngine;
