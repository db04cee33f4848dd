//! # newsdesk-store
//!
//! Storage seams for the Newsdesk service.
//!
//! This crate provides:
//! - [`IdentityStore`] / [`ArticleStore`] — async trait seams the engines
//!   operate against
//! - [`MemoryIdentityStore`] / [`MemoryArticleStore`] — in-memory
//!   document-collection backends with indexed id lookup and stable
//!   insertion order
//!
//! Each call is an independent unit of work; there are no cross-request
//! transactions and concurrent writers are last-write-wins. The memory
//! backends give read-your-writes within a single client sequence.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod memory;
pub mod traits;

pub use memory::{MemoryArticleStore, MemoryIdentityStore};
pub use traits::{ArticleStore, IdentityStore};
