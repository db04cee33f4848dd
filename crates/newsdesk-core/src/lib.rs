//! Newsdesk Core — shared types, enums, validation, and errors.
//!
//! This crate provides the foundational types used across all Newsdesk crates.
//! It has no internal Newsdesk dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy and Result alias
//! - [`model`]: User and Article records
//! - [`status`]: Role, approval, and article status enums
//! - [`validate`]: Field and handle normalization helpers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod status;
pub mod validate;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use model::{Article, User};
pub use status::{ApprovalStatus, ArticleStatus, Role, StatusToken};
