//! Request handlers, grouped by surface.

pub mod admin;
pub mod articles;
pub mod auth;
