//! # newsdesk-api
//!
//! HTTP surface for the Newsdesk service.
//!
//! - [`state`]: shared application state wiring engines and gate
//! - [`routes`]: the axum router, with per-route access gating
//! - [`handlers`]: request handlers and response envelopes
//! - [`error`]: the centralized domain-to-HTTP error translator
//!
//! The API is plumbing: every decision with branching logic lives in
//! `newsdesk-engine` and `newsdesk-auth`; handlers parse, delegate, and
//! wrap.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::{AppState, Config};
