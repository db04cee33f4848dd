//! Error taxonomy for the Newsdesk domain.
//!
//! Three kinds of failure cross crate boundaries:
//!
//! - [`Error::Validation`] — missing/malformed fields, invalid enum tokens,
//!   duplicate unique keys (HTTP 400 at the API edge)
//! - [`Error::NotFound`] — unresolved ids/handles and empty result sets
//!   (HTTP 404 at the API edge)
//! - [`Error::Store`] — unclassified backend failure (HTTP 500, message
//!   never leaked outward)
//!
//! Authentication failures live in `newsdesk-auth`; this crate only covers
//! the domain taxonomy.

use thiserror::Error;

/// Result type alias for Newsdesk domain operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Newsdesk domain operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A request field is missing, empty, malformed, or duplicates a
    /// unique key.
    #[error("{0}")]
    Validation(String),

    /// An id or handle did not resolve, or a list operation matched
    /// nothing.
    #[error("{0}")]
    NotFound(String),

    /// A backing store failed in a way the domain cannot classify.
    #[error("store failure: {0}")]
    Store(String),
}

impl Error {
    /// Build a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a not-found error from any displayable message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Returns `true` for client-caused failures (400/404 class).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound(_))
    }
}
