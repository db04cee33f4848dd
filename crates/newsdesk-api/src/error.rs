//! Centralized error-to-HTTP translation.
//!
//! Domain checks produce typed errors close to where they fail; this
//! translator is the single place they become HTTP responses:
//!
//! - validation (including duplicate unique keys) → 400
//! - not found (including empty list results) → 404
//! - authentication → 401, insufficient capability → 403
//! - everything else → 500 with a generic body, internals never leaked

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

use newsdesk_auth::AuthError;
use newsdesk_core::Error as DomainError;

/// Any failure a handler can produce.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation / not-found / store failure from the engines.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Authentication or authorization failure.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Domain(DomainError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::Domain(DomainError::NotFound(msg)) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Domain(err) => {
                log::error!("unexpected store failure: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong!".to_string(),
                )
            }
            ApiError::Auth(AuthError::Internal(msg)) => {
                log::error!("auth backend failure: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong!".to_string(),
                )
            }
            ApiError::Auth(err) if err.is_forbidden() => (StatusCode::FORBIDDEN, err.to_string()),
            ApiError::Auth(err) => (StatusCode::UNAUTHORIZED, err.to_string()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
