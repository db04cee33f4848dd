//! Registration and login handlers.

use std::str::FromStr;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use http::StatusCode;
use serde::Deserialize;
use serde_json::json;

use newsdesk_auth::Registration;
use newsdesk_core::{Error, Role};

use crate::error::ApiError;
use crate::state::AppState;

/// Body for `POST /api/auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Display last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Desired unique handle.
    #[serde(default)]
    pub handle: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Role: `reporter` or `editor`.
    #[serde(default)]
    pub role: Option<String>,
    /// Plaintext password.
    #[serde(default)]
    pub password: Option<String>,
}

/// Body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Account handle.
    #[serde(default)]
    pub handle: Option<String>,
    /// Account password.
    #[serde(default)]
    pub password: Option<String>,
}

/// `POST /api/auth/register` — create an account.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let role = Role::from_str(
        req.role
            .as_deref()
            .ok_or_else(|| Error::validation("User type is required"))?,
    )?;

    let user = state
        .accounts
        .register(Registration {
            first_name: req.first_name.unwrap_or_default(),
            last_name: req.last_name.unwrap_or_default(),
            handle: req.handle.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            role,
            password: req.password.unwrap_or_default(),
        })
        .await?;

    // User serialization skips the credential digest
    Ok((StatusCode::CREATED, Json(user)))
}

/// `POST /api/auth/login` — issue a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state
        .accounts
        .login(
            req.handle.as_deref().unwrap_or(""),
            req.password.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(Json(json!({
        "success": true,
        "message": "Login successful",
        "role": session.user.role,
        "token": session.token,
        "user": session.user,
    })))
}
