//! Administrative editor-approval handlers.
//!
//! Gated by the admin credential layer, outside the user role model.
//! The approval flip here is the single administrative toggle; it is
//! not part of the article lifecycle.

use std::str::FromStr;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use newsdesk_core::{ApprovalStatus, Error, Role, User};

use crate::error::ApiError;
use crate::state::AppState;

/// Editor account as the admin surface sees it: email and credential
/// stripped.
#[derive(Debug, Clone, Serialize)]
pub struct EditorView {
    /// Account id.
    pub id: Uuid,
    /// Handle.
    pub handle: String,
    /// Display first name.
    pub first_name: String,
    /// Display last name.
    pub last_name: String,
    /// Role (always `editor` here).
    pub role: Role,
    /// Approval status.
    pub approval: ApprovalStatus,
    /// Registration time.
    pub created_at: DateTime<Utc>,
    /// Last mutation time.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for EditorView {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            handle: u.handle,
            first_name: u.first_name,
            last_name: u.last_name,
            role: u.role,
            approval: u.approval,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Body for `PATCH /api/admin/editors/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct ApprovalRequest {
    /// New approval status.
    #[serde(default)]
    pub status: Option<String>,
}

/// `GET /api/admin/editors` — all editor accounts, newest first.
pub async fn list_editors(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let editors: Vec<EditorView> = state
        .accounts
        .list_editors()
        .await?
        .into_iter()
        .map(EditorView::from)
        .collect();
    Ok(Json(editors))
}

/// `PATCH /api/admin/editors/{id}/status` — flip an editor's approval.
pub async fn set_editor_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ApprovalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let approval = ApprovalStatus::from_str(
        req.status
            .as_deref()
            .ok_or_else(|| Error::validation("status is required"))?,
    )?;

    let updated = state.accounts.set_editor_approval(id, approval).await?;
    Ok(Json(EditorView::from(updated)))
}
