//! Article submission, moderation, and retrieval handlers.
//!
//! Request fields arrive as `Option`s so that missing fields reach the
//! engine's own validation (a 400 with a named field) instead of a
//! framework deserialization rejection.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use http::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use newsdesk_core::ArticleStatus;
use newsdesk_engine::{ArticleUpdate, ArticleView};

use crate::error::ApiError;
use crate::state::AppState;

/// Body for `POST /api/articles`.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Owning user's handle.
    #[serde(default)]
    pub owner: Option<String>,
    /// Headline.
    #[serde(default)]
    pub title: Option<String>,
    /// Tags; any non-array payload coerces to the empty set.
    #[serde(default)]
    pub tags: Option<Value>,
    /// Image reference.
    #[serde(default)]
    pub image: Option<String>,
    /// Body text.
    #[serde(default)]
    pub body: Option<String>,
}

/// Body for `PATCH /api/articles/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    /// Transition token: exactly `pending`, `accept`, or `reject`.
    #[serde(default)]
    pub status: Option<String>,
    /// Moderation feedback; omitted clears it.
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Coerce a JSON tags payload into a string set; non-arrays become
/// empty per the submission contract.
fn coerce_tags(tags: Option<Value>) -> Option<Vec<String>> {
    match tags {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
        ),
        _ => None,
    }
}

/// `POST /api/articles` — submit an article for moderation.
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let article = state
        .lifecycle
        .submit(
            req.owner.as_deref().unwrap_or(""),
            req.title.as_deref().unwrap_or(""),
            coerce_tags(req.tags),
            req.image.as_deref().unwrap_or(""),
            req.body.as_deref().unwrap_or(""),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Article created successfully",
            "article": ArticleView::from(article),
        })),
    ))
}

/// `GET /api/articles` — all accepted articles.
pub async fn list_accepted(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.queries.list_accepted().await?))
}

/// `GET /api/articles/tag/{tag}` — accepted articles carrying the tag.
pub async fn list_by_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.queries.list_accepted_by_tag(&tag).await?))
}

/// `GET /api/articles/pending` — the moderation queue (editor only).
pub async fn list_pending(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.queries.list_pending().await?))
}

/// `GET /api/articles/user/{handle}` — everything a user has written.
pub async fn list_by_owner(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.queries.list_by_owner(&handle).await?))
}

/// `GET /api/articles/accepted/user/{handle}`.
pub async fn list_accepted_by_owner(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(
        state
            .queries
            .list_by_owner_and_status(&handle, ArticleStatus::Accepted)
            .await?,
    ))
}

/// `GET /api/articles/pending/user/{handle}`.
pub async fn list_pending_by_owner(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(
        state
            .queries
            .list_by_owner_and_status(&handle, ArticleStatus::Pending)
            .await?,
    ))
}

/// `GET /api/articles/rejected/user/{handle}`.
pub async fn list_rejected_by_owner(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(
        state
            .queries
            .list_by_owner_and_status(&handle, ArticleStatus::Rejected)
            .await?,
    ))
}

/// `GET /api/articles/editor/all` — every article with moderation
/// state, newest first (editor only).
pub async fn list_for_editor(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.queries.list_for_editor().await?))
}

/// `GET /api/articles/search/{query}` — substring search over accepted
/// content.
pub async fn search(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.queries.search(&query).await?))
}

/// `PATCH /api/articles/{id}/status` — re-classify an article (editor
/// only).
pub async fn transition_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TransitionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let view = state
        .lifecycle
        .transition_status(id, req.status.as_deref().unwrap_or(""), req.feedback)
        .await?;

    Ok(Json(json!({
        "message": "Article status updated successfully",
        "article": view,
    })))
}

/// `PUT /api/articles/{id}` — content edit (authenticated).
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<ArticleUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    let article = state.lifecycle.update(id, changes).await?;
    Ok(Json(json!({
        "message": "Article updated successfully",
        "article": ArticleView::from(article),
    })))
}

/// `DELETE /api/articles/{id}` — permanent removal (editor only);
/// returns the removed snapshot for confirmation.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = state.lifecycle.delete(id).await?;
    Ok(Json(json!({
        "message": "Article deleted successfully",
        "article": ArticleView::from(removed),
    })))
}
