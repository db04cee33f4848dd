//! End-to-end tests over the assembled router.
//!
//! Each test drives the full stack (router, middleware, engines,
//! in-memory stores) through `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::Router;
use http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use newsdesk_api::{router, AppState, Config};

const ADMIN_TOKEN: &str = "admin-sekrit";

fn app() -> Router {
    router(AppState::new(Config {
        jwt_secret: "test-secret".into(),
        admin_token: ADMIN_TOKEN.into(),
    }))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    bearer: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, value)
}

async fn register(app: &Router, handle: &str, role: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/register",
        Some(json!({
            "first_name": "Test",
            "last_name": "User",
            "handle": handle,
            "email": format!("{handle}@example.com"),
            "role": role,
            "password": "hunter22",
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    body
}

async fn login(app: &Router, handle: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        Some(json!({ "handle": handle, "password": "hunter22" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

async fn approve_editor(app: &Router, editor_id: &str) {
    let (status, _) = send(
        app,
        "PATCH",
        &format!("/api/admin/editors/{editor_id}/status"),
        Some(json!({ "status": "accepted" })),
        Some(ADMIN_TOKEN),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

/// Register an editor, approve it, and return its session token.
async fn approved_editor(app: &Router, handle: &str) -> String {
    let editor = register(app, handle, "editor").await;
    approve_editor(app, editor["id"].as_str().unwrap()).await;
    login(app, handle).await
}

async fn submit(app: &Router, owner: &str, title: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/articles",
        Some(json!({
            "owner": owner,
            "title": title,
            "tags": ["general"],
            "image": "cover.png",
            "body": "Body text here.",
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "submit failed: {body}");
    body["article"]["id"].as_str().unwrap().to_string()
}

// ============================================================================
// Auth surface
// ============================================================================

#[tokio::test]
async fn test_register_strips_credential() {
    let app = app();
    let body = register(&app, "alice", "reporter").await;
    assert_eq!(body["handle"], "alice");
    assert!(body.get("credential").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_register_duplicate_handle_is_400() {
    let app = app();
    register(&app, "alice", "reporter").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        Some(json!({
            "first_name": "Other",
            "last_name": "Person",
            "handle": "Alice",
            "email": "other@example.com",
            "role": "editor",
            "password": "hunter22",
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username already exists");
}

#[tokio::test]
async fn test_login_unknown_user_is_401() {
    let app = app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "handle": "ghost", "password": "whatever1" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unapproved_editor_login_is_403() {
    let app = app();
    register(&app, "ed", "editor").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "handle": "ed", "password": "hunter22" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Editor account not approved");
}

// ============================================================================
// Article lifecycle
// ============================================================================

#[tokio::test]
async fn test_submit_starts_pending() {
    let app = app();
    register(&app, "alice", "reporter").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/articles",
        Some(json!({
            "owner": "alice",
            "title": "T",
            "tags": ["x"],
            "image": "i.png",
            "body": "B",
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["article"]["status"], "pending");
    assert_eq!(body["article"]["feedback"], "");
}

#[tokio::test]
async fn test_submit_missing_fields_is_400() {
    let app = app();
    register(&app, "alice", "reporter").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/articles",
        Some(json!({ "owner": "alice", "title": "T" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_unknown_owner_is_404() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/articles",
        Some(json!({
            "owner": "nobody",
            "title": "T",
            "image": "i.png",
            "body": "B",
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_moderation_flow_accept_then_listed_and_searchable() {
    let app = app();
    register(&app, "alice", "reporter").await;
    let editor_token = approved_editor(&app, "ed").await;
    let id = submit(&app, "alice", "Quantum Leap").await;

    // Not publicly listed while pending
    let (status, _) = send(&app, "GET", "/api/articles", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/articles/{id}/status"),
        Some(json!({ "status": "accept", "feedback": "looks good" })),
        Some(&editor_token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["article"]["status"], "accepted");
    assert_eq!(body["article"]["feedback"], "looks good");

    // Now visible to the public and to search
    let (status, body) = send(&app, "GET", "/api/articles", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    let (status, body) = send(&app, "GET", "/api/articles/search/quantum", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["articles"][0]["title"], "Quantum Leap");

    let (status, _) = send(&app, "GET", "/api/articles/search/zebra", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_transition_invalid_token_is_400() {
    let app = app();
    register(&app, "alice", "reporter").await;
    let editor_token = approved_editor(&app, "ed").await;
    let id = submit(&app, "alice", "T").await;

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/articles/{id}/status"),
        Some(json!({ "status": "published" })),
        Some(&editor_token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_requires_editor_and_is_permanent() {
    let app = app();
    register(&app, "alice", "reporter").await;
    let reporter_token = login(&app, "alice").await;
    let editor_token = approved_editor(&app, "ed").await;
    let id = submit(&app, "alice", "Doomed").await;

    // Reporter may not delete, even own content
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/articles/{id}"),
        None,
        Some(&reporter_token),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/articles/{id}"),
        None,
        Some(&editor_token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["article"]["title"], "Doomed");

    // Deleting again is a miss, not a silent success
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/articles/{id}"),
        None,
        Some(&editor_token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_requires_session_but_not_ownership() {
    let app = app();
    register(&app, "alice", "reporter").await;
    register(&app, "bob", "reporter").await;
    let bob_token = login(&app, "bob").await;
    let id = submit(&app, "alice", "Original").await;

    // No session: denied
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/articles/{id}"),
        Some(json!({ "title": "Hijacked" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Any valid session may edit by id (documented policy gap)
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/articles/{id}"),
        Some(json!({ "title": "Edited" })),
        Some(&bob_token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["article"]["title"], "Edited");
    assert_eq!(body["article"]["owner"], "alice");
}

// ============================================================================
// Audience-scoped listings
// ============================================================================

#[tokio::test]
async fn test_owner_listings_scope_by_status() {
    let app = app();
    register(&app, "alice", "reporter").await;
    let editor_token = approved_editor(&app, "ed").await;

    let accepted = submit(&app, "alice", "Accepted one").await;
    submit(&app, "alice", "Pending one").await;

    send(
        &app,
        "PATCH",
        &format!("/api/articles/{accepted}/status"),
        Some(json!({ "status": "accept" })),
        Some(&editor_token),
    )
    .await;

    let (status, body) = send(&app, "GET", "/api/articles/user/alice", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);

    let (status, body) = send(
        &app,
        "GET",
        "/api/articles/accepted/user/alice",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    let (status, _) = send(
        &app,
        "GET",
        "/api/articles/rejected/user/alice",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tag_listing_exact_membership() {
    let app = app();
    register(&app, "alice", "reporter").await;
    let editor_token = approved_editor(&app, "ed").await;
    let id = submit(&app, "alice", "Tagged").await;
    send(
        &app,
        "PATCH",
        &format!("/api/articles/{id}/status"),
        Some(json!({ "status": "accept" })),
        Some(&editor_token),
    )
    .await;

    let (status, body) = send(&app, "GET", "/api/articles/tag/general", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    let (status, _) = send(&app, "GET", "/api/articles/tag/gen", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_editor_views_are_gated() {
    let app = app();
    register(&app, "alice", "reporter").await;
    let reporter_token = login(&app, "alice").await;
    submit(&app, "alice", "T").await;

    for uri in ["/api/articles/pending", "/api/articles/editor/all"] {
        let (status, _) = send(&app, "GET", uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri} without token");

        let (status, _) = send(&app, "GET", uri, None, Some(&reporter_token)).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{uri} with reporter token");
    }

    let editor_token = approved_editor(&app, "ed").await;
    let (status, body) = send(
        &app,
        "GET",
        "/api/articles/editor/all",
        None,
        Some(&editor_token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["articles"][0]["status"], "pending");
}

#[tokio::test]
async fn test_revoked_approval_kills_live_token() {
    let app = app();
    register(&app, "alice", "reporter").await;
    let editor = register(&app, "ed", "editor").await;
    let editor_id = editor["id"].as_str().unwrap().to_string();
    approve_editor(&app, &editor_id).await;
    let editor_token = login(&app, "ed").await;
    let id = submit(&app, "alice", "T").await;

    // Demote the editor back to pending; the already-issued token must
    // stop carrying editor authority
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/admin/editors/{editor_id}/status"),
        Some(json!({ "status": "pending" })),
        Some(ADMIN_TOKEN),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/articles/{id}/status"),
        Some(json!({ "status": "accept" })),
        Some(&editor_token),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Editor account not approved");
}

// ============================================================================
// Admin surface
// ============================================================================

#[tokio::test]
async fn test_admin_surface_requires_credential() {
    let app = app();
    register(&app, "ed", "editor").await;

    let (status, _) = send(&app, "GET", "/api/admin/editors", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/api/admin/editors", None, Some("wrong")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, "GET", "/api/admin/editors", None, Some(ADMIN_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
    let editors = body.as_array().unwrap();
    assert_eq!(editors.len(), 1);
    // Email and credential are stripped from the admin view
    assert!(editors[0].get("email").is_none());
    assert!(editors[0].get("credential").is_none());
}

#[tokio::test]
async fn test_admin_approval_unknown_editor_is_404() {
    let app = app();
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/admin/editors/{}/status", uuid::Uuid::new_v4()),
        Some(json!({ "status": "accepted" })),
        Some(ADMIN_TOKEN),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
