//! Router assembly and per-route access gating.
//!
//! Public reads need no session. Editor-only routes sit behind
//! [`AuthLayer`] at `Access::Editor`; the content-edit route requires
//! any valid session (record ownership is deliberately not verified —
//! see DESIGN.md); the admin surface sits behind [`AdminLayer`].

use axum::handler::Handler;
use axum::routing::{get, patch, post, put};
use axum::Router;

use newsdesk_auth::{Access, AdminLayer, AuthLayer};

use crate::handlers::{admin, articles, auth};
use crate::state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let editor = AuthLayer::new(state.gate.clone(), Access::Editor);
    let authed = AuthLayer::new(state.gate.clone(), Access::Authenticated);
    let admin_gate = AdminLayer::new(state.admin_token.clone());

    let editor_routes = Router::new()
        .route("/articles/pending", get(articles::list_pending))
        .route("/articles/editor/all", get(articles::list_for_editor))
        .route("/articles/{id}/status", patch(articles::transition_status))
        .route_layer(editor.clone());

    let admin_routes = Router::new()
        .route("/admin/editors", get(admin::list_editors))
        .route(
            "/admin/editors/{id}/status",
            patch(admin::set_editor_status),
        )
        .route_layer(admin_gate);

    let api = Router::new()
        .route(
            "/articles",
            post(articles::submit).get(articles::list_accepted),
        )
        .route("/articles/tag/{tag}", get(articles::list_by_tag))
        .route("/articles/user/{handle}", get(articles::list_by_owner))
        .route(
            "/articles/accepted/user/{handle}",
            get(articles::list_accepted_by_owner),
        )
        .route(
            "/articles/pending/user/{handle}",
            get(articles::list_pending_by_owner),
        )
        .route(
            "/articles/rejected/user/{handle}",
            get(articles::list_rejected_by_owner),
        )
        .route("/articles/search/{query}", get(articles::search))
        .route(
            "/articles/{id}",
            put(articles::update.layer(authed)).delete(articles::delete.layer(editor)),
        )
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .merge(editor_routes)
        .merge(admin_routes);

    Router::new().nest("/api", api).with_state(state)
}
