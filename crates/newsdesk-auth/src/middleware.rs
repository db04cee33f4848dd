//! Tower authentication middleware.
//!
//! [`AuthLayer`] wraps routes with bearer-token validation through the
//! [`AccessGate`]; the [`Access`] level decides whether a valid session
//! is enough or editor capability is also required. [`AdminLayer`]
//! gates the administrative surface on a configured shared credential,
//! outside the user role model.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::response::IntoResponse;
use http::{Request, StatusCode};
use tower::{Layer, Service};

use crate::error::AuthError;
use crate::gate::AccessGate;

/// How much authority a gated route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Any valid session.
    Authenticated,
    /// Editor capability (approved editor only).
    Editor,
}

/// Tower `Layer` that wraps services with access-gate checks.
#[derive(Clone)]
pub struct AuthLayer {
    gate: Arc<AccessGate>,
    access: Access,
}

impl AuthLayer {
    /// Gate routes at the given access level.
    pub fn new(gate: Arc<AccessGate>, access: Access) -> Self {
        Self { gate, access }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthService {
            inner,
            gate: self.gate.clone(),
            access: self.access,
        }
    }
}

/// Tower `Service` that validates the caller before forwarding.
///
/// On success, inserts [`crate::AuthenticatedUser`] into request
/// extensions for downstream handlers.
#[derive(Clone)]
pub struct AuthService<S> {
    inner: S,
    gate: Arc<AccessGate>,
    access: Access,
}

impl<S> Service<Request<Body>> for AuthService<S>
where
    S: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    S::Response: IntoResponse,
    S::Future: Send,
{
    type Response = axum::response::Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let gate = self.gate.clone();
        let access = self.access;

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(t) => t.to_string(),
                None => return Ok(deny(&AuthError::MissingToken)),
            };

            let caller = match gate.authenticate(&token).await {
                Ok(caller) => caller,
                Err(err) => {
                    log::warn!("authentication failed: {err}");
                    return Ok(deny(&err));
                }
            };

            if access == Access::Editor {
                if let Err(err) = caller.capability.require_editor() {
                    log::warn!("'{}' denied editor operation: {err}", caller.handle);
                    return Ok(deny(&err));
                }
            }

            req.extensions_mut().insert(caller);
            let resp = inner
                .call(req)
                .await
                .unwrap_or_else(|infallible| match infallible {});
            Ok(resp.into_response())
        })
    }
}

// ============================================================================
// AdminLayer
// ============================================================================

/// Tower `Layer` gating the admin surface on a configured credential.
#[derive(Clone)]
pub struct AdminLayer {
    token: Arc<String>,
}

impl AdminLayer {
    /// Gate routes on the given admin token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(token.into()),
        }
    }
}

impl<S> Layer<S> for AdminLayer {
    type Service = AdminService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AdminService {
            inner,
            token: self.token.clone(),
        }
    }
}

/// Tower `Service` enforcing the admin credential.
#[derive(Clone)]
pub struct AdminService<S> {
    inner: S,
    token: Arc<String>,
}

impl<S> Service<Request<Body>> for AdminService<S>
where
    S: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    S::Response: IntoResponse,
    S::Future: Send,
{
    type Response = axum::response::Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let expected = self.token.clone();

        Box::pin(async move {
            match extract_bearer_token(&req) {
                None => Ok(deny(&AuthError::MissingToken)),
                Some(presented) if presented != expected.as_str() => {
                    log::warn!("admin surface called with wrong credential");
                    Ok(deny(&AuthError::AdminRequired))
                }
                Some(_) => {
                    let resp = inner
                        .call(req)
                        .await
                        .unwrap_or_else(|infallible| match infallible {});
                    Ok(resp.into_response())
                }
            }
        })
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Extract the bearer token from the Authorization header.
fn extract_bearer_token(req: &Request<Body>) -> Option<&str> {
    req.headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// Build the JSON denial response for an auth failure.
fn deny(err: &AuthError) -> axum::response::Response {
    let status = match err {
        AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        e if e.is_forbidden() => StatusCode::FORBIDDEN,
        _ => StatusCode::UNAUTHORIZED,
    };
    let message = if matches!(err, AuthError::Internal(_)) {
        "Something went wrong!".to_string()
    } else {
        err.to_string()
    };
    let body = serde_json::json!({ "error": message });
    (
        status,
        [(http::header::CONTENT_TYPE, "application/json")],
        serde_json::to_string(&body).unwrap_or_default(),
    )
        .into_response()
}

// ============================================================================
// Tests
// ============================================================================
