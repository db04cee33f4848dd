//! Per-request access gate.
//!
//! Validates a bearer token and resolves the caller against the live
//! identity record. Capability is recomputed from the stored (role,
//! approval) pair on every request, so a token issued before an
//! approval was revoked carries no stale authority.

use std::sync::Arc;

use uuid::Uuid;

use newsdesk_store::IdentityStore;

use crate::capability::Capability;
use crate::error::AuthError;
use crate::token::TokenKeys;

/// The caller identity attached to gated requests.
///
/// Stored in HTTP request extensions by the auth middleware and read by
/// downstream handlers.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The user's id.
    pub id: Uuid,
    /// The user's handle.
    pub handle: String,
    /// Authority computed from the live record.
    pub capability: Capability,
}

/// Token validation plus live identity resolution.
pub struct AccessGate {
    identities: Arc<dyn IdentityStore>,
    tokens: Arc<TokenKeys>,
}

impl AccessGate {
    /// Wire the gate to the identity store and token keys.
    pub fn new(identities: Arc<dyn IdentityStore>, tokens: Arc<TokenKeys>) -> Self {
        Self { identities, tokens }
    }

    /// Validate a bearer token and resolve the caller.
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.tokens.verify(token)?;
        let user = self
            .identities
            .find_by_id(claims.sub)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or(AuthError::UnknownIdentity)?;

        Ok(AuthenticatedUser {
            id: user.id,
            handle: user.handle.clone(),
            capability: Capability::for_user(&user),
        })
    }
}
