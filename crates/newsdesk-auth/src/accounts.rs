//! Registration, login, and the administrative editor-approval surface.
//!
//! The account service owns every identity-store mutation. The article
//! engines only ever read identities (existence checks).

use std::sync::Arc;

use serde::Deserialize;

use newsdesk_core::validate::{normalize_handle, require_non_empty};
use newsdesk_core::{ApprovalStatus, Error, Result, Role, User};
use newsdesk_store::IdentityStore;

use crate::error::AuthError;
use crate::hasher::CredentialHasher;
use crate::token::TokenKeys;

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LEN: usize = 6;

/// A registration request.
#[derive(Debug, Clone, Deserialize)]
pub struct Registration {
    /// Display first name.
    pub first_name: String,
    /// Display last name.
    pub last_name: String,
    /// Desired unique handle.
    pub handle: String,
    /// Contact email.
    pub email: String,
    /// Requested role.
    pub role: Role,
    /// Plaintext password; hashed before storage, never stored.
    pub password: String,
}

/// A successful login: the issued token plus the sanitized user.
#[derive(Debug, Clone)]
pub struct LoginSession {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// The authenticated user record (credential digest included in the
    /// struct but skipped on serialization).
    pub user: User,
}

/// Identity operations: register, login, and admin approval flips.
pub struct AccountService {
    identities: Arc<dyn IdentityStore>,
    hasher: Arc<dyn CredentialHasher>,
    tokens: Arc<TokenKeys>,
}

impl AccountService {
    /// Wire the service to its collaborators.
    pub fn new(
        identities: Arc<dyn IdentityStore>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: Arc<TokenKeys>,
    ) -> Self {
        Self {
            identities,
            hasher,
            tokens,
        }
    }

    /// Register a new account.
    ///
    /// The handle is case-normalized and must be unique; editors start
    /// with `pending` approval, reporters with `none`. The password is
    /// hashed through the injected capability before storage.
    pub async fn register(&self, reg: Registration) -> Result<User> {
        require_non_empty("First name", &reg.first_name)?;
        require_non_empty("Last name", &reg.last_name)?;
        require_non_empty("Username", &reg.handle)?;
        require_non_empty("Email", &reg.email)?;
        if reg.password.len() < MIN_PASSWORD_LEN {
            return Err(Error::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let digest = self.hasher.hash(&reg.password);
        let user = User::new(
            &reg.handle,
            &reg.first_name,
            &reg.last_name,
            &reg.email,
            reg.role,
            digest,
        );

        let stored = self.identities.insert(user).await?;
        log::info!("registered '{}' as {}", stored.handle, stored.role);
        Ok(stored)
    }

    /// Authenticate by handle and password, issuing a session token.
    ///
    /// Unknown handle and wrong password are deliberately
    /// indistinguishable. Editors whose approval is not `accepted` are
    /// refused outright.
    pub async fn login(&self, handle: &str, password: &str) -> std::result::Result<LoginSession, AuthError> {
        let handle = normalize_handle(handle);
        let user = self
            .identities
            .find_by_handle(&handle)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(password, &user.credential) {
            return Err(AuthError::InvalidCredentials);
        }

        if user.role == Role::Editor && user.approval != ApprovalStatus::Accepted {
            return Err(AuthError::EditorNotApproved);
        }

        let token = self.tokens.issue(&user)?;
        log::info!("login: '{}'", user.handle);
        Ok(LoginSession { token, user })
    }

    /// All editor accounts, newest first.
    pub async fn list_editors(&self) -> Result<Vec<User>> {
        let mut editors = self.identities.list_by_role(Role::Editor).await?;
        editors.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(editors)
    }

    /// Flip an editor's approval status (admin operation).
    pub async fn set_editor_approval(
        &self,
        id: uuid::Uuid,
        approval: ApprovalStatus,
    ) -> Result<User> {
        // Only editor accounts carry meaningful approval
        let current = self
            .identities
            .find_by_id(id)
            .await?
            .filter(|u| u.role == Role::Editor)
            .ok_or_else(|| Error::not_found("Editor not found"))?;

        log::info!(
            "approval: '{}' {} -> {approval}",
            current.handle,
            current.approval
        );
        self.identities
            .set_approval(id, approval)
            .await?
            .ok_or_else(|| Error::not_found("Editor not found"))
    }
}

// ============================================================================
// Tests
// ============================================================================
