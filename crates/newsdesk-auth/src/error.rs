//! Auth-specific error types.

/// Errors that can occur during authentication and authorization.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No Authorization header or bearer token present.
    #[error("missing authentication token")]
    MissingToken,

    /// Token format or signature is invalid.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Token has expired.
    #[error("token has expired")]
    Expired,

    /// Unknown handle or wrong password. Deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The token's subject no longer resolves to a user record.
    #[error("unknown identity")]
    UnknownIdentity,

    /// An editor account whose approval status is not `accepted`.
    #[error("Editor account not approved")]
    EditorNotApproved,

    /// The caller's capability does not cover the requested operation.
    #[error("insufficient privileges")]
    Forbidden,

    /// The admin surface was called without the admin credential.
    #[error("admin credential required")]
    AdminRequired,

    /// The identity store failed while resolving the caller.
    #[error("identity lookup failed: {0}")]
    Internal(String),
}

impl AuthError {
    /// Whether this failure is a 403 (authenticated but not allowed)
    /// rather than a 401 (not authenticated).
    pub fn is_forbidden(&self) -> bool {
        matches!(
            self,
            AuthError::EditorNotApproved | AuthError::Forbidden | AuthError::AdminRequired
        )
    }
}
