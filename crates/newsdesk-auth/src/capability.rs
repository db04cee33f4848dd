//! Capability model.
//!
//! Authority is computed once from (role, approval status) instead of
//! branching on role at every call site. Role is necessary but not
//! sufficient: an editor identity whose approval is anything other than
//! `accepted` holds no moderation authority, regardless of what its
//! role field says.

use newsdesk_core::{ApprovalStatus, Role, User};

use crate::error::AuthError;

/// What an authenticated identity is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Can submit and manage own content.
    Reporter,
    /// Full moderation authority (approved editor).
    Editor,
    /// Editor by role, but approval is not `accepted`; denied all
    /// editor-only operations.
    EditorUnapproved,
}

impl Capability {
    /// Compute the capability for a user record.
    pub fn of(role: Role, approval: ApprovalStatus) -> Self {
        match (role, approval) {
            (Role::Reporter, _) => Self::Reporter,
            (Role::Editor, ApprovalStatus::Accepted) => Self::Editor,
            (Role::Editor, _) => Self::EditorUnapproved,
        }
    }

    /// Compute the capability for a stored user.
    pub fn for_user(user: &User) -> Self {
        Self::of(user.role, user.approval)
    }

    /// Whether this capability covers editor-only operations
    /// (moderation queue, full listing, status transitions, deletion).
    pub fn allows_moderation(self) -> bool {
        matches!(self, Self::Editor)
    }

    /// Enforce editor authority, distinguishing "not an editor" from
    /// "editor awaiting approval" for error reporting.
    pub fn require_editor(self) -> Result<(), AuthError> {
        match self {
            Self::Editor => Ok(()),
            Self::EditorUnapproved => Err(AuthError::EditorNotApproved),
            Self::Reporter => Err(AuthError::Forbidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_capability() {
        let cap = Capability::of(Role::Reporter, ApprovalStatus::None);
        assert_eq!(cap, Capability::Reporter);
        assert!(!cap.allows_moderation());
        assert!(matches!(
            cap.require_editor(),
            Err(AuthError::Forbidden)
        ));
    }

    #[test]
    fn test_approved_editor_capability() {
        let cap = Capability::of(Role::Editor, ApprovalStatus::Accepted);
        assert_eq!(cap, Capability::Editor);
        assert!(cap.allows_moderation());
        assert!(cap.require_editor().is_ok());
    }

    #[test]
    fn test_unapproved_editor_denied_moderation() {
        for approval in [
            ApprovalStatus::None,
            ApprovalStatus::Pending,
            ApprovalStatus::Rejected,
        ] {
            let cap = Capability::of(Role::Editor, approval);
            assert_eq!(cap, Capability::EditorUnapproved);
            assert!(!cap.allows_moderation());
            assert!(matches!(
                cap.require_editor(),
                Err(AuthError::EditorNotApproved)
            ));
        }
    }
}
