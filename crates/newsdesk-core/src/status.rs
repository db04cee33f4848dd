//! Role, approval, and article status enums.
//!
//! The moderation wire protocol and the stored record use different
//! spellings for the same states: transition requests carry the verb
//! tokens `accept`/`reject`/`pending` ([`StatusToken`]), while stored and
//! serialized articles carry `accepted`/`rejected`/`pending`
//! ([`ArticleStatus`]). [`StatusToken::target`] is the single point where
//! the two are reconciled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================================================
// Role
// ============================================================================

/// The role a user registered as.
///
/// Role alone is not an authority signal for editors — see
/// [`ApprovalStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Submits articles; cannot moderate.
    Reporter,
    /// Moderates articles once approved by an administrator.
    Editor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reporter => write!(f, "reporter"),
            Self::Editor => write!(f, "editor"),
        }
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reporter" => Ok(Self::Reporter),
            "editor" => Ok(Self::Editor),
            other => Err(Error::validation(format!("invalid role '{other}'"))),
        }
    }
}

// ============================================================================
// ApprovalStatus
// ============================================================================

/// Administrative approval state of a user account.
///
/// Meaningful only for editors; reporters are always implicitly usable
/// and carry [`ApprovalStatus::None`]. An editor whose approval is not
/// [`ApprovalStatus::Accepted`] holds no editor authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// Approval does not apply (reporters).
    None,
    /// Awaiting administrator decision (new editors).
    Pending,
    /// Approved; editor capability is live.
    Accepted,
    /// Denied; editor capability is withheld.
    Rejected,
}

impl ApprovalStatus {
    /// Default approval for a freshly registered account of `role`.
    pub fn default_for(role: Role) -> Self {
        match role {
            Role::Reporter => Self::None,
            Role::Editor => Self::Pending,
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Pending => write!(f, "pending"),
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for ApprovalStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            other => Err(Error::validation(format!(
                "invalid approval status '{other}'"
            ))),
        }
    }
}

// ============================================================================
// ArticleStatus
// ============================================================================

/// Lifecycle status stored on an article record.
///
/// New articles always start [`ArticleStatus::Pending`]. Any status is
/// reachable from any other — moderation is a flat re-classification,
/// not a forward-only workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    /// Submitted, awaiting moderation.
    Pending,
    /// Approved for public listing and search.
    Accepted,
    /// Declined; visible only to the owner and editors.
    Rejected,
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for ArticleStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            other => Err(Error::validation(format!("invalid status '{other}'"))),
        }
    }
}

// ============================================================================
// StatusToken
// ============================================================================

/// A moderation transition request token.
///
/// Exactly three spellings are valid on the wire: `pending`, `accept`,
/// and `reject`. Anything else is a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusToken {
    /// Return the article to the moderation queue.
    Pending,
    /// Approve the article.
    Accept,
    /// Decline the article.
    Reject,
}

impl StatusToken {
    /// The stored status this token transitions an article to.
    pub fn target(self) -> ArticleStatus {
        match self {
            Self::Pending => ArticleStatus::Pending,
            Self::Accept => ArticleStatus::Accepted,
            Self::Reject => ArticleStatus::Rejected,
        }
    }
}

impl fmt::Display for StatusToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Accept => write!(f, "accept"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for StatusToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accept" => Ok(Self::Accept),
            "reject" => Ok(Self::Reject),
            other => Err(Error::validation(format!(
                "invalid status value '{other}'"
            ))),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
