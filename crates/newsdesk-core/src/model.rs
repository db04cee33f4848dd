//! User and Article records.
//!
//! These are the stored shapes. Outward-facing projections (public
//! listings, editor views, sanitized user responses) live with the
//! engines that produce them; the credential digest never serializes
//! out of this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::status::{ApprovalStatus, ArticleStatus, Role};
use crate::validate::{normalize_email, normalize_handle, normalize_tags};

// ============================================================================
// User
// ============================================================================

/// An identity record.
///
/// The handle is unique (case-normalized) and immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stable unique id.
    pub id: Uuid,
    /// Unique, lowercase handle. Immutable after registration.
    pub handle: String,
    /// Display first name.
    pub first_name: String,
    /// Display last name.
    pub last_name: String,
    /// Contact email, lowercased.
    pub email: String,
    /// Registered role.
    pub role: Role,
    /// Administrative approval state; the live authority signal for
    /// editors.
    pub approval: ApprovalStatus,
    /// Opaque credential digest. Never exposed outward.
    #[serde(skip_serializing)]
    pub credential: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
    /// Last mutation time.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new user with normalized handle/email and the approval
    /// default for its role.
    pub fn new(
        handle: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
        role: Role,
        credential: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            handle: normalize_handle(handle),
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: normalize_email(email),
            role,
            approval: ApprovalStatus::default_for(role),
            credential,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this account holds live editor authority.
    ///
    /// Role is necessary but not sufficient: an editor whose approval is
    /// not `accepted` has no editor capability.
    pub fn is_approved_editor(&self) -> bool {
        self.role == Role::Editor && self.approval == ApprovalStatus::Accepted
    }
}

// ============================================================================
// Article
// ============================================================================

/// A content record.
///
/// `owner` references `User.handle` by value — a weak reference checked
/// at submission time only. Deleting a user does not cascade here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Stable unique id.
    pub id: Uuid,
    /// Owning user's handle (weak reference, lookup only).
    pub owner: String,
    /// Headline.
    pub title: String,
    /// Unordered tag set, duplicate-free.
    pub tags: Vec<String>,
    /// Image reference (URL or path; opaque here).
    pub image: String,
    /// Free-form body text.
    pub body: String,
    /// Lifecycle status. Always starts `pending`.
    pub status: ArticleStatus,
    /// Moderation feedback. Empty until status leaves `pending`.
    pub feedback: String,
    /// Submission time.
    pub created_at: DateTime<Utc>,
    /// Last mutation time.
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Build a freshly submitted article: status `pending`, feedback
    /// empty, tags coerced to a normalized set.
    pub fn new(
        owner: &str,
        title: &str,
        tags: Option<Vec<String>>,
        image: &str,
        body: &str,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner: normalize_handle(owner),
            title: title.trim().to_string(),
            tags: normalize_tags(tags),
            image: image.to_string(),
            body: body.to_string(),
            status: ArticleStatus::Pending,
            feedback: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Exact tag membership check (not substring).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match across title, body, and tags.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.body.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(&needle))
    }
}

// ============================================================================
// Tests
// ============================================================================
