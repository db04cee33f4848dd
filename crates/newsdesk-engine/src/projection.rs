//! Outward-facing article shapes.
//!
//! Every read operation projects a restricted field set for its
//! audience; internal store fields never serialize outward. The
//! projections here are plain serde structs built from the stored
//! [`Article`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use newsdesk_core::{Article, ArticleStatus};

/// Envelope for every list operation: `{count, articles}`.
///
/// An empty result set is never wrapped in this envelope — "no matches"
/// is reported as a not-found miss instead, by API convention.
#[derive(Debug, Clone, Serialize)]
pub struct Listing<T> {
    /// Number of articles in this listing.
    pub count: usize,
    /// The projected articles.
    pub articles: Vec<T>,
}

impl<T> Listing<T> {
    /// Wrap a non-empty projection set.
    pub fn new(articles: Vec<T>) -> Self {
        Self {
            count: articles.len(),
            articles,
        }
    }
}

/// What anonymous readers see: accepted content without moderation
/// metadata or record ids.
#[derive(Debug, Clone, Serialize)]
pub struct PublicArticle {
    /// Headline.
    pub title: String,
    /// Author handle.
    pub owner: String,
    /// Tag set.
    pub tags: Vec<String>,
    /// Image reference.
    pub image: String,
    /// Body text.
    pub body: String,
    /// Submission time.
    pub created_at: DateTime<Utc>,
}

impl From<Article> for PublicArticle {
    fn from(a: Article) -> Self {
        Self {
            title: a.title,
            owner: a.owner,
            tags: a.tags,
            image: a.image,
            body: a.body,
            created_at: a.created_at,
        }
    }
}

/// What owners (and status-scoped listings) see: the full record
/// including moderation state.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleView {
    /// Record id.
    pub id: Uuid,
    /// Author handle.
    pub owner: String,
    /// Headline.
    pub title: String,
    /// Tag set.
    pub tags: Vec<String>,
    /// Image reference.
    pub image: String,
    /// Body text.
    pub body: String,
    /// Lifecycle status.
    pub status: ArticleStatus,
    /// Moderation feedback.
    pub feedback: String,
    /// Submission time.
    pub created_at: DateTime<Utc>,
    /// Last mutation time.
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleView {
    fn from(a: Article) -> Self {
        Self {
            id: a.id,
            owner: a.owner,
            title: a.title,
            tags: a.tags,
            image: a.image,
            body: a.body,
            status: a.status,
            feedback: a.feedback,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// The moderation desk view: every article annotated with status and
/// feedback.
#[derive(Debug, Clone, Serialize)]
pub struct EditorArticle {
    /// Record id.
    pub id: Uuid,
    /// Headline.
    pub title: String,
    /// Author handle.
    pub owner: String,
    /// Tag set.
    pub tags: Vec<String>,
    /// Image reference.
    pub image: String,
    /// Body text.
    pub body: String,
    /// Lifecycle status.
    pub status: ArticleStatus,
    /// Moderation feedback.
    pub feedback: String,
    /// Submission time.
    pub created_at: DateTime<Utc>,
}

impl From<Article> for EditorArticle {
    fn from(a: Article) -> Self {
        Self {
            id: a.id,
            title: a.title,
            owner: a.owner,
            tags: a.tags,
            image: a.image,
            body: a.body,
            status: a.status,
            feedback: a.feedback,
            created_at: a.created_at,
        }
    }
}

/// The slim projection returned by a status transition:
/// `{title, status, feedback}`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusView {
    /// Headline.
    pub title: String,
    /// Lifecycle status after the transition.
    pub status: ArticleStatus,
    /// Feedback recorded with the transition.
    pub feedback: String,
}

impl From<Article> for StatusView {
    fn from(a: Article) -> Self {
        Self {
            title: a.title,
            status: a.status,
            feedback: a.feedback,
        }
    }
}
