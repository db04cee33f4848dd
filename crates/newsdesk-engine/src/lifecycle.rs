//! The article lifecycle engine.
//!
//! Owns every write to the article store: submission, status
//! transitions, content edits, and deletion. Status transitions are a
//! flat re-classification — any status is reachable from any other, and
//! re-applying the same transition is idempotent. This is intentional
//! re-tagging, not a guarded forward-only workflow.

use std::str::FromStr;
use std::sync::Arc;

use uuid::Uuid;

use newsdesk_core::validate::{normalize_handle, normalize_tags, require_non_empty};
use newsdesk_core::{Article, Error, Result, StatusToken};
use newsdesk_store::{ArticleStore, IdentityStore};

use crate::projection::StatusView;

/// Partial fields for a content edit.
///
/// Absent fields are left untouched. Status and feedback are
/// deliberately not here — only a transition may change them.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ArticleUpdate {
    /// New headline.
    pub title: Option<String>,
    /// Replacement tag set.
    pub tags: Option<Vec<String>>,
    /// New image reference.
    pub image: Option<String>,
    /// New body text.
    pub body: Option<String>,
}

/// Write-side engine for the article state machine.
pub struct LifecycleEngine {
    articles: Arc<dyn ArticleStore>,
    identities: Arc<dyn IdentityStore>,
}

impl LifecycleEngine {
    /// Wire the engine to its backing stores.
    pub fn new(articles: Arc<dyn ArticleStore>, identities: Arc<dyn IdentityStore>) -> Self {
        Self {
            articles,
            identities,
        }
    }

    /// Submit a new article for moderation.
    ///
    /// Title, image, and body must be non-empty and the owner handle
    /// must resolve to an existing user; the owner reference is only
    /// validated here, never continuously afterward. The stored record
    /// always starts `pending` with empty feedback.
    pub async fn submit(
        &self,
        owner: &str,
        title: &str,
        tags: Option<Vec<String>>,
        image: &str,
        body: &str,
    ) -> Result<Article> {
        require_non_empty("username", owner)?;
        require_non_empty("title", title)?;
        require_non_empty("img", image)?;
        require_non_empty("article content", body)?;

        let handle = normalize_handle(owner);
        if self.identities.find_by_handle(&handle).await?.is_none() {
            return Err(Error::not_found("User not found"));
        }

        let article = Article::new(&handle, title, tags, image, body);
        log::info!("submit: '{}' by {handle} -> pending", article.title);
        self.articles.insert(article).await
    }

    /// Re-classify an article's status, overwriting feedback.
    ///
    /// `token` must be exactly one of `pending`, `accept`, `reject`;
    /// feedback omitted means feedback cleared. Last write wins under
    /// concurrent transitions. Returns the `{title, status, feedback}`
    /// projection.
    pub async fn transition_status(
        &self,
        id: Uuid,
        token: &str,
        feedback: Option<String>,
    ) -> Result<StatusView> {
        let token = StatusToken::from_str(token)?;

        let mut article = self
            .articles
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("Article not found"))?;

        article.status = token.target();
        article.feedback = feedback.unwrap_or_default();
        article.updated_at = chrono::Utc::now();

        log::info!("transition: {id} -> {}", article.status);

        let updated = self
            .articles
            .replace(article)
            .await?
            .ok_or_else(|| Error::not_found("Article not found"))?;
        Ok(StatusView::from(updated))
    }

    /// Merge a partial content edit into an article.
    ///
    /// Does not reset status or feedback; absent fields keep their
    /// current values. Tags, when present, replace the whole set.
    pub async fn update(&self, id: Uuid, changes: ArticleUpdate) -> Result<Article> {
        let mut article = self
            .articles
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("Article not found"))?;

        if let Some(title) = changes.title {
            require_non_empty("title", &title)?;
            article.title = title.trim().to_string();
        }
        if let Some(tags) = changes.tags {
            article.tags = normalize_tags(Some(tags));
        }
        if let Some(image) = changes.image {
            require_non_empty("img", &image)?;
            article.image = image;
        }
        if let Some(body) = changes.body {
            require_non_empty("article content", &body)?;
            article.body = body;
        }
        article.updated_at = chrono::Utc::now();

        self.articles
            .replace(article)
            .await?
            .ok_or_else(|| Error::not_found("Article not found"))
    }

    /// Permanently delete an article, returning the removed snapshot.
    ///
    /// No soft delete; a missing id is a not-found error, never a
    /// silent no-op.
    pub async fn delete(&self, id: Uuid) -> Result<Article> {
        let removed = self
            .articles
            .remove(id)
            .await?
            .ok_or_else(|| Error::not_found("Article not found"))?;
        log::info!("delete: {id} ('{}')", removed.title);
        Ok(removed)
    }
}

// ============================================================================
// Tests
// ============================================================================
