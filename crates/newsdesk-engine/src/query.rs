//! The query/search engine.
//!
//! Pure reads over the article store, one operation per audience view.
//! Every operation returns a [`Listing`] envelope, and an empty result
//! is reported as a not-found miss rather than `{count: 0}` — callers
//! rely on that convention.
//!
//! Search is deliberate substring matching: case-insensitive, across
//! title, body, and tags, accepted articles only. No tokenization,
//! stemming, or relevance ranking.

use std::sync::Arc;

use newsdesk_core::{Article, ArticleStatus, Error, Result};
use newsdesk_store::ArticleStore;

use crate::projection::{ArticleView, EditorArticle, Listing, PublicArticle};

/// Read-side engine over the article store.
pub struct QueryEngine {
    articles: Arc<dyn ArticleStore>,
}

impl QueryEngine {
    /// Wire the engine to its backing store.
    pub fn new(articles: Arc<dyn ArticleStore>) -> Self {
        Self { articles }
    }

    /// All accepted articles.
    pub async fn list_accepted(&self) -> Result<Listing<ArticleView>> {
        let matches = self
            .filtered(|a| a.status == ArticleStatus::Accepted)
            .await?;
        non_empty(matches, "No accepted articles found")
    }

    /// Accepted articles whose tag set contains `tag` exactly.
    pub async fn list_accepted_by_tag(&self, tag: &str) -> Result<Listing<PublicArticle>> {
        let matches = self
            .filtered(|a| a.status == ArticleStatus::Accepted && a.has_tag(tag))
            .await?;
        non_empty(matches, "No accepted articles found with this tag")
    }

    /// All pending articles (moderation queue).
    pub async fn list_pending(&self) -> Result<Listing<ArticleView>> {
        let matches = self
            .filtered(|a| a.status == ArticleStatus::Pending)
            .await?;
        non_empty(matches, "No pending articles found")
    }

    /// Every article owned by `handle`, regardless of status.
    pub async fn list_by_owner(&self, handle: &str) -> Result<Listing<ArticleView>> {
        let matches = self.filtered(|a| a.owner == handle).await?;
        non_empty(matches, "No articles found for this user")
    }

    /// Articles owned by `handle` with the given status.
    pub async fn list_by_owner_and_status(
        &self,
        handle: &str,
        status: ArticleStatus,
    ) -> Result<Listing<ArticleView>> {
        let matches = self
            .filtered(|a| a.owner == handle && a.status == status)
            .await?;
        non_empty(matches, format!("No {status} articles found for this user"))
    }

    /// Every article with status and feedback, newest first.
    ///
    /// The only operation with a mandated ordering: non-increasing by
    /// creation time. All other listings are insertion-order.
    pub async fn list_for_editor(&self) -> Result<Listing<EditorArticle>> {
        let mut matches = self.articles.all().await?;
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        non_empty(matches, "No articles found")
    }

    /// Accepted articles matching `query` as a case-insensitive
    /// substring of title, body, or any tag.
    pub async fn search(&self, query: &str) -> Result<Listing<PublicArticle>> {
        let matches = self
            .filtered(|a| a.status == ArticleStatus::Accepted && a.matches_query(query))
            .await?;
        non_empty(
            matches,
            "No accepted articles found for the given search query.",
        )
    }

    async fn filtered(&self, keep: impl Fn(&Article) -> bool) -> Result<Vec<Article>> {
        Ok(self
            .articles
            .all()
            .await?
            .into_iter()
            .filter(|a| keep(a))
            .collect())
    }
}

/// Project a match set into a listing, turning emptiness into a miss.
fn non_empty<T: From<Article>>(
    matches: Vec<Article>,
    miss: impl Into<String>,
) -> Result<Listing<T>> {
    if matches.is_empty() {
        return Err(Error::not_found(miss));
    }
    Ok(Listing::new(matches.into_iter().map(T::from).collect()))
}

// ============================================================================
// Tests
// ============================================================================
