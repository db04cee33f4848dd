//! In-memory document-collection backends.
//!
//! Each store is a `RwLock`-guarded map with a side list preserving
//! insertion order, so `all()` and role listings are deterministic
//! without the engines re-sorting everything.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use newsdesk_core::{ApprovalStatus, Article, Error, Result, Role, User};

use crate::traits::{ArticleStore, IdentityStore};

// ============================================================================
// MemoryIdentityStore
// ============================================================================

#[derive(Default)]
struct IdentityInner {
    by_id: HashMap<Uuid, User>,
    // handle -> id index; handles are stored case-normalized
    by_handle: HashMap<String, Uuid>,
    order: Vec<Uuid>,
}

/// In-memory [`IdentityStore`].
#[derive(Clone, Default)]
pub struct MemoryIdentityStore {
    inner: Arc<RwLock<IdentityInner>>,
}

impl MemoryIdentityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn insert(&self, user: User) -> Result<User> {
        let mut inner = self.inner.write().await;
        if inner.by_handle.contains_key(&user.handle) {
            return Err(Error::validation("Username already exists"));
        }
        inner.by_handle.insert(user.handle.clone(), user.id);
        inner.order.push(user.id);
        inner.by_id.insert(user.id, user.clone());
        log::debug!("identity store: inserted '{}'", user.handle);
        Ok(user)
    }

    async fn find_by_handle(&self, handle: &str) -> Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .by_handle
            .get(handle)
            .and_then(|id| inner.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.by_id.get(&id).cloned())
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.by_id.get(id))
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }

    async fn set_approval(&self, id: Uuid, approval: ApprovalStatus) -> Result<Option<User>> {
        let mut inner = self.inner.write().await;
        match inner.by_id.get_mut(&id) {
            Some(user) => {
                user.approval = approval;
                user.updated_at = chrono::Utc::now();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }
}

// ============================================================================
// MemoryArticleStore
// ============================================================================

#[derive(Default)]
struct ArticleInner {
    by_id: HashMap<Uuid, Article>,
    order: Vec<Uuid>,
}

/// In-memory [`ArticleStore`].
#[derive(Clone, Default)]
pub struct MemoryArticleStore {
    inner: Arc<RwLock<ArticleInner>>,
}

impl MemoryArticleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleStore for MemoryArticleStore {
    async fn insert(&self, article: Article) -> Result<Article> {
        let mut inner = self.inner.write().await;
        inner.order.push(article.id);
        inner.by_id.insert(article.id, article.clone());
        log::debug!("article store: inserted {}", article.id);
        Ok(article)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Article>> {
        let inner = self.inner.read().await;
        Ok(inner.by_id.get(&id).cloned())
    }

    async fn replace(&self, article: Article) -> Result<Option<Article>> {
        let mut inner = self.inner.write().await;
        if !inner.by_id.contains_key(&article.id) {
            return Ok(None);
        }
        inner.by_id.insert(article.id, article.clone());
        Ok(Some(article))
    }

    async fn remove(&self, id: Uuid) -> Result<Option<Article>> {
        let mut inner = self.inner.write().await;
        let removed = inner.by_id.remove(&id);
        if removed.is_some() {
            inner.order.retain(|entry| *entry != id);
            log::debug!("article store: removed {id}");
        }
        Ok(removed)
    }

    async fn all(&self) -> Result<Vec<Article>> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.by_id.get(id))
            .cloned()
            .collect())
    }
}

// ============================================================================
// Tests
// ============================================================================
