//! Store trait seams.
//!
//! The engines depend on these traits only; backends are injected at
//! wiring time. Errors use the shared domain taxonomy from
//! `newsdesk-core` so the API edge can translate them uniformly.

use async_trait::async_trait;
use uuid::Uuid;

use newsdesk_core::{ApprovalStatus, Article, Result, Role, User};

/// Identity records, keyed by id with an indexed handle lookup.
///
/// The article engines consult this store for existence checks; only the
/// auth surface mutates it.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Insert a new user.
    ///
    /// Fails with a validation error if the (case-normalized) handle is
    /// already taken — handles are unique and immutable.
    async fn insert(&self, user: User) -> Result<User>;

    /// Look up a user by case-normalized handle.
    async fn find_by_handle(&self, handle: &str) -> Result<Option<User>>;

    /// Look up a user by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// All users with the given role, in insertion order.
    async fn list_by_role(&self, role: Role) -> Result<Vec<User>>;

    /// Overwrite a user's approval status, returning the updated record.
    ///
    /// Returns `Ok(None)` if the id does not resolve.
    async fn set_approval(&self, id: Uuid, approval: ApprovalStatus) -> Result<Option<User>>;
}

/// Article records, keyed by id.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Insert a new article (one durable write).
    async fn insert(&self, article: Article) -> Result<Article>;

    /// Look up an article by id.
    async fn get(&self, id: Uuid) -> Result<Option<Article>>;

    /// Overwrite an existing article wholesale (last-write-wins).
    ///
    /// Returns `Ok(None)` if the id does not resolve.
    async fn replace(&self, article: Article) -> Result<Option<Article>>;

    /// Permanently remove an article, returning the removed snapshot.
    ///
    /// Returns `Ok(None)` if the id does not resolve; removal is
    /// irreversible (no soft delete).
    async fn remove(&self, id: Uuid) -> Result<Option<Article>>;

    /// Every article, in insertion order.
    async fn all(&self) -> Result<Vec<Article>>;
}
