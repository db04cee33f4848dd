//! Shared application state.

use std::sync::Arc;

use newsdesk_auth::{AccessGate, AccountService, Blake3Hasher, TokenKeys};
use newsdesk_engine::{LifecycleEngine, QueryEngine};
use newsdesk_store::{MemoryArticleStore, MemoryIdentityStore};

/// Runtime configuration for the API.
#[derive(Debug, Clone)]
pub struct Config {
    /// HS256 signing secret for session tokens.
    pub jwt_secret: String,
    /// Shared credential gating the admin surface.
    pub admin_token: String,
}

/// Everything the handlers need, wired once at startup.
///
/// Cheap to clone (Arc internals).
#[derive(Clone)]
pub struct AppState {
    /// Write-side article engine.
    pub lifecycle: Arc<LifecycleEngine>,
    /// Read-side article engine.
    pub queries: Arc<QueryEngine>,
    /// Registration/login/admin identity operations.
    pub accounts: Arc<AccountService>,
    /// Per-request access gate.
    pub gate: Arc<AccessGate>,
    /// Admin surface credential.
    pub admin_token: String,
}

impl AppState {
    /// Wire a full application over in-memory stores.
    pub fn new(config: Config) -> Self {
        let articles = Arc::new(MemoryArticleStore::new());
        let identities = Arc::new(MemoryIdentityStore::new());
        let tokens = Arc::new(TokenKeys::new(&config.jwt_secret));
        let hasher = Arc::new(Blake3Hasher::new());

        Self {
            lifecycle: Arc::new(LifecycleEngine::new(articles.clone(), identities.clone())),
            queries: Arc::new(QueryEngine::new(articles)),
            accounts: Arc::new(AccountService::new(
                identities.clone(),
                hasher,
                tokens.clone(),
            )),
            gate: Arc::new(AccessGate::new(identities, tokens)),
            admin_token: config.admin_token,
        }
    }
}
