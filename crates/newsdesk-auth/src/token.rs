//! Session token capability interface.
//!
//! `issue(claims) -> token` and `verify(token) -> claims` over HS256
//! JWTs. The signing secret is injected at wiring time; nothing in the
//! article core depends on the token format.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use newsdesk_core::User;

use crate::error::AuthError;

/// Default session lifetime: one hour.
const DEFAULT_TTL_SECS: u64 = 3600;

/// Session token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's id.
    pub sub: Uuid,
    /// The user's handle at issue time (display convenience; authority
    /// is always re-derived from the live record).
    pub handle: String,
    /// Expiry, seconds since the epoch.
    pub exp: u64,
    /// Issued-at, seconds since the epoch.
    pub iat: u64,
}

/// HS256 signing/verification key pair with a session TTL.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl TokenKeys {
    /// Build keys from a shared secret with the default one-hour TTL.
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, DEFAULT_TTL_SECS)
    }

    /// Build keys with an explicit session TTL in seconds.
    pub fn with_ttl(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Issue a session token for a user.
    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        let now = now_epoch();
        let claims = Claims {
            sub: user.id,
            handle: user.handle.clone(),
            exp: now + self.ttl_secs,
            iat: now,
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// Verify a token and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::default();
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }
}

fn now_epoch() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
