//! Credential hashing capability interface.
//!
//! The article core treats secret hashing as an opaque injected
//! capability: `hash(secret) -> digest`, `verify(secret, digest) ->
//! bool`. [`Blake3Hasher`] is the default implementation — a salted
//! keyed digest over the blake3 primitive. Swap in a different
//! implementation at wiring time if a slower KDF is required.

use uuid::Uuid;

/// Opaque secret-hashing capability.
pub trait CredentialHasher: Send + Sync {
    /// Produce an opaque digest for a secret.
    fn hash(&self, secret: &str) -> String;

    /// Check a secret against a previously produced digest.
    fn verify(&self, secret: &str, digest: &str) -> bool;
}

/// Salted blake3 credential hasher.
///
/// Digest format: `<salt>$<hex>` where the hex is
/// `blake3(salt || secret)`. The salt is random per credential.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl Blake3Hasher {
    /// Create a hasher.
    pub fn new() -> Self {
        Self
    }

    fn digest_with_salt(salt: &str, secret: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(salt.as_bytes());
        hasher.update(secret.as_bytes());
        hasher.finalize().to_hex().to_string()
    }
}

impl CredentialHasher for Blake3Hasher {
    fn hash(&self, secret: &str) -> String {
        let salt = Uuid::new_v4().simple().to_string();
        let hex = Self::digest_with_salt(&salt, secret);
        format!("{salt}${hex}")
    }

    fn verify(&self, secret: &str, digest: &str) -> bool {
        let Some((salt, hex)) = digest.split_once('$') else {
            return false;
        };
        // Constant-time compare via blake3's Hash equality
        let expected = match blake3::Hash::from_hex(hex) {
            Ok(h) => h,
            Err(_) => return false,
        };
        let mut hasher = blake3::Hasher::new();
        hasher.update(salt.as_bytes());
        hasher.update(secret.as_bytes());
        hasher.finalize() == expected
    }
}
