//! API-key identity provider.
//!
//! Tokens are stored hashed; authentication is a single indexed lookup of
//! the SHA-256 digest joined to the owning user row.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use tracing::debug;

use notegen_core::{AuthPrincipal, Error, IdentityProvider, Result};

/// PostgreSQL implementation of [`IdentityProvider`].
#[derive(Clone)]
pub struct PgIdentityProvider {
    pool: PgPool,
}

impl PgIdentityProvider {
    /// Create a new PgIdentityProvider with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Compute the stored form of a raw API token.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

#[async_trait]
impl IdentityProvider for PgIdentityProvider {
    async fn authenticate(&self, token: &str) -> Result<AuthPrincipal> {
        let row = sqlx::query(
            "SELECT u.id, u.name
             FROM api_key k
             JOIN user_account u ON u.id = k.user_id
             WHERE k.token_hash = $1 AND k.revoked_at_utc IS NULL",
        )
        .bind(hash_token(token))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::Unauthorized("invalid API token".to_string()))?;

        let principal = AuthPrincipal {
            user_id: row.get("id"),
            name: row.get("name"),
        };
        debug!(
            subsystem = "db",
            component = "identity",
            op = "authenticate",
            owner_id = %principal.user_id,
            "Token resolved"
        );
        Ok(principal)
    }
}
