//! MySQL implementation of the RevocationStore trait.
//!
//! Tokens are stored as SHA-256 digests in `revoked_tokens`; the digest is
//! the primary key, so `INSERT IGNORE` makes repeated revocation a no-op.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use sg_core::domain::entities::revocation::RevocationEntry;
use sg_core::errors::DomainError;
use sg_core::repositories::RevocationStore;

use crate::token_hash::hash_token;

/// MySQL implementation of RevocationStore
pub struct MySqlRevocationStore {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRevocationStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevocationStore for MySqlRevocationStore {
    async fn contains(&self, token: &str) -> Result<bool, DomainError> {
        let query = "SELECT 1 FROM revoked_tokens WHERE token_hash = ? LIMIT 1";

        let row = sqlx::query(query)
            .bind(hash_token(token))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to check revoked token: {}", e)))?;

        Ok(row.is_some())
    }

    async fn add(&self, entry: RevocationEntry) -> Result<(), DomainError> {
        let query = r#"
            INSERT IGNORE INTO revoked_tokens (token_hash, owner_email, revoked_at, expires_at)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(hash_token(&entry.token))
            .bind(&entry.owner_email)
            .bind(entry.revoked_at)
            .bind(entry.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to revoke token: {}", e)))?;

        Ok(())
    }

    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError> {
        let query = r#"
            DELETE FROM revoked_tokens
            WHERE expires_at IS NOT NULL AND expires_at < ?
        "#;

        let result = sqlx::query(query)
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to purge revoked tokens: {}", e)))?;

        Ok(result.rows_affected() as usize)
    }
}
