//! Redis implementation of the RevocationStore trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::{aio::MultiplexedConnection, AsyncCommands};
use tracing::debug;

use sg_core::domain::entities::revocation::RevocationEntry;
use sg_core::errors::DomainError;
use sg_core::repositories::RevocationStore;
use sg_shared::config::CacheConfig;

use crate::cache::redis_client::connect_with_retry;
use crate::token_hash::hash_token;
use crate::InfrastructureError;

/// Seconds a key outlives the token it revokes
const TTL_SLACK_SECONDS: i64 = 60;

/// Redis implementation of RevocationStore
///
/// One key per revoked token: `<prefix>:revoked:<sha256>`, value the owner's
/// email. Keys expire shortly after the token itself would; entries with an
/// unknown expiry never expire.
#[derive(Clone)]
pub struct RedisRevocationStore {
    connection: MultiplexedConnection,
    config: CacheConfig,
}

impl RedisRevocationStore {
    /// Connect using `config`, with up to three attempts
    pub async fn connect(config: CacheConfig) -> Result<Self, InfrastructureError> {
        let connection = connect_with_retry(&config, 3, 100).await?;
        Ok(Self::new(connection, config))
    }

    pub fn new(connection: MultiplexedConnection, config: CacheConfig) -> Self {
        Self { connection, config }
    }

    fn key(&self, token: &str) -> String {
        revocation_key(&self.config, token)
    }
}

pub(crate) fn revocation_key(config: &CacheConfig, token: &str) -> String {
    config.make_key(&format!("revoked:{}", hash_token(token)))
}

/// TTL for an entry revoked at `now`, `None` to keep it forever
pub(crate) fn key_ttl(entry: &RevocationEntry, now: DateTime<Utc>) -> Option<u64> {
    entry.expires_at.map(|expiry| {
        let remaining = (expiry - now).num_seconds().max(0);
        (remaining + TTL_SLACK_SECONDS) as u64
    })
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn contains(&self, token: &str) -> Result<bool, DomainError> {
        let mut conn = self.connection.clone();

        conn.exists(self.key(token))
            .await
            .map_err(|e| DomainError::store(format!("Failed to check revoked token: {}", e)))
    }

    async fn add(&self, entry: RevocationEntry) -> Result<(), DomainError> {
        let mut conn = self.connection.clone();
        let key = self.key(&entry.token);

        let result = match key_ttl(&entry, Utc::now()) {
            Some(ttl) => conn.set_ex::<_, _, ()>(&key, &entry.owner_email, ttl).await,
            None => conn.set::<_, _, ()>(&key, &entry.owner_email).await,
        };

        result.map_err(|e| DomainError::store(format!("Failed to revoke token: {}", e)))?;
        debug!("Revoked token stored under {}", key);
        Ok(())
    }

    async fn purge_expired(&self, _cutoff: DateTime<Utc>) -> Result<usize, DomainError> {
        // Keys carry their own TTL
        Ok(0)
    }
}
