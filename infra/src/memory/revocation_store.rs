use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use sg_core::domain::entities::revocation::RevocationEntry;
use sg_core::errors::DomainError;
use sg_core::repositories::RevocationStore;

use crate::token_hash::hash_token;

/// In-memory RevocationStore keyed by token digest
///
/// Stored entries carry the digest in place of the token.
#[derive(Default)]
pub struct InMemoryRevocationStore {
    entries: RwLock<HashMap<String, RevocationEntry>>,
}

impl InMemoryRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    #[cfg(test)]
    pub(crate) async fn stored_entries(&self) -> Vec<RevocationEntry> {
        self.entries.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn contains(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.entries.read().await.contains_key(&hash_token(token)))
    }

    async fn add(&self, entry: RevocationEntry) -> Result<(), DomainError> {
        let digest = hash_token(&entry.token);
        let entry = RevocationEntry {
            token: digest.clone(),
            ..entry
        };

        // First revocation wins
        self.entries.write().await.entry(digest).or_insert(entry);
        Ok(())
    }

    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_purgeable(cutoff));
        Ok(before - entries.len())
    }
}
