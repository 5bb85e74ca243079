//! Mock implementation of RevocationStore for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::revocation::RevocationEntry;
use crate::errors::DomainError;

use super::r#trait::RevocationStore;

/// Mock revocation store with switchable backend failures
pub struct MockRevocationStore {
    entries: Arc<RwLock<HashMap<String, RevocationEntry>>>,
    fail_reads: AtomicBool,
    /// Number of successful writes allowed before `add` starts failing
    writes_before_failure: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MockRevocationStore {
    /// Create a new mock store
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            fail_reads: AtomicBool::new(false),
            writes_before_failure: AtomicUsize::new(0),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every `contains` call fail
    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    /// Make every `add` call fail
    pub fn fail_writes(&self) {
        self.fail_writes_after(0);
    }

    /// Let `successes` writes through, then fail the rest
    pub fn fail_writes_after(&self, successes: usize) {
        self.writes_before_failure.store(successes, Ordering::SeqCst);
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Number of distinct tokens stored
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Fetch the stored entry for a token
    pub async fn entry(&self, token: &str) -> Option<RevocationEntry> {
        self.entries.read().await.get(token).cloned()
    }
}

impl Default for MockRevocationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationStore for MockRevocationStore {
    async fn contains(&self, token: &str) -> Result<bool, DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::store("mock read failure"));
        }
        Ok(self.entries.read().await.contains_key(token))
    }

    async fn add(&self, entry: RevocationEntry) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            let remaining = self.writes_before_failure.load(Ordering::SeqCst);
            if remaining == 0 {
                return Err(DomainError::store("mock write failure"));
            }
            self.writes_before_failure.store(remaining - 1, Ordering::SeqCst);
        }

        let mut entries = self.entries.write().await;
        entries.entry(entry.token.clone()).or_insert(entry);
        Ok(())
    }

    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_purgeable(cutoff));
        Ok(before - entries.len())
    }
}
