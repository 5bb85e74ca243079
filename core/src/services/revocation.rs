//! Failure policy around a revocation store
//!
//! The ordinary access-token check fails open: if the store cannot answer,
//! the token is treated as not revoked. The refresh-path check and every
//! write fail closed.

use std::sync::Arc;

use tracing::warn;

use crate::domain::entities::revocation::RevocationEntry;
use crate::errors::DomainError;
use crate::repositories::RevocationStore;

/// Revocation list with its read and write policies applied
pub struct RevocationList<S: RevocationStore + ?Sized> {
    store: Arc<S>,
}

impl<S: RevocationStore + ?Sized> Clone for RevocationList<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: RevocationStore + ?Sized> RevocationList<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fail-open lookup: a backend error counts as "not revoked"
    pub async fn is_revoked(&self, token: &str) -> bool {
        match self.store.contains(token).await {
            Ok(revoked) => revoked,
            Err(e) => {
                warn!(error = %e, "revocation lookup failed, treating token as not revoked");
                false
            }
        }
    }

    /// Fail-closed lookup: a backend error is returned to the caller
    pub async fn is_revoked_strict(&self, token: &str) -> Result<bool, DomainError> {
        self.store.contains(token).await
    }

    /// Append an entry; errors always propagate
    pub async fn revoke(&self, entry: RevocationEntry) -> Result<(), DomainError> {
        self.store.add(entry).await
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}
