//! Revocation store trait: the append-only list of tokens that must be refused.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::revocation::RevocationEntry;
use crate::errors::DomainError;

/// Storage contract for revoked tokens
///
/// Lookups are keyed by the raw token string. Implementations must give
/// read-your-writes per token and treat a repeated `add` of the same token
/// as success.
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Whether `token` has been revoked
    ///
    /// # Returns
    /// * `Ok(true)` - Token is on the list
    /// * `Ok(false)` - Token is not on the list
    /// * `Err(DomainError)` - The backend could not answer
    async fn contains(&self, token: &str) -> Result<bool, DomainError>;

    /// Append an entry
    ///
    /// Inserting a token that is already present is not an error.
    async fn add(&self, entry: RevocationEntry) -> Result<(), DomainError>;

    /// Delete entries whose token expired before `cutoff`
    ///
    /// Entries without a known expiry are kept.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of entries deleted
    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError>;
}
