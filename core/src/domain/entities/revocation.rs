//! Revocation list entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A token that must be rejected regardless of signature or expiry
///
/// Entries are append-only. `expires_at` is the natural expiry of the
/// revoked token, used only to decide when the entry may be purged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationEntry {
    /// Email of the user who owned the token
    pub owner_email: String,

    /// Token as presented; stores keep only its digest
    pub token: String,

    /// When the token was revoked
    pub revoked_at: DateTime<Utc>,

    /// Natural expiry of the token, `None` when it could not be read
    pub expires_at: Option<DateTime<Utc>>,
}

impl RevocationEntry {
    /// Creates an entry revoked now
    pub fn new(
        owner_email: impl Into<String>,
        token: impl Into<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            owner_email: owner_email.into(),
            token: token.into(),
            revoked_at: Utc::now(),
            expires_at,
        }
    }

    /// Whether the entry can be dropped at `cutoff`
    ///
    /// Entries with an unknown expiry are never purgeable.
    pub fn is_purgeable(&self, cutoff: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(expiry) if expiry < cutoff)
    }
}
