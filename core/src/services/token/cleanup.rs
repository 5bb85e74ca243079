//! Periodic purge of revocation entries whose token has expired on its own
//!
//! A revoked token stops mattering once its natural expiry has passed: the
//! gate would refuse it anyway. Entries are kept for a grace period past
//! that point and then deleted.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{error, info, warn};

use sg_shared::config::CleanupConfig;

use crate::errors::DomainError;
use crate::repositories::RevocationStore;

/// Service for cleaning up stale revocation entries
pub struct RevocationCleanupService<S: RevocationStore + ?Sized + 'static> {
    store: Arc<S>,
    config: CleanupConfig,
}

impl<S: RevocationStore + ?Sized + 'static> RevocationCleanupService<S> {
    pub fn new(store: Arc<S>, config: CleanupConfig) -> Self {
        Self { store, config }
    }

    /// Run a single cleanup cycle
    pub async fn run_cleanup(&self) -> Result<CleanupResult, DomainError> {
        if !self.config.enabled {
            return Ok(CleanupResult::default());
        }

        let cutoff = Utc::now() - Duration::seconds(self.config.grace_period_seconds);
        let entries_purged = self.store.purge_expired(cutoff).await?;

        info!(entries_purged, %cutoff, "Revocation cleanup completed");

        Ok(CleanupResult { entries_purged })
    }

    /// Start the cleanup service as a background task
    ///
    /// Returns `None` when cleanup is disabled.
    pub fn start_background_task(self: Arc<Self>) -> Option<tokio::task::JoinHandle<()>> {
        if !self.config.enabled {
            warn!("Revocation cleanup service is disabled");
            return None;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds.max(1));

        Some(tokio::spawn(async move {
            info!(
                "Revocation cleanup service started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_cleanup().await {
                    error!("Revocation cleanup cycle failed: {}", e);
                }
            }
        }))
    }
}

/// Result of a cleanup operation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupResult {
    /// Number of revocation entries deleted
    pub entries_purged: usize,
}
