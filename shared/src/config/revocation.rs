//! Revocation store configuration

use serde::{Deserialize, Serialize};

/// Which adapter backs the revocation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevocationBackend {
    /// MySQL `revoked_tokens` table
    #[default]
    Mysql,
    /// Redis keys with a TTL equal to the token's remaining lifetime
    Redis,
    /// Process-local map, development and tests only
    Memory,
}

impl std::str::FromStr for RevocationBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(RevocationBackend::Mysql),
            "redis" => Ok(RevocationBackend::Redis),
            "memory" | "in-memory" => Ok(RevocationBackend::Memory),
            _ => Err(format!("Invalid revocation backend: {}", s)),
        }
    }
}

/// Periodic purge of revocation entries whose token has naturally expired
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CleanupConfig {
    /// Whether to run the background purge task
    pub enabled: bool,
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// How long past natural expiry an entry is kept (in seconds)
    pub grace_period_seconds: i64,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_seconds: 3600, // Run every hour
            grace_period_seconds: 86400, // Keep expired entries for a day
        }
    }
}

/// Revocation configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RevocationConfig {
    /// Store adapter
    #[serde(default)]
    pub backend: RevocationBackend,

    /// Cleanup policy
    #[serde(default)]
    pub cleanup: CleanupConfig,
}

impl RevocationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let backend = std::env::var("REVOCATION_STORE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        let defaults = CleanupConfig::default();
        let cleanup = CleanupConfig {
            enabled: std::env::var("REVOCATION_CLEANUP_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.enabled),
            interval_seconds: std::env::var("REVOCATION_CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.interval_seconds),
            grace_period_seconds: std::env::var("REVOCATION_CLEANUP_GRACE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.grace_period_seconds),
        };

        Self { backend, cleanup }
    }
}
