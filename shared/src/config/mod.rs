//! Configuration module with concern-specific sub-modules
//!
//! - `auth` - token signing secret and lifetimes
//! - `cache` - Redis connection settings
//! - `database` - MySQL connection pool settings
//! - `environment` - environment detection and logging configuration
//! - `revocation` - revocation store backend and cleanup policy
//! - `server` - HTTP bind address and payload limits

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod revocation;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use revocation::{CleanupConfig, RevocationBackend, RevocationConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
///
/// Built once at process start and handed to the services by reference or
/// inside an `Arc`. Nothing in the request path reads the environment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Redis configuration
    pub cache: CacheConfig,

    /// Token signing configuration
    pub jwt: JwtConfig,

    /// Revocation store configuration
    pub revocation: RevocationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            jwt: JwtConfig::default(),
            revocation: RevocationConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Values that are not set fall back to the defaults of the detected
    /// environment.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut logging = LoggingConfig::for_environment(environment);
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            jwt: JwtConfig::from_env(),
            revocation: RevocationConfig::from_env(),
            logging,
        }
    }

    /// Reject configurations that must never reach production
    pub fn validate(&self) -> Result<(), String> {
        if self.environment.is_production() && self.jwt.is_using_default_secret() {
            return Err("JWT_SECRET must be set in production".to_string());
        }
        if self.jwt.access_token_expiry <= 0 || self.jwt.refresh_token_expiry <= 0 {
            return Err("token lifetimes must be positive".to_string());
        }
        if self.environment.is_production() && self.revocation.backend == RevocationBackend::Memory {
            return Err("the in-memory revocation store cannot be used in production".to_string());
        }
        Ok(())
    }
}
