//! # Infrastructure Layer
//!
//! Concrete adapters behind the traits of `sg_core`:
//!
//! - **Database**: MySQL revocation store and user directory using SQLx
//! - **Cache**: Redis revocation store with per-key expiry
//! - **Memory**: process-local stores for development and tests
//! - **Services**: bcrypt password hashing
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `redis-cache`: Enable Redis support (default)

use sg_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Cache module - Redis revocation store
#[cfg(feature = "redis-cache")]
pub mod cache;

/// In-memory adapters
pub mod memory;

/// Services module - Infrastructure service implementations
pub mod services;

mod token_hash;

pub use memory::{InMemoryRevocationStore, InMemoryUserDirectory};
pub use services::password::BcryptPasswordHasher;
pub use token_hash::hash_token;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[cfg(feature = "mysql")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[cfg(feature = "redis-cache")]
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::store(err.to_string())
    }
}
