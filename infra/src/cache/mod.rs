//! Cache module for Redis-backed revocation
//!
//! Revoked tokens are kept as keys whose TTL follows the token's own expiry,
//! so Redis evicts them without a cleanup task.

pub mod redis_client;
pub mod revocation_store;


pub use redis_client::connect_with_retry;
pub use revocation_store::RedisRevocationStore;
