//! Password hashing seam

use crate::errors::DomainError;

/// One-way password hashing
///
/// Implemented in the infrastructure layer (bcrypt); tests use a
/// transparent fake.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain-text password for storage
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check a plain-text password against a stored hash
    ///
    /// # Returns
    /// * `Ok(false)` - The password does not match
    /// * `Err(DomainError)` - The stored hash is unreadable
    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}
