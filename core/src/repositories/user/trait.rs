//! User directory trait: lookup, creation and update of accounts.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for user accounts
///
/// Lookups return the record whatever its status; deciding what an
/// inactive account may do is left to the caller.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a user by email, the identity claim of access tokens
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that email
    /// * `Err(DomainError)` - Backend failure
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by username, used by login
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by phone number
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError)` - Insert failed (e.g. a unique key collided)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Overwrite the stored record with the same id
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::NotFound)` - No user with that id
    /// * `Err(DomainError)` - Write failed
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Every user except the one with `email`
    async fn find_all_except(&self, email: &str) -> Result<Vec<User>, DomainError>;
}
