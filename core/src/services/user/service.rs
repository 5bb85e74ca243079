use std::sync::Arc;

use tracing::info;

use crate::domain::entities::user::{ProfileUpdate, User};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserDirectory;

pub struct UserService<U: UserDirectory + ?Sized> {
    users: Arc<U>,
}

impl<U: UserDirectory + ?Sized> UserService<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Apply a profile edit to the caller's own account
    ///
    /// The new phone number must not belong to another account.
    pub async fn update_profile(&self, current: &User, update: ProfileUpdate) -> DomainResult<User> {
        if let Some(owner) = self.users.find_by_phone(&update.phone).await? {
            if owner.id != current.id {
                return Err(AuthError::AlreadyInUse {
                    field: "phone".to_string(),
                }
                .into());
            }
        }

        let mut user = current.clone();
        user.apply_update(update);
        let user = self.users.update(user).await?;

        info!(user_id = %user.id, "profile updated");
        Ok(user)
    }

    /// Every account other than the caller's
    pub async fn list_others(&self, current: &User) -> DomainResult<Vec<User>> {
        self.users.find_all_except(&current.email).await
    }

    /// Look up an active account by username
    pub async fn find_by_username(&self, username: &str) -> DomainResult<User> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "user".to_string(),
            })?;

        if !user.is_active() {
            return Err(AuthError::UserInactive.into());
        }
        Ok(user)
    }
}
