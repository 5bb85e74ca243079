//! Signup, login and logout orchestration

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::entities::revocation::RevocationEntry;
use crate::domain::entities::token::RefreshClaims;
use crate::domain::entities::user::{NewUser, User};
use crate::domain::value_objects::session::{AuthorizedSession, LoginOutcome};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{RevocationStore, UserDirectory};
use crate::services::revocation::RevocationList;
use crate::services::token::TokenCodec;

use super::password::PasswordHasher;

/// Account and session lifecycle around the authorization gate
pub struct SessionService<S, U>
where
    S: RevocationStore + ?Sized,
    U: UserDirectory + ?Sized,
{
    /// Account storage
    users: Arc<U>,
    /// Revocation list used by logout
    revocations: RevocationList<S>,
    /// Shared token codec
    codec: Arc<TokenCodec>,
    hasher: Arc<dyn PasswordHasher>,
}

impl<S, U> SessionService<S, U>
where
    S: RevocationStore + ?Sized,
    U: UserDirectory + ?Sized,
{
    pub fn new(
        users: Arc<U>,
        revocations: RevocationList<S>,
        codec: Arc<TokenCodec>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users,
            revocations,
            codec,
            hasher,
        }
    }

    /// Register a new, active account
    ///
    /// Email, username and phone must each be unused; the first collision
    /// is reported as `AuthError::AlreadyInUse`.
    pub async fn signup(&self, new_user: NewUser) -> DomainResult<User> {
        if self.users.find_by_email(&new_user.email).await?.is_some() {
            return Err(already_in_use("email"));
        }
        if self.users.find_by_username(&new_user.username).await?.is_some() {
            return Err(already_in_use("username"));
        }
        if self.users.find_by_phone(&new_user.phone).await?.is_some() {
            return Err(already_in_use("phone"));
        }

        let password_hash = self.hasher.hash(&new_user.password)?;
        let user = self.users.create(User::new(new_user, password_hash)).await?;

        info!(user_id = %user.id, "user signed up");
        Ok(user)
    }

    /// Check credentials and issue a token pair
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<LoginOutcome> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !user.is_active() {
            return Err(AuthError::UserInactive.into());
        }

        if !self.hasher.verify(password, &user.password_hash)? {
            warn!(user_id = %user.id, "password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        let tokens = self.codec.issue_pair(&user.email)?;

        info!(user_id = %user.id, "user logged in");
        Ok(LoginOutcome { user, tokens })
    }

    /// Revoke the session's access token, then the supplied refresh token
    ///
    /// The two inserts are not atomic: if the second fails the access
    /// token stays revoked.
    pub async fn logout(
        &self,
        session: &AuthorizedSession,
        refresh_token: Option<&str>,
    ) -> DomainResult<()> {
        let refresh_token = refresh_token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingRefreshToken)?;

        let owner = &session.user.email;

        let access_entry = RevocationEntry::new(
            owner.as_str(),
            session.access_token.as_str(),
            session.claims.expires_at(),
        );
        self.revocations.revoke(access_entry).await.map_err(|e| {
            error!(error = %e, "can't revoke access token");
            DomainError::from(AuthError::AccessRevocationFailed)
        })?;

        // Expiry is only bookkeeping for cleanup; an unreadable token is
        // still revoked, just never purged.
        let refresh_expiry = self
            .codec
            .parse::<RefreshClaims>(refresh_token)
            .ok()
            .and_then(|claims| claims.expires_at());
        let refresh_entry = RevocationEntry::new(owner.as_str(), refresh_token, refresh_expiry);
        self.revocations.revoke(refresh_entry).await.map_err(|e| {
            error!(error = %e, "can't revoke refresh token");
            DomainError::from(AuthError::RefreshRevocationFailed)
        })?;

        info!(user_id = %session.user.id, "user logged out");
        Ok(())
    }
}

fn already_in_use(field: &str) -> DomainError {
    AuthError::AlreadyInUse {
        field: field.to_string(),
    }
    .into()
}
