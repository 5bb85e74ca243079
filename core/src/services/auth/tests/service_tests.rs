//! Unit tests for the session service

use std::sync::Arc;

use chrono::Utc;

use sg_shared::config::JwtConfig;

use crate::domain::entities::token::AccessClaims;
use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError};
use crate::repositories::{MockRevocationStore, MockUserDirectory, RevocationStore, UserDirectory};
use crate::services::auth::{PasswordHasher, SessionService};
use crate::services::gate::{AuthorizationGate, GateRejection, GateRequest};
use crate::services::revocation::RevocationList;
use crate::services::token::TokenCodec;

use super::mocks::{BrokenHasher, PlainHasher};

struct Fixture {
    codec: Arc<TokenCodec>,
    store: Arc<MockRevocationStore>,
    users: Arc<MockUserDirectory>,
    service: SessionService<MockRevocationStore, MockUserDirectory>,
}

fn new_user() -> NewUser {
    NewUser {
        email: "ada@example.com".to_string(),
        username: "ada".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        phone: "+15550100".to_string(),
        password: "correct horse".to_string(),
    }
}

fn stored_user() -> User {
    User::new(new_user(), "plain$correct horse".to_string())
}

async fn fixture_with(users: Vec<User>, hasher: Arc<dyn PasswordHasher>) -> Fixture {
    let codec = Arc::new(TokenCodec::new(&JwtConfig::new("session-test-secret")));
    let store = Arc::new(MockRevocationStore::new());
    let users = Arc::new(MockUserDirectory::with_users(users).await);
    let service = SessionService::new(
        users.clone(),
        RevocationList::new(store.clone()),
        codec.clone(),
        hasher,
    );
    Fixture {
        codec,
        store,
        users,
        service,
    }
}

async fn fixture() -> Fixture {
    fixture_with(vec![stored_user()], Arc::new(PlainHasher)).await
}

impl Fixture {
    fn gate(&self) -> AuthorizationGate<MockRevocationStore, MockUserDirectory> {
        AuthorizationGate::new(
            self.codec.clone(),
            RevocationList::new(self.store.clone()),
            self.users.clone(),
        )
    }
}

// ============================================================================
// Signup
// ============================================================================

#[tokio::test]
async fn test_signup_creates_active_user_with_hashed_password() {
    let f = fixture_with(vec![], Arc::new(PlainHasher)).await;

    let user = f.service.signup(new_user()).await.unwrap();

    assert!(user.is_active());
    assert_eq!(user.password_hash, "plain$correct horse");
    let stored = f.users.find_by_username("ada").await.unwrap().unwrap();
    assert_eq!(stored.id, user.id);
}

#[tokio::test]
async fn test_signup_rejects_taken_fields_in_order() {
    let f = fixture().await;

    let err = f.service.signup(new_user()).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::AlreadyInUse { ref field }) if field == "email"
    ));

    let err = f
        .service
        .signup(NewUser {
            email: "other@example.com".to_string(),
            ..new_user()
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "username: already in use");

    let err = f
        .service
        .signup(NewUser {
            email: "other@example.com".to_string(),
            username: "other".to_string(),
            ..new_user()
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "phone: already in use");

    assert_eq!(f.users.len().await, 1);
}

#[tokio::test]
async fn test_signup_hasher_failure_is_internal() {
    let f = fixture_with(vec![], Arc::new(BrokenHasher)).await;

    let err = f.service.signup(new_user()).await.unwrap_err();

    assert!(matches!(err, DomainError::Internal { .. }));
    assert_eq!(f.users.len().await, 0);
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_issues_token_pair() {
    let f = fixture().await;

    let outcome = f.service.login("ada", "correct horse").await.unwrap();

    assert_eq!(outcome.user.email, "ada@example.com");
    let claims: AccessClaims = f.codec.parse(&outcome.tokens.access_token).unwrap();
    assert_eq!(claims.user_email, "ada@example.com");
    assert!(claims.is_live_at(Utc::now().timestamp()));
    assert_eq!(outcome.tokens.access_expires_in, 3600);

    let session = f
        .gate()
        .authorize(GateRequest::bearer(&outcome.tokens.access_token))
        .await
        .unwrap();
    assert_eq!(session.user.id, outcome.user.id);
}

#[tokio::test]
async fn test_login_unknown_user() {
    let f = fixture().await;
    let err = f.service.login("grace", "whatever").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
}

#[tokio::test]
async fn test_login_inactive_user() {
    let mut user = stored_user();
    user.deactivate();
    let f = fixture_with(vec![user], Arc::new(PlainHasher)).await;

    let err = f.service.login("ada", "correct horse").await.unwrap_err();

    assert!(matches!(err, DomainError::Auth(AuthError::UserInactive)));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let f = fixture().await;
    let err = f.service.login("ada", "battery staple").await.unwrap_err();
    assert_eq!(err.to_string(), "username or password incorrect");
}

#[tokio::test]
async fn test_login_directory_failure_propagates() {
    let f = fixture().await;
    f.users.set_should_fail(true);

    let err = f.service.login("ada", "correct horse").await.unwrap_err();

    assert!(matches!(err, DomainError::Store { .. }));
}

// ============================================================================
// Logout
// ============================================================================

#[tokio::test]
async fn test_logout_revokes_both_tokens() {
    let f = fixture().await;
    let outcome = f.service.login("ada", "correct horse").await.unwrap();
    let gate = f.gate();
    let session = gate
        .authorize(GateRequest::bearer(&outcome.tokens.access_token))
        .await
        .unwrap();

    f.service
        .logout(&session, Some(outcome.tokens.refresh_token.as_str()))
        .await
        .unwrap();

    assert_eq!(f.store.len().await, 2);
    let access_entry = f.store.entry(&outcome.tokens.access_token).await.unwrap();
    assert_eq!(access_entry.owner_email, "ada@example.com");
    assert_eq!(access_entry.expires_at, session.claims.expires_at());
    let refresh_entry = f.store.entry(&outcome.tokens.refresh_token).await.unwrap();
    assert!(refresh_entry.expires_at.is_some());

    // The access token now goes down the refresh path, where the revoked
    // refresh token is refused
    let result = gate
        .authorize(
            GateRequest::bearer(&outcome.tokens.access_token)
                .with_refresh_token(&outcome.tokens.refresh_token),
        )
        .await;
    assert_eq!(result.unwrap_err(), GateRejection::RefreshTokenInvalid);

    let result = gate
        .authorize(GateRequest::bearer(&outcome.tokens.access_token))
        .await;
    assert_eq!(result.unwrap_err(), GateRejection::Unauthorized);
}

#[tokio::test]
async fn test_logout_without_refresh_token() {
    let f = fixture().await;
    let outcome = f.service.login("ada", "correct horse").await.unwrap();
    let session = f
        .gate()
        .authorize(GateRequest::bearer(&outcome.tokens.access_token))
        .await
        .unwrap();

    for refresh in [None, Some("")] {
        let err = f.service.logout(&session, refresh).await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::MissingRefreshToken)));
    }
    assert_eq!(f.store.len().await, 0);
}

#[tokio::test]
async fn test_logout_access_write_failure() {
    let f = fixture().await;
    let outcome = f.service.login("ada", "correct horse").await.unwrap();
    let session = f
        .gate()
        .authorize(GateRequest::bearer(&outcome.tokens.access_token))
        .await
        .unwrap();
    f.store.fail_writes();

    let err = f
        .service
        .logout(&session, Some(outcome.tokens.refresh_token.as_str()))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Auth(AuthError::AccessRevocationFailed)));
    assert_eq!(err.to_string(), "couldn't revoke access token");
    assert_eq!(f.store.len().await, 0);
}

#[tokio::test]
async fn test_logout_refresh_write_failure_keeps_access_revoked() {
    let f = fixture().await;
    let outcome = f.service.login("ada", "correct horse").await.unwrap();
    let session = f
        .gate()
        .authorize(GateRequest::bearer(&outcome.tokens.access_token))
        .await
        .unwrap();
    f.store.fail_writes_after(1);

    let err = f
        .service
        .logout(&session, Some(outcome.tokens.refresh_token.as_str()))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Auth(AuthError::RefreshRevocationFailed)));
    assert!(f.store.contains(&outcome.tokens.access_token).await.unwrap());
    assert!(!f.store.contains(&outcome.tokens.refresh_token).await.unwrap());
}

#[tokio::test]
async fn test_logout_accepts_unreadable_refresh_token() {
    let f = fixture().await;
    let outcome = f.service.login("ada", "correct horse").await.unwrap();
    let session = f
        .gate()
        .authorize(GateRequest::bearer(&outcome.tokens.access_token))
        .await
        .unwrap();

    f.service.logout(&session, Some("not-a-jwt")).await.unwrap();

    let entry = f.store.entry("not-a-jwt").await.unwrap();
    assert_eq!(entry.expires_at, None);
}
