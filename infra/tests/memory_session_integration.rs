//! Session lifecycle against the in-memory adapters and real bcrypt hashing

use std::sync::Arc;

use sg_core::{
    AuthorizationGate, GateRejection, GateRequest, NewUser, RevocationCleanupService,
    RevocationList, SessionService, TokenCodec,
};
use sg_infra::{BcryptPasswordHasher, InMemoryRevocationStore, InMemoryUserDirectory};
use sg_shared::{CleanupConfig, JwtConfig};

struct Harness {
    store: Arc<InMemoryRevocationStore>,
    sessions: SessionService<InMemoryRevocationStore, InMemoryUserDirectory>,
    gate: AuthorizationGate<InMemoryRevocationStore, InMemoryUserDirectory>,
}

fn harness() -> Harness {
    let store = Arc::new(InMemoryRevocationStore::new());
    let users = Arc::new(InMemoryUserDirectory::new());
    let codec = Arc::new(TokenCodec::new(&JwtConfig::new("integration-secret")));
    let revocations = RevocationList::new(store.clone());

    Harness {
        store: store.clone(),
        sessions: SessionService::new(
            users.clone(),
            revocations.clone(),
            codec.clone(),
            Arc::new(BcryptPasswordHasher::with_cost(4)),
        ),
        gate: AuthorizationGate::new(codec, revocations, users),
    }
}

fn new_user() -> NewUser {
    NewUser {
        email: "grace@example.com".to_string(),
        username: "grace".to_string(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        phone: "5550100".to_string(),
        password: "cobol-1959".to_string(),
    }
}

#[tokio::test]
async fn test_signup_login_logout() {
    let h = harness();
    h.sessions.signup(new_user()).await.unwrap();

    let outcome = h.sessions.login("grace", "cobol-1959").await.unwrap();
    let tokens = outcome.tokens;

    let session = h
        .gate
        .authorize(GateRequest::bearer(tokens.access_token.clone()))
        .await
        .unwrap();
    assert_eq!(session.user.email, "grace@example.com");

    h.sessions
        .logout(&session, Some(tokens.refresh_token.as_str()))
        .await
        .unwrap();
    assert_eq!(h.store.len().await, 2);

    // Revoked access token with a revoked refresh token cannot recover
    let rejection = h
        .gate
        .authorize(
            GateRequest::bearer(tokens.access_token.clone())
                .with_refresh_token(tokens.refresh_token.clone()),
        )
        .await
        .unwrap_err();
    assert_eq!(rejection, GateRejection::RefreshTokenInvalid);
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let h = harness();
    h.sessions.signup(new_user()).await.unwrap();

    assert!(h.sessions.login("grace", "fortran").await.is_err());
}

#[tokio::test]
async fn test_cleanup_keeps_live_revocations() {
    let h = harness();
    h.sessions.signup(new_user()).await.unwrap();
    let tokens = h.sessions.login("grace", "cobol-1959").await.unwrap().tokens;
    let session = h
        .gate
        .authorize(GateRequest::bearer(tokens.access_token.clone()))
        .await
        .unwrap();
    h.sessions
        .logout(&session, Some(tokens.refresh_token.as_str()))
        .await
        .unwrap();

    let cleanup = RevocationCleanupService::new(h.store.clone(), CleanupConfig::default());
    let result = cleanup.run_cleanup().await.unwrap();

    assert_eq!(result.entries_purged, 0);
    assert_eq!(h.store.len().await, 2);
}
