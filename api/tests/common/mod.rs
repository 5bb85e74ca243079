//! Shared setup for the HTTP tests: in-memory adapters behind the real services

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use sg_api::app::AppState;
use sg_core::{
    AccessClaims, AuthorizationGate, DomainError, NewUser, PasswordHasher, RefreshClaims,
    RevocationEntry, RevocationList, RevocationStore, SessionService, TokenCodec, User,
    UserDirectory, UserService,
};
use sg_infra::{BcryptPasswordHasher, InMemoryRevocationStore, InMemoryUserDirectory};
use sg_shared::JwtConfig;

pub const SECRET: &str = "api-test-secret";
pub const PASSWORD: &str = "analytical-engine";

/// In-memory store whose reads and writes can be made to fail
#[derive(Default)]
pub struct FlakyRevocationStore {
    inner: InMemoryRevocationStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FlakyRevocationStore {
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.inner.len().await
    }
}

#[async_trait]
impl RevocationStore for FlakyRevocationStore {
    async fn contains(&self, token: &str) -> Result<bool, DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::store("revocation store unavailable"));
        }
        self.inner.contains(token).await
    }

    async fn add(&self, entry: RevocationEntry) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::store("revocation store unavailable"));
        }
        self.inner.add(entry).await
    }

    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError> {
        self.inner.purge_expired(cutoff).await
    }
}

pub type TestState = AppState<FlakyRevocationStore, InMemoryUserDirectory>;

pub struct TestContext {
    pub codec: Arc<TokenCodec>,
    pub store: Arc<FlakyRevocationStore>,
    pub users: Arc<InMemoryUserDirectory>,
    pub hasher: Arc<BcryptPasswordHasher>,
    pub state: web::Data<TestState>,
}

impl TestContext {
    pub fn new() -> Self {
        let codec = Arc::new(TokenCodec::new(&JwtConfig::new(SECRET)));
        let store = Arc::new(FlakyRevocationStore::default());
        let users = Arc::new(InMemoryUserDirectory::new());
        let hasher = Arc::new(BcryptPasswordHasher::with_cost(4));
        let revocations = RevocationList::new(Arc::clone(&store));

        let gate = Arc::new(AuthorizationGate::new(
            Arc::clone(&codec),
            revocations.clone(),
            Arc::clone(&users),
        ));
        let sessions = Arc::new(SessionService::new(
            Arc::clone(&users),
            revocations,
            Arc::clone(&codec),
            Arc::clone(&hasher) as Arc<dyn PasswordHasher>,
        ));

        let accounts = Arc::new(UserService::new(Arc::clone(&users)));

        Self {
            codec,
            store,
            users,
            hasher,
            state: web::Data::new(AppState::new(gate, sessions, accounts)),
        }
    }

    /// Store a user directly, bypassing signup
    pub async fn seed_user(&self, username: &str, active: bool) -> User {
        let password_hash = self.hasher.hash(PASSWORD).unwrap();
        let mut user = User::new(new_user(username), password_hash);
        if !active {
            user.deactivate();
        }
        self.users.create(user).await.unwrap()
    }

    pub fn access_token(&self, email: &str, exp: i64) -> String {
        self.codec.issue(&AccessClaims::new(email, exp)).unwrap()
    }

    pub fn refresh_token(&self, exp: i64) -> String {
        self.codec.issue(&RefreshClaims::new(exp)).unwrap()
    }
}

pub fn new_user(username: &str) -> NewUser {
    NewUser {
        email: format!("{}@example.com", username),
        username: username.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        phone: format!("+1555{:07}", phone_suffix(username)),
        password: PASSWORD.to_string(),
    }
}

fn phone_suffix(username: &str) -> u32 {
    username
        .bytes()
        .fold(7u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32))
        % 10_000_000
}

pub fn now() -> i64 {
    Utc::now().timestamp()
}
