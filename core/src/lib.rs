//! # SessionGate Core
//!
//! Domain layer of the SessionGate server: token claims and codec, the
//! revocation list and its failure policy, the per-request authorization
//! gate, and the signup/login/logout orchestration. Storage and password
//! hashing are reached through traits implemented by `sg_infra`.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    AccessClaims, AuthorizedSession, LoginOutcome, NewUser, ProfileUpdate, RefreshClaims,
    RevocationEntry, TokenPair, User, UserProfile, UserStatus, REFRESH_TOKEN_MARKER,
};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{RevocationStore, UserDirectory};
pub use services::{
    AuthorizationGate, CleanupResult, GateRejection, GateRequest, PasswordHasher,
    RevocationCleanupService, RevocationList, SessionService, TokenCodec, UserService,
};
