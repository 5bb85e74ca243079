//! Domain layer containing business entities and value objects.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::{
    AccessClaims, NewUser, ProfileUpdate, RefreshClaims, RevocationEntry, TokenPair, User,
    UserProfile, UserStatus, REFRESH_TOKEN_MARKER,
};
pub use value_objects::{AuthorizedSession, LoginOutcome};
