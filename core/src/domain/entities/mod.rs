//! Domain entities representing core business objects.

pub mod revocation;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use revocation::RevocationEntry;
pub use token::{AccessClaims, RefreshClaims, TokenPair, REFRESH_TOKEN_MARKER};
pub use user::{NewUser, ProfileUpdate, User, UserProfile, UserStatus};
