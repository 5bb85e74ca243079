//! Business services containing domain logic and use cases.

pub mod auth;
pub mod gate;
pub mod revocation;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use auth::{PasswordHasher, SessionService};
pub use gate::{AuthorizationGate, GateRejection, GateRequest};
pub use revocation::RevocationList;
pub use token::{CleanupResult, RevocationCleanupService, TokenCodec};
pub use user::UserService;
