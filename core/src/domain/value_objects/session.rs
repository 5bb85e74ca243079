//! Results of a successful authorization or login.

use serde::Serialize;

use crate::domain::entities::token::{AccessClaims, TokenPair};
use crate::domain::entities::user::User;

/// Request-scoped outcome of a passed authorization check
///
/// Handed explicitly to downstream handlers; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedSession {
    /// The user bound to the access token
    pub user: User,

    /// Raw access token presented with the request
    pub access_token: String,

    /// Verified claims of that token
    pub claims: AccessClaims,
}

/// Result of a successful login
#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    pub user: User,
    pub tokens: TokenPair,
}
