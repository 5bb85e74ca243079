//! Authorization gate
//!
//! Inspects the access token of every protected request, consults the
//! revocation list, rotates the access token through a refresh token when
//! needed, and binds the request to an active user.

#[allow(clippy::module_inception)]
mod gate;
mod outcome;


pub use gate::AuthorizationGate;
pub use outcome::{GateRejection, GateRequest};
