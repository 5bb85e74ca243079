//! Token module
//!
//! - `codec` - HS256 signing and verification of access and refresh tokens
//! - `cleanup` - background purge of revocation entries past their expiry

mod cleanup;
mod codec;


pub use cleanup::{CleanupResult, RevocationCleanupService};
pub use codec::TokenCodec;
