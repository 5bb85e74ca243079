//! Mapping of domain outcomes onto the JSON response envelope

pub mod error;
pub mod response;

pub use error::{handle_domain_error, handle_rejection};
pub use response::{envelope, error_envelope, respond};
