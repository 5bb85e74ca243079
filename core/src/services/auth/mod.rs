//! Session service module
//!
//! - `service` - signup, login and logout
//! - `password` - password hashing seam implemented by the infrastructure layer

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::PasswordHasher;
pub use service::SessionService;
