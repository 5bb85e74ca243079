//! Authentication route handlers
//!
//! - Signup
//! - Login (issues an access and refresh token pair)
//! - Logout (revokes both tokens)

pub mod login;
pub mod logout;
pub mod signup;

pub use login::login;
pub use logout::logout;
pub use signup::signup;
