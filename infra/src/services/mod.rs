//! Infrastructure service implementations

pub mod password;
