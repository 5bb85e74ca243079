//! Account queries and self-service profile edits for authorized users

mod service;

#[cfg(test)]
mod tests;

pub use service::UserService;
