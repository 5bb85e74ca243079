//! MySQL implementations of the core storage traits

mod revocation_store;
mod user_directory;

pub use revocation_store::MySqlRevocationStore;
pub use user_directory::MySqlUserDirectory;
