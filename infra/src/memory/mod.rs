//! Process-local adapters
//!
//! State lives only as long as the process. Used for development runs
//! without MySQL and by the API integration tests.

mod revocation_store;
mod user_directory;


pub use revocation_store::InMemoryRevocationStore;
pub use user_directory::InMemoryUserDirectory;
