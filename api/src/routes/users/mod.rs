pub mod list;
pub mod lookup;
pub mod me;

pub use list::list_users;
pub use lookup::find_by_username;
pub use me::{me, update_me};
