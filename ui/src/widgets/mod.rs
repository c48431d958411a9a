pub mod users;

pub use users::{drive_users_table, users_panel};
