mod auth_state;
mod config;
pub mod root_state;
pub mod route;
pub mod users;

#[cfg(test)]
mod test_utils;

pub use auth_state::{AuthState, AuthStatus};
pub use config::{BusinessConfig, ConfigError};
pub use root_state::{RootSnapshot, RootState, UsersSlice, install_root_state};
pub use route::Route;
pub use users::{
    AlertSeverity, DeleteUserCommand, DeleteUserCompute, DeleteUserInput, GetUsersCommand,
    GetUsersInput, PageQuery, RequestStatus, ResetDeleteUserCommand, User, UsersListCompute,
    UsersTableState,
};
