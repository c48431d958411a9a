//! Root state composer.
//!
//! Joins the auth slice and the users slice into one addressable tree. There is
//! no logic here beyond registration and borrowing the parts back out.

use serde::Serialize;
use userdesk_states::StateCtx;

use crate::AuthState;
use crate::users::{DeleteUserCompute, UsersListCompute, install_users_slice};

/// Registers every slice of the root tree. An `AuthState` registered earlier
/// is kept.
pub fn install_root_state(ctx: &mut StateCtx) {
    if !ctx.has_state::<AuthState>() {
        ctx.add_state(AuthState::default());
    }
    install_users_slice(ctx);
}

#[derive(Debug, Clone, Copy)]
pub struct UsersSlice<'a> {
    pub list: &'a UsersListCompute,
    pub delete: &'a DeleteUserCompute,
}

/// Borrowed view of the root tree: `{ auth, users }`.
#[derive(Debug, Clone, Copy)]
pub struct RootState<'a> {
    pub auth: &'a AuthState,
    pub users: UsersSlice<'a>,
}

impl<'a> RootState<'a> {
    /// # Panics
    /// Panics when `install_root_state` was not called on `ctx`.
    pub fn select(ctx: &'a StateCtx) -> Self {
        Self {
            auth: ctx.state::<AuthState>(),
            users: UsersSlice {
                list: ctx.compute::<UsersListCompute>(),
                delete: ctx.compute::<DeleteUserCompute>(),
            },
        }
    }

    pub fn to_snapshot(&self) -> RootSnapshot {
        RootSnapshot {
            auth: self.auth.clone(),
            users: UsersSnapshot {
                list: self.users.list.clone(),
                delete: self.users.delete.clone(),
            },
        }
    }
}

/// Owned copy of the root tree, serializable for logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootSnapshot {
    pub auth: AuthState,
    pub users: UsersSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsersSnapshot {
    pub list: UsersListCompute,
    pub delete: DeleteUserCompute,
}
