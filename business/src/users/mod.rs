//! Users domain module.
//!
//! This module is the single home for:
//! - the users slice: list and delete computes, their inputs and commands
//! - the view state of the users table
//! - the API helpers and wire types for `/admin/users`
//!
//! UI code reads via `ctx.cached::<T>()` and triggers changes by setting an
//! input and enqueueing the matching command.

pub mod api;
pub mod delete_user_compute;
pub mod list_users_compute;
pub mod model;
pub mod query;
pub mod table_state;

use userdesk_states::StateCtx;

pub use delete_user_compute::{
    DeleteUserCommand, DeleteUserCompute, DeleteUserInput, ResetDeleteUserCommand,
};
pub use list_users_compute::{GetUsersCommand, GetUsersInput, RequestStatus, UsersListCompute};
pub use model::{ApiMessage, ListUsersResponse, User};
pub use query::{PageQuery, total_pages};
pub use table_state::{
    ALERT_DURATION, AlertSeverity, AlertTimer, PAGE_SIZE_OPTIONS, UsersTableState,
};

/// Registers the users slice: computes, inputs and commands.
pub fn install_users_slice(ctx: &mut StateCtx) {
    ctx.add_state(GetUsersInput::default());
    ctx.add_state(DeleteUserInput::default());
    ctx.record_compute(UsersListCompute::default());
    ctx.record_compute(DeleteUserCompute::default());
    ctx.record_command(GetUsersCommand);
    ctx.record_command(DeleteUserCommand);
    ctx.record_command(ResetDeleteUserCommand);
}

/// Sets the list input and queues the fetch.
pub fn get_users(ctx: &mut StateCtx, url: String) {
    ctx.update::<GetUsersInput>(|input| input.url = Some(url));
    ctx.enqueue_command::<GetUsersCommand>();
}

/// Sets the delete input and queues the delete.
pub fn delete_user(ctx: &mut StateCtx, id: ustr::Ustr) {
    ctx.update::<DeleteUserInput>(|input| input.id = Some(id));
    ctx.enqueue_command::<DeleteUserCommand>();
}

/// Queues the reset of the delete state.
pub fn reset_delete_user(ctx: &mut StateCtx) {
    ctx.enqueue_command::<ResetDeleteUserCommand>();
}
