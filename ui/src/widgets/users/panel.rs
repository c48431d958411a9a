//! Main panel for users management.

use egui::{Response, Ui};
use log::info;
use userdesk_business::{DeleteUserCompute, Route, UsersListCompute, UsersTableState, users};
use userdesk_states::{StateCtx, Time};

use super::alert::render_delete_alert;
use super::modal::show_delete_user_modal;
use super::pagination::render_pagination;
use super::table::{RowAction, render_users_table};

/// Per-frame bookkeeping of the users table.
///
/// Feeds the delete result and the clock to `UsersTableState`, then enqueues
/// the delete reset when the alert timer fires and the page fetch when the
/// page or page size changed.
pub fn drive_users_table(state_ctx: &mut StateCtx) {
    let now = state_ctx.state::<Time>().now();
    let delete = state_ctx
        .cached::<DeleteUserCompute>()
        .cloned()
        .unwrap_or_default();

    let table = state_ctx.state_mut::<UsersTableState>();
    if table.observe_delete(&delete, now) {
        info!("Delete settled with {:?}, showing alert", delete.status);
    }
    let reset = table.tick(now);
    let query = table.pending_query();

    if reset {
        users::reset_delete_user(state_ctx);
    }
    if let Some(query) = query {
        users::get_users(state_ctx, query.list_path());
    }
}

/// Displays the users panel: alert, toolbar with pagination, table and the
/// delete confirmation modal.
pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    drive_users_table(state_ctx);

    let list = state_ctx
        .cached::<UsersListCompute>()
        .cloned()
        .unwrap_or_default();

    let response = ui.vertical(|ui| {
        if list.is_loading() {
            ui.vertical_centered(|ui| {
                ui.spinner();
            });
            return;
        }

        render_delete_alert(state_ctx, ui);
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("➕ Add New User").clicked() {
                state_ctx.update::<Route>(|route| *route = Route::AddUser);
            }
            if list.total_docs > 0 {
                render_pagination(state_ctx, ui, list.total_docs);
            }
        });

        ui.add_space(8.0);

        match render_users_table(ui, list.users().unwrap_or_default()) {
            Some(RowAction::Edit(id)) => {
                state_ctx.update::<Route>(|route| *route = Route::EditUser(id));
            }
            Some(RowAction::Delete(id)) => {
                state_ctx.update::<UsersTableState>(|table| table.open_delete_modal(id));
            }
            None => {}
        }
    });

    show_delete_user_modal(state_ctx, ui);

    response.response
}
