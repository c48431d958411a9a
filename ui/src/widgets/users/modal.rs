//! Delete confirmation modal.

use egui::{Align2, Button, Id, RichText, Ui, Window};
use userdesk_business::{DeleteUserCompute, UsersTableState, users};
use userdesk_states::StateCtx;

use crate::utils::colors::{COLOR_AMBER, COLOR_RED};

/// Shows the confirmation modal while a delete target is bound.
///
/// Both buttons are disabled while the delete is in flight. The modal itself is
/// closed by the table state once the delete settles.
pub fn show_delete_user_modal(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(target) = state_ctx.state::<UsersTableState>().delete_target() else {
        return;
    };
    let pending = state_ctx
        .cached::<DeleteUserCompute>()
        .is_some_and(DeleteUserCompute::is_pending);

    let mut open = true;
    let mut confirmed = false;
    let mut cancelled = false;

    Window::new("Delete User")
        .id(Id::new("delete_user_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.colored_label(COLOR_AMBER, "⚠️ Warning");
            ui.add_space(4.0);
            ui.label(format!("Are you sure you want to delete user '{target}'?"));
            ui.label("This action cannot be undone.");

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!pending, Button::new(RichText::new("Confirm").color(COLOR_RED)))
                    .clicked()
                {
                    confirmed = true;
                }

                if ui.add_enabled(!pending, Button::new("Cancel")).clicked() {
                    cancelled = true;
                }

                if pending {
                    ui.spinner();
                    ui.label("Deleting user...");
                }
            });
        });

    if confirmed && let Some(id) = state_ctx.state::<UsersTableState>().confirm_delete() {
        users::delete_user(state_ctx, id);
    }

    if cancelled || !open {
        state_ctx.update::<UsersTableState>(UsersTableState::close_delete_modal);
    }
}
