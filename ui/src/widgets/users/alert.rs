//! Alert shown after a delete settles.

use egui::{Align, Color32, Frame, Layout, Margin, RichText, Ui};
use userdesk_business::{AlertSeverity, DeleteUserCompute, UsersTableState};
use userdesk_states::StateCtx;

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// Renders the delete alert while it is visible. The close button only hides
/// it; the alert timer keeps running.
pub fn render_delete_alert(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let table = state_ctx.state::<UsersTableState>();
    if !table.is_alert_visible() {
        return;
    }

    let (fill, icon) = match table.alert_severity() {
        AlertSeverity::Success => (COLOR_GREEN, "✔"),
        AlertSeverity::Error => (COLOR_RED, "⚠"),
    };
    let message = state_ctx
        .cached::<DeleteUserCompute>()
        .and_then(DeleteUserCompute::message)
        .unwrap_or_default()
        .to_owned();

    let mut dismissed = false;
    Frame::NONE
        .fill(fill)
        .corner_radius(4.0)
        .inner_margin(Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{icon} {message}"))
                        .color(Color32::WHITE)
                        .strong(),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        dismissed = true;
                    }
                });
            });
        });

    if dismissed {
        state_ctx.update::<UsersTableState>(UsersTableState::dismiss_alert);
    }
}
