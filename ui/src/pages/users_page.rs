use egui::{Response, Ui};

use crate::{state::State, widgets};

/// Renders the users table page.
pub fn users_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        widgets::users_panel(&mut state.ctx, ui);
    })
    .response
}
