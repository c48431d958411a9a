//! Add and edit user pages.
//!
//! Both only show where they are and link back to the users table.

use egui::{Response, RichText, Ui};
use userdesk_business::Route;
use ustr::Ustr;

use crate::state::State;

pub fn add_user_page(state: &mut State, ui: &mut Ui) -> Response {
    form_page(state, ui, "Add New User", &Route::AddUser)
}

pub fn edit_user_page(state: &mut State, ui: &mut Ui, id: Ustr) -> Response {
    form_page(state, ui, &format!("Edit User {id}"), &Route::EditUser(id))
}

fn form_page(state: &mut State, ui: &mut Ui, title: &str, route: &Route) -> Response {
    ui.vertical(|ui| {
        ui.heading(title);
        ui.label(RichText::new(route.path()).monospace().weak());
        ui.add_space(8.0);

        if ui.button("⬅ Back to users").clicked() {
            state.ctx.update::<Route>(|current| *current = Route::Users);
        }
    })
    .response
}
