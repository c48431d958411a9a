//! Row rendering for the users table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use userdesk_business::User;
use ustr::Ustr;

use super::cells::{
    render_date_cell, render_delete_button, render_edit_button, render_email_cell,
    render_id_cell, render_text_cell,
};

/// Button clicked inside a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(Ustr),
    Delete(Ustr),
}

/// Renders a single user row with all cells.
///
/// Returns the action of the button clicked in this row, if any.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, index: usize, user: &User) -> Option<RowAction> {
    let mut action = None;

    row.col(|ui| {
        render_id_cell(ui, index);
        draw_cell_bottom_border(ui);
    });

    for text in [&user.first_name, &user.last_name] {
        row.col(|ui| {
            render_text_cell(ui, text);
            draw_cell_bottom_border(ui);
        });
    }

    row.col(|ui| {
        render_email_cell(ui, &user.email);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_text_cell(ui, &user.gender);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_date_cell(ui, &user.date_of_birth);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_text_cell(ui, &user.role);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        if render_edit_button(ui) {
            action = Some(RowAction::Edit(Ustr::from(&user.id)));
        }
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        if render_delete_button(ui) {
            action = Some(RowAction::Delete(Ustr::from(&user.id)));
        }
        draw_cell_bottom_border(ui);
    });

    action
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
