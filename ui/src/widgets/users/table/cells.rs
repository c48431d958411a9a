//! Cell rendering functions for the users table.
//!
//! Each function renders a specific type of cell content with
//! centered alignment and appropriate styling.

use egui::{RichText, Ui};

use crate::utils::colors::COLOR_AMBER;
use crate::utils::format::{format_date, truncate};

/// Email addresses longer than this are cut and end in `...`.
pub const EMAIL_MAX_CHARS: usize = 20;

/// Renders the ID cell with a border indicator.
///
/// The ID is the position of the row within the current page, starting at 1.
#[inline]
pub fn render_id_cell(ui: &mut Ui, index: usize) {
    let rect = ui.available_rect_before_wrap();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().vline(
        rect.left(),
        rect.top()..=rect.bottom(),
        egui::Stroke::new(2.0, border_color),
    );

    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(format!("{}", index + 1)).monospace());
    });
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(text);
    });
}

/// Renders the email cell, truncated to [`EMAIL_MAX_CHARS`].
///
/// The full address is shown on hover.
#[inline]
pub fn render_email_cell(ui: &mut Ui, email: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(truncate(email, EMAIL_MAX_CHARS)).on_hover_text(email);
    });
}

#[inline]
pub fn render_date_cell(ui: &mut Ui, raw: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(format_date(raw)).monospace());
    });
}

/// Returns `true` if the button was clicked.
#[inline]
pub fn render_edit_button(ui: &mut Ui) -> bool {
    ui.centered_and_justified(|ui| ui.button("✏️ Edit").on_hover_text("Edit User").clicked())
        .inner
}

/// Returns `true` if the button was clicked.
#[inline]
pub fn render_delete_button(ui: &mut Ui) -> bool {
    ui.centered_and_justified(|ui| {
        ui.button(RichText::new("🗑️ Delete").color(COLOR_AMBER))
            .on_hover_text("Delete User")
            .clicked()
    })
    .inner
}
