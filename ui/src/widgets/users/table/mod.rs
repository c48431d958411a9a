//! Table components for the users table.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Table header rendering
//! - `row`: Individual row rendering with cells
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use userdesk_business::User;

pub use cells::EMAIL_MAX_CHARS;
pub use row::RowAction;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Renders one page of users. Returns the action of the clicked row button.
pub fn render_users_table(ui: &mut Ui, users: &[User]) -> Option<RowAction> {
    let mut action = None;

    let mut builder = TableBuilder::new(ui)
        .id_salt("users_table")
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header);
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, users.len(), |mut row| {
                let index = row.index();
                if let Some(user) = users.get(index)
                    && let Some(clicked) = render_user_row(&mut row, index, user)
                {
                    action = Some(clicked);
                }
            });
        });

    action
}
