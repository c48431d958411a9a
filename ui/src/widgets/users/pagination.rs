//! Page navigation and page size selector.

use egui::{Button, ComboBox, Ui};
use userdesk_business::UsersTableState;
use userdesk_business::users::{PAGE_SIZE_OPTIONS, total_pages};
use userdesk_states::StateCtx;

/// Page buttons shown on each side of the current page.
const PAGE_WINDOW: u32 = 2;

/// Renders the pagination row. Only called when there is at least one user.
pub fn render_pagination(state_ctx: &mut StateCtx, ui: &mut Ui, total_docs: u64) {
    let table = state_ctx.state::<UsersTableState>();
    let (page, limit) = (table.page(), table.limit());
    let pages = total_pages(total_docs, limit).max(1);

    let mut next_page = page;
    let mut next_limit = limit;

    ui.horizontal(|ui| {
        if ui.add_enabled(page > 1, Button::new("◀ Prev")).clicked() {
            next_page = page - 1;
        }

        let first = page.saturating_sub(PAGE_WINDOW).max(1);
        let last = page.saturating_add(PAGE_WINDOW).min(pages);
        for number in first..=last {
            if ui
                .selectable_label(number == page, number.to_string())
                .clicked()
            {
                next_page = number;
            }
        }

        if ui.add_enabled(page < pages, Button::new("Next ▶")).clicked() {
            next_page = page + 1;
        }

        ui.separator();
        ui.label(format!("Page {page} of {pages}"));
        ui.separator();

        ui.label("Rows per page:");
        ComboBox::from_id_salt("users_page_size")
            .selected_text(limit.to_string())
            .show_ui(ui, |ui| {
                for option in PAGE_SIZE_OPTIONS {
                    ui.selectable_value(&mut next_limit, option, option.to_string());
                }
            });
    });

    if next_limit != limit {
        state_ctx.update::<UsersTableState>(|table| table.set_limit(next_limit));
    } else if next_page != page {
        state_ctx.update::<UsersTableState>(|table| table.set_page(next_page));
    }
}
