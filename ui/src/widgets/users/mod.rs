//! Users management module.
//!
//! - `panel`: Main panel widget and the per-frame table bookkeeping
//! - `alert`: Delete result alert
//! - `modal`: Delete confirmation modal
//! - `pagination`: Page navigation and page size selector
//! - `table`: Table rendering components (columns, header, row, cells)

mod alert;
mod modal;
mod pagination;
mod panel;
pub mod table;

pub use panel::{drive_users_table, users_panel};
