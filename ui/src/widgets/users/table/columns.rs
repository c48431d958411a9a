//! Column definitions for the users table.

use egui_extras::Column;

/// Fixed column widths for consistent table layout
pub const ID_WIDTH: f32 = 50.0;
pub const NAME_WIDTH: f32 = 110.0;
pub const GENDER_WIDTH: f32 = 80.0;
pub const DATE_WIDTH: f32 = 110.0;
pub const ROLE_WIDTH: f32 = 80.0;
pub const ACTION_WIDTH: f32 = 70.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Table column configuration for the users table.
///
/// Returns a vector of column definitions in order:
/// - ID (fixed width with border indicator)
/// - First name, last name (fixed)
/// - Email (flexible, fills remaining space)
/// - Gender, date of birth, role (fixed)
/// - Edit, delete buttons (fixed)
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(ID_WIDTH),             // ID
        Column::exact(NAME_WIDTH),           // First name
        Column::exact(NAME_WIDTH),           // Last name
        Column::remainder().at_least(160.0), // Email - flexible
        Column::exact(GENDER_WIDTH),         // Gender
        Column::exact(DATE_WIDTH),           // Date of birth
        Column::exact(ROLE_WIDTH),           // Role
        Column::exact(ACTION_WIDTH),         // Edit
        Column::exact(ACTION_WIDTH),         // Delete
    ]
}
