//! Pages module for the application.
//!
//! One page per [`Route`](userdesk_business::Route):
//! - `users_page`: Users table (`/admin/users`)
//! - `user_form_page`: Add and edit user placeholders

mod user_form_page;
mod users_page;

pub use user_form_page::{add_user_page, edit_user_page};
pub use users_page::users_page;
