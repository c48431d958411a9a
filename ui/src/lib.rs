#![warn(clippy::all, rust_2018_idioms)]
//! Desktop admin console for managing users.

pub mod app;
pub mod pages;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::AdminApp;
