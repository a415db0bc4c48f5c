pub mod api;
pub mod import;
pub mod ui;
