pub mod api_utils;
pub mod config;
pub mod date_utils;
pub mod excel_importer;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod notify;
pub mod page_frame;
pub mod page_standard;
