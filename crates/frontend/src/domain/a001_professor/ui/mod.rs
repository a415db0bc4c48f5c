pub mod bulk_import;
pub mod details;
pub mod list;
pub mod page;
