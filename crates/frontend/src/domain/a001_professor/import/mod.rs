//! Spreadsheet bulk import of professors
pub mod mapping;
pub mod pipeline;
pub mod template;

pub use pipeline::{BatchSubmitter, BulkImportPipeline, ImportPresenter, ImportReport};
