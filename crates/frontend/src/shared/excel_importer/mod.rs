pub mod error;
pub mod file_gate;
pub mod loader;
pub mod parser;
pub mod sheetjs;
pub mod types;
pub mod widget;

pub use error::ImportError;
pub use types::{
    CellValue, ExtractedRows, FileSource, RawRow, SheetSource, SheetTemplate, SpreadsheetEngine,
    WorkbookSource,
};
pub use widget::SpreadsheetPicker;
