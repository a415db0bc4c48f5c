pub mod view;
pub mod view_model;

pub use view::ProfessorBulkImportPage;
pub use view_model::BulkImportViewModel;
