pub mod view;
pub mod view_model;

pub use view::ProfessorDetails;
pub use view_model::{ProfessorDetailsViewModel, ProfessorForm};
