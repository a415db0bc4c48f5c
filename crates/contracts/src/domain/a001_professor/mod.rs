pub mod aggregate;
pub mod import;

pub use aggregate::{
    status_label, Matricula, MatriculaError, Professor, ProfessorSummary, STATUS_ATIVO,
    STATUS_INATIVO,
};
pub use import::{ImportResponse, ImportResult, ImportSummary};
