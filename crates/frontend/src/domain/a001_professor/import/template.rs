use crate::shared::excel_importer::SheetTemplate;

pub const HEADERS: &[&str] = &[
    "#Sequencia",
    "Matrícula",
    "Nome do Professor",
    "Regime Jurídico",
    "Categoria",
    "Carga Horária",
    "Hora Atividade",
    "HAE-o",
    "HAE-c",
    "Observação Manha",
    "Observação Tarde",
    "Observação Noite",
];

/// Sheet "docentes": header on row 12, data from row 13, up to 200 professors
pub const PROFESSOR_TEMPLATE: SheetTemplate = SheetTemplate {
    sheet_name: "docentes",
    header_row: 11,
    first_data_row: 12,
    headers: HEADERS,
    max_rows: 200,
};

// Column offsets from the first column of the sheet range.
// A (#Sequencia) and E (Categoria) are not imported.
pub const COL_MATRICULA: usize = 1;
pub const COL_NOME: usize = 2;
pub const COL_REGIME: usize = 3;
pub const COL_CARGA_HORARIA: usize = 5;
pub const COL_HORA_ATIVIDADE: usize = 6;
pub const COL_HAE_O: usize = 7;
pub const COL_HAE_C: usize = 8;
pub const COL_OBS_MANHA: usize = 9;
pub const COL_OBS_TARDE: usize = 10;
pub const COL_OBS_NOITE: usize = 11;
