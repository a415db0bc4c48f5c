//! Spreadsheet row -> bulk payload record.

use std::fmt;

use contracts::domain::a001_professor::{Matricula, MatriculaError, Professor, STATUS_ATIVO};
use contracts::shared::lenient::parse_int_lenient;

use super::template::*;
use crate::shared::excel_importer::{ExtractedRows, ImportError, RawRow};

/// Professor fields read from one row, before the matricula is checked
#[derive(Debug, Clone, PartialEq)]
pub struct ProfessorDraft {
    pub row_number: u32,
    pub matricula: String,
    pub nome_professor: String,
    pub regime_juridico: String,
    pub carga_horaria: Option<i64>,
    pub hora_atividade: Option<i64>,
    pub hae_o: Option<i64>,
    pub hae_c: Option<i64>,
    pub obs_manha: String,
    pub obs_tarde: String,
    pub obs_noite: String,
}

/// Total and deterministic: every row maps, nothing is rejected here
pub fn map_row(row: &RawRow) -> ProfessorDraft {
    ProfessorDraft {
        row_number: row.row_number,
        matricula: row.get(COL_MATRICULA).to_string(),
        nome_professor: row.get(COL_NOME).to_string(),
        regime_juridico: row.get(COL_REGIME).to_string(),
        carga_horaria: parse_int_lenient(row.get(COL_CARGA_HORARIA)),
        hora_atividade: parse_int_lenient(row.get(COL_HORA_ATIVIDADE)),
        hae_o: parse_int_lenient(row.get(COL_HAE_O)),
        hae_c: parse_int_lenient(row.get(COL_HAE_C)),
        obs_manha: row.get(COL_OBS_MANHA).to_string(),
        obs_tarde: row.get(COL_OBS_TARDE).to_string(),
        obs_noite: row.get(COL_OBS_NOITE).to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionReason {
    MissingMatricula,
    InvalidMatricula(String),
    MissingName,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::MissingMatricula => write!(f, "matrícula vazia"),
            ExclusionReason::InvalidMatricula(raw) => write!(f, "matrícula inválida \"{}\"", raw),
            ExclusionReason::MissingName => write!(f, "nome vazio"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedRow {
    pub row_number: u32,
    pub reason: ExclusionReason,
}

impl ProfessorDraft {
    /// Bulk-imported professors always start active
    pub fn into_record(self) -> Result<Professor, ExclusionReason> {
        let matricula = match Matricula::parse(&self.matricula) {
            Ok(m) => m,
            Err(MatriculaError::Empty) => return Err(ExclusionReason::MissingMatricula),
            Err(MatriculaError::Invalid(raw)) => {
                return Err(ExclusionReason::InvalidMatricula(raw))
            }
        };
        if self.nome_professor.is_empty() {
            return Err(ExclusionReason::MissingName);
        }
        Ok(Professor {
            matricula,
            nome_professor: self.nome_professor,
            status_situacao: STATUS_ATIVO,
            regime_juridico: self.regime_juridico,
            carga_horaria: self.carga_horaria,
            hora_atividade: self.hora_atividade,
            hae_o: self.hae_o,
            hae_c: self.hae_c,
            obs_manha: self.obs_manha,
            obs_tarde: self.obs_tarde,
            obs_noite: self.obs_noite,
            data_inclusao: None,
        })
    }
}

/// Records ready to post, plus what was left out and why
#[derive(Debug, Clone, PartialEq)]
pub struct ImportBatch {
    pub records: Vec<Professor>,
    pub excluded: Vec<ExcludedRow>,
    pub rows_beyond_limit: usize,
}

pub fn build_batch(extracted: ExtractedRows) -> Result<ImportBatch, ImportError> {
    let mut records = Vec::with_capacity(extracted.rows.len());
    let mut excluded = Vec::new();

    for row in &extracted.rows {
        let draft = map_row(row);
        let row_number = draft.row_number;
        match draft.into_record() {
            Ok(record) => records.push(record),
            Err(reason) => {
                log::warn!("Linha {} ignorada: {}", row_number, reason);
                excluded.push(ExcludedRow { row_number, reason });
            }
        }
    }

    if records.is_empty() {
        return Err(ImportError::EmptyBatch);
    }

    Ok(ImportBatch {
        records,
        excluded,
        rows_beyond_limit: extracted.rows_beyond_limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(row_number: u32, cells: &[&str]) -> RawRow {
        let mut values: Vec<String> = cells.iter().map(|s| s.to_string()).collect();
        values.resize(HEADERS.len(), String::new());
        RawRow { row_number, values }
    }

    #[test]
    fn test_reference_row_follows_column_contract() {
        // "40h" sits in column E (Categoria), which is not imported
        let row = raw(
            13,
            &["1", "1001", "Ana Silva", "Estatutário", "40h", "10", "5", "3", "", "", ""],
        );
        let record = map_row(&row).into_record().unwrap();
        assert_eq!(record.matricula.value(), 1001);
        assert_eq!(record.nome_professor, "Ana Silva");
        assert_eq!(record.regime_juridico, "Estatutário");
        assert_eq!(record.status_situacao, 1);
        assert_eq!(record.carga_horaria, Some(10));
        assert_eq!(record.hora_atividade, Some(5));
        assert_eq!(record.hae_o, Some(3));
        assert_eq!(record.hae_c, None);
        assert_eq!(record.obs_noite, "");

        let payload = serde_json::to_value(&record).unwrap();
        assert_eq!(payload["matricula"], serde_json::json!(1001));
        assert_eq!(payload["statusSituacao"], serde_json::json!(1));
        assert_eq!(payload["HAE_C"], serde_json::Value::Null);
    }

    #[test]
    fn test_unparseable_integer_column_is_null() {
        let row = raw(14, &["2", "1002", "Bia", "CLT", "Assoc", "40h", "12,50", "12.50"]);
        let draft = map_row(&row);
        assert_eq!(draft.carga_horaria, None);
        assert_eq!(draft.hora_atividade, Some(12));
        assert_eq!(draft.hae_o, Some(12));
    }

    #[test]
    fn test_bulk_rows_skip_form_checks() {
        // Negative hours fail Professor::validate but bulk rows are only
        // filtered on matricula and name
        let row = raw(21, &["1", "55", "Edu", "", "", "-4"]);
        let record = map_row(&row).into_record().unwrap();
        assert_eq!(record.carga_horaria, Some(-4));
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let row = raw(20, &["9", "77", "Caio", "", "", "1", "2", "3", "4", "m", "t", "n"]);
        assert_eq!(map_row(&row), map_row(&row));
    }

    #[test]
    fn test_filtering_reports_reasons() {
        let extracted = ExtractedRows {
            rows: vec![
                raw(13, &["1", "", "Sem Matrícula"]),
                raw(14, &["2", "1002", ""]),
                raw(15, &["3", "A-7", "Letra"]),
                raw(16, &["4", "1004", "Dora"]),
            ],
            rows_beyond_limit: 4,
        };
        let batch = build_batch(extracted).unwrap();
        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.records[0].nome_professor, "Dora");
        assert_eq!(batch.rows_beyond_limit, 4);
        assert_eq!(
            batch.excluded,
            vec![
                ExcludedRow {
                    row_number: 13,
                    reason: ExclusionReason::MissingMatricula
                },
                ExcludedRow {
                    row_number: 14,
                    reason: ExclusionReason::MissingName
                },
                ExcludedRow {
                    row_number: 15,
                    reason: ExclusionReason::InvalidMatricula("A-7".into())
                },
            ]
        );
    }

    #[test]
    fn test_all_rows_filtered_is_empty_batch() {
        let extracted = ExtractedRows {
            rows: vec![raw(13, &["1", "", "Ana"]), raw(14, &["2", "5", ""])],
            rows_beyond_limit: 0,
        };
        assert_eq!(build_batch(extracted), Err(ImportError::EmptyBatch));
        assert_eq!(
            build_batch(ExtractedRows::default()),
            Err(ImportError::EmptyBatch)
        );
    }
}
