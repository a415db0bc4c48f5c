use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::domain::common::AggregateId;
use crate::shared::lenient::{int_or_null, text_or_empty};

// ============================================================================
// ID Type
// ============================================================================

/// Registration number of a professor, primary key of the REST resource.
///
/// Always a positive integer on the wire. Spreadsheet cells and form inputs
/// are parsed through [`Matricula::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u64")]
pub struct Matricula(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatriculaError {
    Empty,
    Invalid(String),
}

impl fmt::Display for MatriculaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatriculaError::Empty => write!(f, "Matrícula não informada"),
            MatriculaError::Invalid(raw) => {
                write!(f, "Matrícula inválida: \"{}\" (use apenas dígitos)", raw)
            }
        }
    }
}

impl std::error::Error for MatriculaError {}

impl Matricula {
    pub fn new(value: u64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Parse trimmed text. Only ASCII digits are accepted, zero is rejected.
    pub fn parse(raw: &str) -> Result<Self, MatriculaError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MatriculaError::Empty);
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MatriculaError::Invalid(trimmed.to_string()));
        }
        trimmed
            .parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| MatriculaError::Invalid(trimmed.to_string()))
    }
}

impl fmt::Display for Matricula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Matricula> for u64 {
    fn from(m: Matricula) -> Self {
        m.0
    }
}

impl<'de> Deserialize<'de> for Matricula {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Matricula::new(n)
                .ok_or_else(|| serde::de::Error::custom(MatriculaError::Invalid(n.to_string()))),
            Repr::Text(s) => Matricula::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}

impl AggregateId for Matricula {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Matricula::parse(s).map_err(|e| e.to_string())
    }
}

// ============================================================================
// Status
// ============================================================================

pub const STATUS_ATIVO: i64 = 1;
pub const STATUS_INATIVO: i64 = 0;

pub fn status_label(status: i64) -> &'static str {
    if status == STATUS_ATIVO {
        "Ativo"
    } else {
        "Inativo"
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Full professor record, as accepted by create/update/bulk import and
/// returned by the get-by-id endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professor {
    pub matricula: Matricula,

    #[serde(rename = "nomeProfessor", deserialize_with = "text_or_empty")]
    pub nome_professor: String,

    #[serde(rename = "statusSituacao", alias = "status", default = "default_status")]
    pub status_situacao: i64,

    #[serde(rename = "regimeJuridico", default, deserialize_with = "text_or_empty")]
    pub regime_juridico: String,

    #[serde(rename = "cargaHoraria", default, deserialize_with = "int_or_null")]
    pub carga_horaria: Option<i64>,

    #[serde(rename = "horaAtividade", default, deserialize_with = "int_or_null")]
    pub hora_atividade: Option<i64>,

    #[serde(rename = "HAE_O", default, deserialize_with = "int_or_null")]
    pub hae_o: Option<i64>,

    #[serde(rename = "HAE_C", default, deserialize_with = "int_or_null")]
    pub hae_c: Option<i64>,

    #[serde(rename = "obsManha", default, deserialize_with = "text_or_empty")]
    pub obs_manha: String,

    #[serde(rename = "obsTarde", default, deserialize_with = "text_or_empty")]
    pub obs_tarde: String,

    #[serde(rename = "obsNoite", default, deserialize_with = "text_or_empty")]
    pub obs_noite: String,

    /// Set by the backend on insert; never sent by the client
    #[serde(
        rename = "dataInclusao",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub data_inclusao: Option<String>,
}

fn default_status() -> i64 {
    STATUS_ATIVO
}

impl Professor {
    pub fn is_active(&self) -> bool {
        self.status_situacao == STATUS_ATIVO
    }

    /// Checks applied to records typed in the form. Bulk rows are only
    /// filtered on matricula and name, the backend checks the rest.
    pub fn validate(&self) -> Result<(), String> {
        if self.nome_professor.trim().is_empty() {
            return Err("Nome do professor é obrigatório".into());
        }
        if self.status_situacao != STATUS_ATIVO && self.status_situacao != STATUS_INATIVO {
            return Err("Situação deve ser 0 (inativo) ou 1 (ativo)".into());
        }
        for (label, value) in [
            ("Carga horária", self.carga_horaria),
            ("Hora atividade", self.hora_atividade),
            ("HAE-o", self.hae_o),
            ("HAE-c", self.hae_c),
        ] {
            if matches!(value, Some(v) if v < 0) {
                return Err(format!("{} não pode ser negativa", label));
            }
        }
        Ok(())
    }
}

/// Row of the list endpoint (summary only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessorSummary {
    pub matricula: Matricula,

    #[serde(rename = "nomeProfessor", default, deserialize_with = "text_or_empty")]
    pub nome_professor: String,

    #[serde(alias = "statusSituacao", default)]
    pub status: i64,
}
