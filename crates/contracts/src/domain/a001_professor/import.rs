use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::lenient::value_to_text;

/// Per-record outcome returned by `POST /professores/importacao-massa`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    pub matricula: String,
    pub nome: String,
    pub sucesso: bool,
    pub mensagem: String,
}

impl ImportResult {
    /// Total conversion: missing or mistyped fields fall back to empty/false,
    /// a non-object element yields an all-default row.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).map(value_to_text).unwrap_or_default();
        let sucesso = match value.get("sucesso") {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
            Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
            _ => false,
        };
        Self {
            matricula: field("matricula"),
            nome: field("nome"),
            sucesso,
            mensagem: field("mensagem"),
        }
    }
}

/// Object-shaped success body: `{status, message|mensagem, resumo}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub status: String,
    pub message: String,
    pub resumo: Option<Value>,
}

/// Successful bulk-import response, by shape
#[derive(Debug, Clone, PartialEq)]
pub enum ImportResponse {
    Results(Vec<ImportResult>),
    Summary(ImportSummary),
    Other(Value),
}

impl ImportResponse {
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                ImportResponse::Results(items.iter().map(ImportResult::from_value).collect())
            }
            Value::Object(ref map) => {
                let text = |key: &str| map.get(key).map(value_to_text).unwrap_or_default();
                let message = {
                    let m = text("message");
                    if m.is_empty() {
                        text("mensagem")
                    } else {
                        m
                    }
                };
                ImportResponse::Summary(ImportSummary {
                    status: text("status"),
                    message,
                    resumo: map.get("resumo").cloned(),
                })
            }
            other => ImportResponse::Other(other),
        }
    }

    /// (succeeded, failed) for the results shape; `None` otherwise
    pub fn tally(&self) -> Option<(usize, usize)> {
        match self {
            ImportResponse::Results(rows) => {
                let ok = rows.iter().filter(|r| r.sucesso).count();
                Some((ok, rows.len() - ok))
            }
            _ => None,
        }
    }
}
