use thiserror::Error;

use crate::shared::notify::{Notice, Severity};

/// Every way a spreadsheet import can end early.
///
/// `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("{0}")]
    InputRejected(String),

    #[error("A biblioteca de planilhas não carregou em {seconds} s. Verifique a conexão e tente novamente.")]
    LoadTimeout { seconds: u32 },

    #[error("Falha ao carregar a biblioteca de planilhas: {0}")]
    LoadFailed(String),

    #[error("Não foi possível ler o arquivo: {0}")]
    ParseError(String),

    #[error("A planilha \"{expected}\" não foi encontrada no arquivo. Abas disponíveis: {available}")]
    SheetNotFound { expected: String, available: String },

    #[error("O cabeçalho da linha {row_number} não corresponde ao modelo (coluna {column}: esperado \"{expected}\", encontrado \"{found}\").\nCabeçalho lido: {header}")]
    HeaderMismatch {
        row_number: u32,
        column: String,
        expected: String,
        found: String,
        header: String,
    },

    #[error("Nenhum professor válido encontrado na planilha (matrícula e nome são obrigatórios).")]
    EmptyBatch,

    #[error("O servidor não respondeu em {seconds} s. A importação foi cancelada.")]
    SubmitTimeout { seconds: u32 },

    #[error("Falha de comunicação com o servidor: {0}")]
    Network(String),

    #[error("Erro do servidor ({status}): {message}")]
    SubmitError { status: u16, message: String },

    #[error("Resposta inválida do servidor: {0}")]
    InvalidResponse(String),

    #[error("Já existe uma importação em andamento.")]
    AlreadyRunning,
}

impl ImportError {
    pub fn severity(&self) -> Severity {
        match self {
            ImportError::InputRejected(_)
            | ImportError::EmptyBatch
            | ImportError::HeaderMismatch { .. }
            | ImportError::SheetNotFound { .. }
            | ImportError::AlreadyRunning => Severity::Warning,
            _ => Severity::Danger,
        }
    }

    pub fn to_notice(&self) -> Notice {
        Notice::new(self.severity(), self.to_string())
    }
}
