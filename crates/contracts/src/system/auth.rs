use serde::{Deserialize, Serialize};

/// Body of `POST /usuarios/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Session user returned by a successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "nomeFuncionario")]
    pub nome_funcionario: String,
    #[serde(rename = "numeroMatricula", default)]
    pub numero_matricula: Option<i64>,
    #[serde(rename = "codigoUnidade", default)]
    pub codigo_unidade: Option<i64>,
    #[serde(rename = "emailFatec")]
    pub email_fatec: String,
}
