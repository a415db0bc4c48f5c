use contracts::system::auth::{LoginRequest, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_message};

/// Login with institutional e-mail and password
pub async fn login(email: String, senha: String) -> Result<UserInfo, String> {
    let request = LoginRequest { email, senha };

    let response = Request::post(&api_url("/usuarios/login"))
        .json(&request)
        .map_err(|e| format!("Falha ao serializar: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Falha ao enviar requisição: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(match status {
            401 | 404 => error_message(status, &body),
            _ => format!("Erro no login ({}): {}", status, error_message(status, &body)),
        });
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Resposta inválida: {}", e))
}
