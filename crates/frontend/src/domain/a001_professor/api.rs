use std::future::Future;

use contracts::domain::a001_professor::{ImportResponse, Matricula, Professor, ProfessorSummary};
use contracts::domain::common::AggregateId;
use contracts::shared::envelope::{ApiEnvelope, ApiMessage, ListQuery};
use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;

use super::import::BatchSubmitter;
use crate::shared::api_utils::{api_url, error_message};
use crate::shared::excel_importer::ImportError;

pub const IMPORT_TIMEOUT_SECS: u32 = 30;

fn collection_url() -> String {
    api_url("/professores/")
}

fn item_url(matricula: Matricula) -> String {
    api_url(&format!("/professores/{}", matricula.as_string()))
}

async fn read_failure(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_message(status, &body)
}

async fn read_ack(response: Response, fallback: &str) -> Result<String, String> {
    if !response.ok() {
        return Err(read_failure(response).await);
    }
    let body = response.text().await.unwrap_or_default();
    let mensagem = serde_json::from_str::<ApiMessage>(&body)
        .map(|m| m.mensagem)
        .unwrap_or_default();
    Ok(if mensagem.is_empty() {
        fallback.to_string()
    } else {
        mensagem
    })
}

/// Fetch one page of the professor list
pub async fn fetch_professores(
    query: &ListQuery,
) -> Result<ApiEnvelope<Vec<ProfessorSummary>>, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Consulta inválida: {}", e))?;
    let url = format!("{}?{}", collection_url(), qs);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Falha ao enviar requisição: {}", e))?;

    if !response.ok() {
        return Err(read_failure(response).await);
    }

    response
        .json::<ApiEnvelope<Vec<ProfessorSummary>>>()
        .await
        .map_err(|e| format!("Resposta inválida: {}", e))
}

/// Fetch the full record of one professor
pub async fn fetch_professor(matricula: Matricula) -> Result<Professor, String> {
    let response = Request::get(&item_url(matricula))
        .send()
        .await
        .map_err(|e| format!("Falha ao enviar requisição: {}", e))?;

    if !response.ok() {
        return Err(read_failure(response).await);
    }

    response
        .json::<ApiEnvelope<Professor>>()
        .await
        .map(|env| env.dados)
        .map_err(|e| format!("Resposta inválida: {}", e))
}

pub async fn create_professor(professor: &Professor) -> Result<String, String> {
    let response = Request::post(&collection_url())
        .json(professor)
        .map_err(|e| format!("Falha ao serializar: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Falha ao enviar requisição: {}", e))?;

    read_ack(response, "Professor cadastrado").await
}

pub async fn update_professor(professor: &Professor) -> Result<String, String> {
    let response = Request::put(&item_url(professor.matricula))
        .json(professor)
        .map_err(|e| format!("Falha ao serializar: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Falha ao enviar requisição: {}", e))?;

    read_ack(response, "Professor atualizado").await
}

pub async fn delete_professor(matricula: Matricula) -> Result<String, String> {
    let response = Request::delete(&item_url(matricula))
        .send()
        .await
        .map_err(|e| format!("Falha ao enviar requisição: {}", e))?;

    read_ack(response, "Professor excluído").await
}

/// Classify the bulk-import reply
pub fn interpret_import_response(status: u16, body: &str) -> Result<ImportResponse, ImportError> {
    if !(200..300).contains(&status) {
        return Err(ImportError::SubmitError {
            status,
            message: error_message(status, body),
        });
    }
    serde_json::from_str::<serde_json::Value>(body)
        .map(ImportResponse::from_json)
        .map_err(|e| ImportError::InvalidResponse(e.to_string()))
}

/// `POST /professores/importacao-massa`, aborted after [`IMPORT_TIMEOUT_SECS`]
#[derive(Debug, Clone)]
pub struct HttpBatchSubmitter {
    url: String,
    timeout_secs: u32,
}

impl HttpBatchSubmitter {
    pub fn new() -> Self {
        Self {
            url: api_url("/professores/importacao-massa"),
            timeout_secs: IMPORT_TIMEOUT_SECS,
        }
    }
}

impl Default for HttpBatchSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves to `None` when `deadline` fires before `work` completes
pub async fn within<W, D>(work: W, deadline: D) -> Option<W::Output>
where
    W: Future,
    D: Future<Output = ()>,
{
    futures::pin_mut!(work, deadline);
    match select(work, deadline).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

impl BatchSubmitter for HttpBatchSubmitter {
    async fn submit(&self, batch: &[Professor]) -> Result<ImportResponse, ImportError> {
        let controller = web_sys::AbortController::new()
            .map_err(|e| ImportError::Network(format!("{:?}", e)))?;
        let signal = controller.signal();

        let request = Request::post(&self.url)
            .abort_signal(Some(&signal))
            .json(batch)
            .map_err(|e| ImportError::Network(e.to_string()))?;

        log::info!("Enviando {} professor(es) para {}", batch.len(), self.url);
        // The deadline covers the body too: headers can arrive before a stalled body
        let exchange = async {
            let response = request
                .send()
                .await
                .map_err(|e| ImportError::Network(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ImportError::Network(e.to_string()))?;
            Ok::<_, ImportError>((status, body))
        };

        match within(exchange, TimeoutFuture::new(self.timeout_secs * 1000)).await {
            Some(Ok((status, body))) => interpret_import_response(status, &body),
            Some(Err(e)) => Err(e),
            None => {
                controller.abort();
                log::warn!("Importação cancelada após {} s", self.timeout_secs);
                Err(ImportError::SubmitTimeout {
                    seconds: self.timeout_secs,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    #[test]
    fn test_non_2xx_uses_erro_field_or_raw_text() {
        assert_eq!(
            interpret_import_response(400, r#"{"erro":"Lista vazia"}"#),
            Err(ImportError::SubmitError {
                status: 400,
                message: "Lista vazia".into()
            })
        );
        assert_eq!(
            interpret_import_response(502, "Bad Gateway"),
            Err(ImportError::SubmitError {
                status: 502,
                message: "Bad Gateway".into()
            })
        );
    }

    #[test]
    fn test_success_shapes() {
        let resp = interpret_import_response(
            200,
            r#"[{"matricula":1001,"nome":"Ana","sucesso":true,"mensagem":"ok"}]"#,
        )
        .unwrap();
        assert_eq!(resp.tally(), Some((1, 0)));

        let resp = interpret_import_response(201, r#"{"status":"OK","message":"feito"}"#).unwrap();
        assert!(matches!(resp, ImportResponse::Summary(ref s) if s.message == "feito"));
    }

    #[test]
    fn test_success_with_html_body_is_invalid_response() {
        assert!(matches!(
            interpret_import_response(200, "<html>ok</html>"),
            Err(ImportError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_deadline_covers_a_stalled_body() {
        // headers done, body never finishes
        let exchange = async {
            ready(200u16).await;
            pending::<String>().await
        };
        assert_eq!(block_on(within(exchange, ready(()))), None);
    }

    #[test]
    fn test_completed_exchange_beats_deadline() {
        let exchange = async { (200u16, "[]".to_string()) };
        assert_eq!(
            block_on(within(exchange, pending::<()>())),
            Some((200, "[]".to_string()))
        );
    }
}
