use serde::{Deserialize, Serialize};

/// Standard success wrapper: `{"status": "OK", "dados": ..., "meta": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: String,
    pub dados: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ListMeta>,
}

/// Pagination block returned by list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListMeta {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub pages: u32,
    pub order_by: String,
    pub order_dir: String,
}

/// Query string of list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub order_by: String,
    pub order_dir: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 200,
            order_by: "nomeProfessor".to_string(),
            order_dir: "asc".to_string(),
        }
    }
}

/// Acknowledgement body of write endpoints: `{"status": "OK", "mensagem": "..."}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiMessage {
    pub status: String,
    pub mensagem: String,
}

/// Error body of every endpoint: `{"erro": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub erro: String,
}

impl ApiErrorBody {
    /// Extract `erro` from a raw response body, if it is the standard error shape
    pub fn from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .map(|e| e.erro)
            .filter(|e| !e.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_extraction() {
        assert_eq!(
            ApiErrorBody::from_body(r#"{"erro":"Matrícula já cadastrada"}"#).as_deref(),
            Some("Matrícula já cadastrada")
        );
        assert_eq!(ApiErrorBody::from_body("<html>502</html>"), None);
        assert_eq!(ApiErrorBody::from_body(r#"{"erro":"  "}"#), None);
    }

    #[test]
    fn test_list_envelope_without_meta() {
        let env: ApiEnvelope<Vec<u32>> = serde_json::from_str(r#"{"dados":[1,2]}"#).unwrap();
        assert_eq!(env.dados, vec![1, 2]);
        assert!(env.meta.is_none());
        assert_eq!(env.status, "");
    }
}
