//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and turning backend
//! error bodies into user-facing messages.

use contracts::shared::envelope::ApiErrorBody;

use crate::shared::config::config;

/// Get the base URL for API requests
///
/// Taken from [`AppConfig::api_base`](crate::shared::config::AppConfig),
/// without trailing slash.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/professores/{}", api_base(), matricula);
/// ```
pub fn api_base() -> String {
    config().api_base.clone()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/professores/1001");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Message for a non-2xx response: the backend `erro` field when present,
/// the raw body otherwise, the bare status as last resort.
pub fn error_message(status: u16, body: &str) -> String {
    if let Some(erro) = ApiErrorBody::from_body(body) {
        return erro;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status)
    } else {
        trimmed.to_string()
    }
}
