//! Runtime configuration of the SPA.
//!
//! Defaults are compiled in (the API base may be overridden at build time via
//! `PROFESSORES_API_BASE`). A deployment can override any field at run time by
//! defining `window.APP_CONFIG = { api_base, sheetjs_url, log_level }` before
//! the wasm bundle starts.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

pub const DEFAULT_API_BASE: &str = "https://profverissimofatec.pythonanywhere.com";
pub const DEFAULT_SHEETJS_URL: &str =
    "https://cdn.sheetjs.com/xlsx-0.20.3/package/dist/xlsx.full.min.js";

const APP_CONFIG_GLOBAL: &str = "APP_CONFIG";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window.APP_CONFIG inválido: {0}")]
    Invalid(String),
    #[error("nível de log desconhecido: {0}")]
    UnknownLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base: String,
    pub sheetjs_url: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("PROFESSORES_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
            sheetjs_url: DEFAULT_SHEETJS_URL.to_string(),
            log_level: if cfg!(debug_assertions) { "debug" } else { "info" }.to_string(),
        }
    }
}

impl AppConfig {
    /// Deserialize a `window.APP_CONFIG` object; absent fields keep defaults.
    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(config.normalized())
    }

    /// Trailing slashes are stripped so paths can be appended with `/...`
    pub fn normalized(mut self) -> Self {
        let trimmed = self.api_base.trim().trim_end_matches('/');
        self.api_base = if trimmed.is_empty() {
            AppConfig::default().api_base
        } else {
            trimmed.to_string()
        };
        if self.sheetjs_url.trim().is_empty() {
            self.sheetjs_url = DEFAULT_SHEETJS_URL.to_string();
        }
        self
    }

    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .trim()
            .parse::<log::Level>()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }
}

fn load_from_window() -> AppConfig {
    let raw = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(APP_CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if raw.is_undefined() || raw.is_null() {
        return AppConfig::default().normalized();
    }
    match AppConfig::from_js(raw) {
        Ok(config) => config,
        Err(e) => {
            // Logger may not be up yet; console still shows this once it is.
            log::warn!("{}; usando configuração padrão", e);
            AppConfig::default().normalized()
        }
    }
}

/// Process-wide configuration, read from the page on first access.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(load_from_window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_strips_trailing_slash() {
        let cfg = AppConfig {
            api_base: "http://localhost:5000//".into(),
            ..AppConfig::default()
        }
        .normalized();
        assert_eq!(cfg.api_base, "http://localhost:5000");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let cfg = AppConfig {
            api_base: "  ".into(),
            sheetjs_url: String::new(),
            log_level: "info".into(),
        }
        .normalized();
        assert_eq!(cfg.api_base, AppConfig::default().api_base);
        assert_eq!(cfg.sheetjs_url, DEFAULT_SHEETJS_URL);
    }

    #[test]
    fn test_log_level_parsing() {
        let mut cfg = AppConfig::default();
        cfg.log_level = "WARN".into();
        assert_eq!(cfg.log_level().unwrap(), log::Level::Warn);
        cfg.log_level = "verbose".into();
        assert!(matches!(cfg.log_level(), Err(ConfigError::UnknownLogLevel(_))));
    }
}
