use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::pages::{DEFAULT_PAGE, PAGE_QUERY_KEY};

/// Shell state shared through context: active page and sidebar visibility
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

/// Page key carried by a `?active=...` query string
pub fn active_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(PAGE_QUERY_KEY)
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

/// `?active=...` for a page key
pub fn search_for_active(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([(PAGE_QUERY_KEY, key)])).unwrap_or_default();
    format!("?{}", query)
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_PAGE.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the page from the URL, then keep the URL in sync
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = active_from_search(&search) {
            self.navigate(&key);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = search_for_active(&this.active.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, key: &str) {
        log::debug!("navigate: {}", key);
        self.active.set(key.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
