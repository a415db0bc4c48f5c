pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::shared::config::config;

#[wasm_bindgen]
pub fn hydrate() {
    let cfg = config();
    let level = cfg.log_level().unwrap_or(log::Level::Info);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
    log::info!("API: {}", cfg.api_base);

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
