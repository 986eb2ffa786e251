pub mod app;
pub mod domain;
pub mod projections;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Punto de entrada del bundle WASM
#[wasm_bindgen(start)]
pub fn run() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // ya inicializado (recarga en caliente)
        log::debug!("console_log ya estaba inicializado");
    }
    console_error_panic_hook::set_once();

    log::info!("montando Registros de Documentos (API: {})", shared::api_utils::api_base());
    leptos::mount::mount_to_body(app::App);
}
