pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    let level = shared::config::log_level(shared::config::config());
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    log::info!(
        "worldly starting, countries api at {}",
        shared::api_utils::countries_base()
    );
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
