// lib.rs - Root module for the food_list library
//
// The domain code (model, catalog, filter, query) builds without any
// feature; the Leptos UI needs either `ssr` or `hydrate`.

/// The web_app module contains the catalog, the filter logic and the Leptos UI
pub mod web_app;

/// WASM entry point, called by the generated JS once the bundle loads
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
