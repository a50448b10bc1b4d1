// lib.rs - Root module for the storefront_state library
//
// The library is split in two layers:
// - web_app::state, model, api, platform: framework-free state helpers
// - web_app::components, pages, app: the Leptos view layer (ssr/hydrate)

/// Storefront state helpers and the web application built on them
pub mod web_app;

/// Sample catalog data shared by tests and the catalog binary
pub mod fixtures;

pub use web_app::config::StoreConfig;
pub use web_app::error::{ConfigError, FetchError};
pub use web_app::model::{Category, FetchState, Product, Rating, SortOption};

/// WASM entry point: hydrates the server-rendered storefront
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
