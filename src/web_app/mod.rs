// web_app/mod.rs - Root module for the storefront web application
//
// Architecture:
// - model/: Shared data types (products, categories, sort options, fetch state)
// - config.rs: API base URL and page size
// - error.rs: Fetch and configuration errors
// - api/: REST client for the storefront catalog API
// - platform.rs: Browser side effects (storage, root class, color scheme)
// - state/: Providers, theme, menu, pagination and the injected AppState
// - components/, pages/, app.rs: Leptos views (both SSR and hydrate)

pub mod model;
pub mod config;
pub mod error;
pub mod api;
pub mod platform;
pub mod state;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
