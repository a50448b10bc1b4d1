// web_app/state/mod.rs - Storefront state helpers
//
// Each helper is independent of the others:
// - categories.rs / products.rs: remote lists with loading/error flags
// - theme.rs: dark/light preference with persistence
// - menu.rs: mobile drawer visibility
// - pagination.rs: client-side sort + page slicing synced with `?page=`
//
// Theme and menu are shared by every view of one application, so they
// live in AppState, which the app root creates once and injects.

pub mod categories;
pub mod fetch;
pub mod menu;
pub mod pagination;
pub mod products;
pub mod theme;

pub use categories::{CategoryProvider, CATEGORIES_FALLBACK_ERROR};
pub use fetch::{InFlight, SharedFetchState};
pub use menu::MenuVisibility;
pub use pagination::{page_from_query, query_with_page, sort_items, PageView, PaginationSort};
pub use products::{ProductProvider, PRODUCTS_FALLBACK_ERROR};
pub use theme::{Theme, ThemePreference, DARK_CLASS, THEME_STORAGE_KEY};

use std::sync::Arc;

use crate::web_app::config::StoreConfig;
use crate::web_app::platform::{default_platform, Platform};

/// Application-wide state handed to every view
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: StoreConfig,
    pub theme: ThemePreference,
    pub menu: MenuVisibility,
}

impl AppState {
    pub fn new(config: StoreConfig, platform: Arc<dyn Platform>) -> Self {
        Self {
            config,
            theme: ThemePreference::new(platform),
            menu: MenuVisibility::new(),
        }
    }

    /// Default config on the platform of the current build target
    pub fn for_target() -> Self {
        Self::new(StoreConfig::default(), default_platform())
    }

    /// Fresh pagination using the configured page size
    pub fn pagination(&self, query: &str) -> PaginationSort {
        PaginationSort::from_query(query, self.config.per_page)
    }
}
