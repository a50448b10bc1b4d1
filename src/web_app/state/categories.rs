// web_app/state/categories.rs - Category list provider

use crate::web_app::api::StoreApi;
use crate::web_app::model::{Category, FetchState};

use super::fetch::SharedFetchState;

/// Shown when a category fetch fails without a message
pub const CATEGORIES_FALLBACK_ERROR: &str = "Failed to load categories";

/// Loads the category names shown in the filter bar
pub struct CategoryProvider<A> {
    api: A,
    state: SharedFetchState<Category>,
}

impl<A: StoreApi> CategoryProvider<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: SharedFetchState::new(),
        }
    }

    /// Fetches the category list; failures end up in [`Self::error`]
    pub async fn fetch(&self) {
        let flight = self.state.begin();
        tracing::debug!("Fetching categories (request #{})", flight.seq());

        let result = self.api.categories().await;
        match &result {
            Ok(categories) => tracing::info!("Loaded {} categories", categories.len()),
            Err(e) => tracing::warn!("Category fetch failed: {}", e),
        }
        flight.settle(result, CATEGORIES_FALLBACK_ERROR);
    }

    pub fn state(&self) -> FetchState<Category> {
        self.state.snapshot()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.state.with_state(|s| s.data.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.state.error()
    }

    /// Handle for readers that outlive a borrow of the provider
    pub fn shared(&self) -> SharedFetchState<Category> {
        self.state.clone()
    }
}
