// web_app/state/products.rs - Product list provider
//
// `fetch(None)` and `fetch(Some("all"))` load the whole catalog; any other
// category loads the category-scoped endpoint.

use crate::web_app::api::StoreApi;
use crate::web_app::model::{FetchState, Product};

use super::fetch::SharedFetchState;

/// Shown when a product fetch fails without a message
pub const PRODUCTS_FALLBACK_ERROR: &str = "Failed to load products";

/// Loads the product list, optionally filtered by category
pub struct ProductProvider<A> {
    api: A,
    state: SharedFetchState<Product>,
}

impl<A: StoreApi> ProductProvider<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: SharedFetchState::new(),
        }
    }

    /// Fetches products; failures end up in [`Self::error`]
    ///
    /// Overlapping calls do not cancel each other, but only the most
    /// recently started call may update the state.
    pub async fn fetch(&self, category: Option<&str>) {
        let flight = self.state.begin();
        tracing::debug!(
            "Fetching products for {:?} (request #{})",
            category.unwrap_or("all"),
            flight.seq()
        );

        let result = self.api.products(category).await;
        match &result {
            Ok(products) => tracing::info!("Loaded {} products", products.len()),
            Err(e) => tracing::warn!("Product fetch failed: {}", e),
        }
        flight.settle(result, PRODUCTS_FALLBACK_ERROR);
    }

    pub fn state(&self) -> FetchState<Product> {
        self.state.snapshot()
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.with_state(|s| s.data.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.state.error()
    }

    pub fn shared(&self) -> SharedFetchState<Product> {
        self.state.clone()
    }
}
