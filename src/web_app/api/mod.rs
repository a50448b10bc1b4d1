// web_app/api/mod.rs - Catalog API access
//
// The state providers talk to the catalog through the StoreApi trait so
// tests can script responses. HttpStoreApi is the real REST client.

pub mod client;

pub use client::HttpStoreApi;

use async_trait::async_trait;
use url::Url;

use crate::web_app::error::FetchError;
use crate::web_app::model::{is_category_filter, Category, Product};

/// Read access to the storefront catalog
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait StoreApi {
    /// `GET {base}/products/categories`
    async fn categories(&self) -> Result<Vec<Category>, FetchError>;

    /// `GET {base}/products` or `GET {base}/products/category/{category}`
    async fn products(&self, category: Option<&str>) -> Result<Vec<Product>, FetchError>;
}

/// URL of the category list endpoint
pub fn categories_url(base: &str) -> Result<Url, FetchError> {
    endpoint(base, &["products", "categories"])
}

/// URL of the product list, scoped to `category` unless it is absent or "all"
pub fn products_url(base: &str, category: Option<&str>) -> Result<Url, FetchError> {
    match category {
        Some(c) if is_category_filter(Some(c)) => endpoint(base, &["products", "category", c]),
        _ => endpoint(base, &["products"]),
    }
}

// Segments are percent-encoded individually, so a category like
// "men's clothing" stays a single path segment.
fn endpoint(base: &str, segments: &[&str]) -> Result<Url, FetchError> {
    let mut url = Url::parse(base)
        .map_err(|e| FetchError::Transport(format!("invalid API base {base:?}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| FetchError::Transport(format!("invalid API base {base:?}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
