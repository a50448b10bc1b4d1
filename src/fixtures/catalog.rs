// fixtures/catalog.rs
//
// Ten products across four categories. Prices and rates are chosen so every
// sort order is distinct, with one price tie (9.99) to exercise stable sorting.

use async_trait::async_trait;

use crate::web_app::api::StoreApi;
use crate::web_app::error::FetchError;
use crate::web_app::model::{is_category_filter, Category, Product};

/// Raw `/products` response body
pub const PRODUCTS_JSON: &str = r#"[
  {"id": 1, "title": "Canvas Backpack", "price": 109.95, "description": "Fits 15 inch laptops in the padded sleeve.", "category": "men's clothing", "image": "https://img.example/1.jpg", "rating": {"rate": 3.9, "count": 120}},
  {"id": 2, "title": "Slim Fit T-Shirt", "price": 22.3, "description": "Lightweight cotton tee.", "category": "men's clothing", "image": "https://img.example/2.jpg", "rating": {"rate": 4.1, "count": 259}},
  {"id": 3, "title": "Cotton Jacket", "price": 55.99, "description": "Great outerwear for spring and autumn.", "category": "men's clothing", "image": "https://img.example/3.jpg", "rating": {"rate": 4.7, "count": 500}},
  {"id": 4, "title": "Chain Bracelet", "price": 695.0, "description": "Silver dragon chain bracelet.", "category": "jewelery", "image": "https://img.example/4.jpg", "rating": {"rate": 4.6, "count": 400}},
  {"id": 5, "title": "Gold Petite Micropave", "price": 168.0, "description": "Satisfaction guaranteed.", "category": "jewelery", "image": "https://img.example/5.jpg", "rating": {"rate": 3.0, "count": 70}},
  {"id": 6, "title": "Portable Hard Drive 2TB", "price": 64.0, "description": "USB 3.0 and USB 2.0 compatible.", "category": "electronics", "image": "https://img.example/6.jpg", "rating": {"rate": 3.3, "count": 203}},
  {"id": 7, "title": "SSD 1TB", "price": 109.0, "description": "Fast boot and load times.", "category": "electronics", "image": "https://img.example/7.jpg", "rating": {"rate": 2.9, "count": 470}},
  {"id": 8, "title": "USB Cable", "price": 9.99, "description": "Braided, one metre.", "category": "electronics", "image": "https://img.example/8.jpg", "rating": {"rate": 4.8, "count": 319}},
  {"id": 9, "title": "Rain Jacket", "price": 39.99, "description": "Lightweight and waterproof.", "category": "women's clothing", "image": "https://img.example/9.jpg", "rating": {"rate": 3.8, "count": 679}},
  {"id": 10, "title": "Cotton Socks", "price": 9.99, "description": "Pack of three.", "category": "women's clothing", "image": "https://img.example/10.jpg", "rating": {"rate": 2.2, "count": 130}}
]"#;

/// The whole sample catalog
pub fn sample_products() -> serde_json::Result<Vec<Product>> {
    serde_json::from_str(PRODUCTS_JSON)
}

/// Products of one category, in catalog order
pub fn sample_products_in(category: &str) -> serde_json::Result<Vec<Product>> {
    Ok(sample_products()?
        .into_iter()
        .filter(|p| p.category == category)
        .collect())
}

/// Distinct categories in order of first appearance
pub fn sample_categories() -> serde_json::Result<Vec<Category>> {
    let mut categories: Vec<Category> = Vec::new();
    for product in sample_products()? {
        if !categories.contains(&product.category) {
            categories.push(product.category);
        }
    }
    Ok(categories)
}

/// StoreApi answering from the sample catalog
#[derive(Clone, Copy, Debug, Default)]
pub struct SampleStoreApi;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl StoreApi for SampleStoreApi {
    async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        sample_categories().map_err(|e| FetchError::Decode(e.to_string()))
    }

    async fn products(&self, category: Option<&str>) -> Result<Vec<Product>, FetchError> {
        let products = match category {
            Some(c) if is_category_filter(Some(c)) => sample_products_in(c),
            _ => sample_products(),
        };
        products.map_err(|e| FetchError::Decode(e.to_string()))
    }
}
