// common/mod.rs - Shared test utilities
//
// - ScriptedApi: in-memory StoreApi that records every call
// - GatedApi: StoreApi whose product responses are released by the test,
//   in any order, to drive overlapping fetches
// - mock_catalog: real HTTP server for HttpStoreApi tests

#![allow(dead_code)]

pub mod mock_catalog;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use storefront_state::fixtures::{sample_categories, sample_products};
use storefront_state::web_app::api::StoreApi;
use storefront_state::web_app::model::is_category_filter;
use storefront_state::{Category, FetchError, Product};
use tokio::sync::oneshot;

/// One recorded StoreApi call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Categories,
    Products(Option<String>),
}

#[derive(Default)]
struct Script {
    categories: Vec<Category>,
    products: Vec<Product>,
    failure: Option<String>,
    calls: Vec<Call>,
}

/// StoreApi answering from a fixed catalog, optionally failing every call
#[derive(Clone, Default)]
pub struct ScriptedApi {
    script: Arc<Mutex<Script>>,
}

impl ScriptedApi {
    /// Backed by the sample catalog
    pub fn with_sample_catalog() -> Self {
        let api = Self::default();
        {
            let mut script = api.script.lock().unwrap();
            script.categories = sample_categories().unwrap();
            script.products = sample_products().unwrap();
        }
        api
    }

    /// Every following call fails with a transport error carrying `message`
    pub fn fail_with(&self, message: &str) {
        self.script.lock().unwrap().failure = Some(message.to_string());
    }

    pub fn recover(&self) {
        self.script.lock().unwrap().failure = None;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().unwrap().calls.clone()
    }
}

#[async_trait]
impl StoreApi for ScriptedApi {
    async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(Call::Categories);
        match &script.failure {
            Some(message) => Err(FetchError::Transport(message.clone())),
            None => Ok(script.categories.clone()),
        }
    }

    async fn products(&self, category: Option<&str>) -> Result<Vec<Product>, FetchError> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(Call::Products(category.map(str::to_string)));
        if let Some(message) = &script.failure {
            return Err(FetchError::Transport(message.clone()));
        }
        Ok(script
            .products
            .iter()
            .filter(|p| !is_category_filter(category) || Some(p.category.as_str()) == category)
            .cloned()
            .collect())
    }
}

type ProductsResult = Result<Vec<Product>, FetchError>;

/// StoreApi whose product responses wait for the test to release them
///
/// Requests are keyed by category ("all" when unscoped).
#[derive(Clone, Default)]
pub struct GatedApi {
    gates: Arc<Mutex<HashMap<String, oneshot::Receiver<ProductsResult>>>>,
}

impl GatedApi {
    /// Registers the gate for `key`; send on the returned sender to answer
    pub fn gate(&self, key: &str) -> oneshot::Sender<ProductsResult> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(key.to_string(), rx);
        tx
    }
}

#[async_trait]
impl StoreApi for GatedApi {
    async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        Ok(Vec::new())
    }

    async fn products(&self, category: Option<&str>) -> Result<Vec<Product>, FetchError> {
        let key = category.unwrap_or("all").to_string();
        let gate = self.gates.lock().unwrap().remove(&key);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(FetchError::Transport("gate dropped".into()))),
            None => Err(FetchError::Transport(format!("no gate for {key}"))),
        }
    }
}

/// Products with the given titles and prices, no ratings
pub fn priced(items: &[(&str, f64)]) -> Vec<Product> {
    items
        .iter()
        .map(|(title, price)| Product {
            title: title.to_string(),
            price: Some(*price),
            ..Product::default()
        })
        .collect()
}

pub fn titles(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.title.as_str()).collect()
}
