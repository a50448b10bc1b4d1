// web_app/api/client.rs - REST client for the catalog API
//
// One GET per call. No retry and no timeout: a request that never settles
// leaves the calling provider in its loading state.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use super::{categories_url, products_url, StoreApi};
use crate::web_app::config::StoreConfig;
use crate::web_app::error::FetchError;
use crate::web_app::model::{products_from_json, Category, Product};

/// `StoreApi` backed by reqwest
#[derive(Clone, Debug)]
pub struct HttpStoreApi {
    client: Client,
    base: String,
}

impl HttpStoreApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base)
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.api_base.clone())
    }

    /// Reuses an existing client (shared connection pool)
    pub fn with_client(client: Client, base: impl Into<String>) -> Self {
        Self {
            client,
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl StoreApi for HttpStoreApi {
    async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        self.get_json(categories_url(&self.base)?).await
    }

    async fn products(&self, category: Option<&str>) -> Result<Vec<Product>, FetchError> {
        let records: Vec<Value> = self.get_json(products_url(&self.base, category)?).await?;
        Ok(products_from_json(records))
    }
}
