// web_app/config.rs - Storefront configuration
//
// Defaults point at the public fake store API. Native builds can override
// them from the environment (binaries call dotenv::dotenv() first).

use crate::web_app::error::ConfigError;

/// Base URL of the public catalog API
pub const DEFAULT_API_BASE: &str = "https://fakestoreapi.com";

/// Products shown per page
pub const DEFAULT_PER_PAGE: usize = 4;

/// Runtime configuration for the storefront
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// API root without trailing slash, e.g. `https://fakestoreapi.com`
    pub api_base: String,
    /// Page size used by pagination
    pub per_page: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl StoreConfig {
    /// Builds a config from optional raw values, validating each one
    pub fn from_values(
        api_base: Option<&str>,
        per_page: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            let parsed = url::Url::parse(base).map_err(|_| ConfigError::InvalidUrl {
                name: "STORE_API_BASE",
                value: base.to_string(),
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidUrl {
                    name: "STORE_API_BASE",
                    value: base.to_string(),
                });
            }
            config.api_base = base.trim_end_matches('/').to_string();
        }

        if let Some(raw) = per_page.map(str::trim).filter(|p| !p.is_empty()) {
            config.per_page = match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        name: "STORE_PER_PAGE",
                        value: raw.to_string(),
                    })
                }
            };
        }

        Ok(config)
    }

    /// Reads `STORE_API_BASE` and `STORE_PER_PAGE`, keeping defaults for unset ones
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base = std::env::var("STORE_API_BASE").ok();
        let per_page = std::env::var("STORE_PER_PAGE").ok();
        Self::from_values(api_base.as_deref(), per_page.as_deref())
    }
}
