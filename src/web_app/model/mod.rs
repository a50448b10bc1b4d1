// web_app/model/mod.rs - Shared data models for client and server
//
// These types mirror what the storefront REST API returns. Product records
// are read leniently: a field that is missing or has the wrong type reads
// as empty instead of failing the whole response.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A category is just its display name
pub type Category = String;

/// Category value meaning "no filter applied"
pub const ALL_CATEGORIES: &str = "all";

/// Returns true when `category` selects a real category (not empty, not "all")
pub fn is_category_filter(category: Option<&str>) -> bool {
    matches!(category, Some(c) if !c.is_empty() && c != ALL_CATEGORIES)
}

/// Product rating as reported by the API
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default, deserialize_with = "lenient_number")]
    pub rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: Option<u64>,
}

/// Product record (open schema)
///
/// Only `price` and `rating.rate` take part in sorting. Fields the model does
/// not know about are kept in `extra` so nothing from the response is lost.
/// Known fields of an unexpected type read as empty, so one odd record never
/// fails a whole response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient_count")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: Option<Rating>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Price, or 0 when absent
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// `rating.rate`, or 0 when either level is absent
    pub fn rating_rate(&self) -> f64 {
        self.rating.and_then(|r| r.rate).unwrap_or(0.0)
    }

    /// Reads one element of a product list
    ///
    /// Anything that is not an object becomes an empty product, which sorts
    /// with price and rating 0.
    pub fn from_json(value: Value) -> Self {
        if !value.is_object() {
            tracing::debug!("Non-object product record: {}", value);
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Reads a product list element by element (see [`Product::from_json`])
pub fn products_from_json(values: Vec<Value>) -> Vec<Product> {
    values.into_iter().map(Product::from_json).collect()
}

/// Numeric keys used by client-side sorting
///
/// Implementations must fall back to 0 when a value is missing.
pub trait SortKeys {
    fn price(&self) -> f64;
    fn rating_rate(&self) -> f64;
}

impl SortKeys for Product {
    fn price(&self) -> f64 {
        self.price_or_zero()
    }

    fn rating_rate(&self) -> f64 {
        Product::rating_rate(self)
    }
}

/// Client-side sort order for product listings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    RatingAsc,
    RatingDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Default,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::RatingAsc,
        SortOption::RatingDesc,
    ];

    /// Value used in select boxes and query strings
    pub fn as_query(&self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceAsc => "priceAsc",
            SortOption::PriceDesc => "priceDesc",
            SortOption::RatingAsc => "ratingAsc",
            SortOption::RatingDesc => "ratingDesc",
        }
    }

    /// Inverse of [`SortOption::as_query`]; unknown values map to `Default`
    pub fn parse(s: &str) -> Self {
        match s {
            "priceAsc" => SortOption::PriceAsc,
            "priceDesc" => SortOption::PriceDesc,
            "ratingAsc" => SortOption::RatingAsc,
            "ratingDesc" => SortOption::RatingDesc,
            _ => SortOption::Default,
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOption::Default => write!(f, "Default"),
            SortOption::PriceAsc => write!(f, "Price: Low to High"),
            SortOption::PriceDesc => write!(f, "Price: High to Low"),
            SortOption::RatingAsc => write!(f, "Rating: Low to High"),
            SortOption::RatingDesc => write!(f, "Rating: High to Low"),
        }
    }
}

/// Lifecycle of one asynchronous list request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FetchState<T> {
    pub data: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    /// Marks a request as started: loading, previous error cleared
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Stores a successful response and ends the request
    pub fn succeed(&mut self, data: Vec<T>) {
        self.data = data;
        self.error = None;
        self.loading = false;
    }

    /// Stores a failure message and ends the request; previous data is kept
    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<Rating>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
