// fixtures/mod.rs - Sample catalog data
//
// A small, fixed catalog in the shape the storefront REST API returns.
// Tests use it to script fake APIs and mock servers; the catalog binary
// can browse it offline with `--offline`.

pub mod catalog;

pub use catalog::{
    sample_categories, sample_products, sample_products_in, SampleStoreApi, PRODUCTS_JSON,
};
