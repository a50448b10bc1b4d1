// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loading, ErrorDisplay, StarRating...)
// - catalog.rs: Listing controls (SortDropdown, CategoryFilter, Pagination)
// - product.rs: Product display components (ProductCard, ResultsGrid)
// - layout.rs: Header, theme toggle and mobile menu

pub mod common;
pub mod catalog;
pub mod product;
pub mod layout;

// Re-export commonly used components for convenience
pub use common::*;
pub use catalog::*;
pub use product::*;
pub use layout::*;
