// web_app/pages/mod.rs - Page components module
//
// - ProductsPage: category filter, sorting and paginated product grid

pub mod products;

// Re-export page components
pub use products::ProductsPage;
