// web_app/pages/mod.rs - Page components module
//
// - ProductFilterPage: the product list with its search and stock filters
// - ProductFilterView: the same screen driven by caller-owned signals

pub mod products;

// Re-export page components
pub use products::{ProductFilterPage, ProductFilterView};
