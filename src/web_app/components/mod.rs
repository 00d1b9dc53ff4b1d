// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Input primitives (TextInput, Checkbox)
// - search.rs: Filter controls (SearchBar, InStockToggle)
// - product.rs: Product table (ProductTable, CategoryRow, ProductRow)

pub mod common;
pub mod search;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use search::*;
pub use product::*;
