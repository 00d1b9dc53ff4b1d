// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used by the filter logic and by every component,
// on the server during SSR and in the browser after hydration.

use serde::{Deserialize, Serialize};

/// Case-fold a single char, independent of its neighbours.
///
/// Upper-cases first and then lower-cases, taking the simple one-char
/// mapping at each step, so 'Σ', 'σ' and 'ς' all fold to 'σ' and the
/// Kelvin sign folds to 'k'.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    let upper = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    upper.to_lowercase().next().unwrap_or(upper)
}

/// Fold every char of `s` with [`fold_char`]; the result has the same char count
pub fn fold_case(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// A catalog entry (no identity field, equality is by value)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    /// Pre-formatted with its currency symbol, never parsed
    pub price: String,
    pub stocked: bool,
}

impl Product {
    pub fn new(
        category: impl Into<String>,
        price: impl Into<String>,
        stocked: bool,
        name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price: price.into(),
            stocked,
        }
    }

    /// Whether this product survives the given filter inputs.
    ///
    /// The name match is a case-insensitive substring test compared char
    /// by char (see [`fold_case`]), so an empty query matches every product.
    pub fn matches(&self, search_query: &str, only_in_stock: bool) -> bool {
        if only_in_stock && !self.stocked {
            return false;
        }
        fold_case(&self.name).contains(&fold_case(search_query))
    }
}

/// User-controlled filter inputs
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_query: String,
    pub only_in_stock: bool,
}

impl FilterState {
    pub fn new(search_query: impl Into<String>, only_in_stock: bool) -> Self {
        Self {
            search_query: search_query.into(),
            only_in_stock,
        }
    }

    /// Run the filter-and-group pass over `catalog` with this state.
    pub fn apply(&self, catalog: &[Product]) -> GroupedView {
        crate::web_app::filter::filter_and_group(catalog, &self.search_query, self.only_in_stock)
    }
}

/// One category and its matching products, in catalog order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    pub products: Vec<Product>,
}

/// Filtered products grouped by category, in first-occurrence order
pub type GroupedView = Vec<CategoryGroup>;

/// How a product name is rendered in the table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowStyle {
    #[default]
    InStock,
    OutOfStock,
}

impl RowStyle {
    pub fn for_product(product: &Product) -> Self {
        Self::from(product.stocked)
    }

    /// Utility class applied to the name cell
    pub fn name_class(self) -> &'static str {
        match self {
            RowStyle::InStock => "text-gray-900",
            RowStyle::OutOfStock => "text-red-600",
        }
    }
}

impl From<bool> for RowStyle {
    fn from(stocked: bool) -> Self {
        if stocked {
            RowStyle::InStock
        } else {
            RowStyle::OutOfStock
        }
    }
}

impl std::fmt::Display for RowStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowStyle::InStock => write!(f, "In stock"),
            RowStyle::OutOfStock => write!(f, "Out of stock"),
        }
    }
}
