// web_app/components/search.rs - Filter controls
//
// - SearchBar: free-text name filter
// - InStockToggle: "only in stock" checkbox

use leptos::prelude::*;

use super::common::{Checkbox, TextInput};

pub const SEARCH_PLACEHOLDER: &str = "Search...";
pub const IN_STOCK_LABEL: &str = "Only show products in stock";

/// Search field; every keystroke updates `query`
#[component]
pub fn SearchBar(
    /// Current search query
    query: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="mb-2">
            <TextInput value=query placeholder=SEARCH_PLACEHOLDER input_type="search" />
        </div>
    }
}

#[component]
pub fn InStockToggle(
    /// Whether to show only in-stock items
    in_stock_only: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <Checkbox checked=in_stock_only label=IN_STOCK_LABEL />
        </div>
    }
}
