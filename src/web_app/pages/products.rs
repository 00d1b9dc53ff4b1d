// web_app/pages/products.rs - Product filter page
//
// Owns the filter state and recomputes the grouped view whenever either
// input changes. Children only receive signals.

use leptos::prelude::*;

use crate::web_app::catalog;
use crate::web_app::components::*;
use crate::web_app::model::FilterState;

/// Single-screen product list, starting unfiltered
#[component]
pub fn ProductFilterPage() -> impl IntoView {
    let initial = FilterState::default();

    // Filter state
    let search_query = RwSignal::new(initial.search_query);
    let only_in_stock = RwSignal::new(initial.only_in_stock);

    view! {
        <ProductFilterView search_query=search_query only_in_stock=only_in_stock />
    }
}

/// Filter controls plus the table they drive
///
/// Composes:
/// - Search field
/// - "Only show products in stock" checkbox
/// - Grouped product table, recomputed from the two signals
#[component]
pub fn ProductFilterView(
    /// Current search text
    search_query: RwSignal<String>,
    /// Whether only stocked products are shown
    only_in_stock: RwSignal<bool>,
) -> impl IntoView {
    let filters = Memo::new(move |_| FilterState {
        search_query: search_query.get(),
        only_in_stock: only_in_stock.get(),
    });

    let grouped = Memo::new(move |_| filters.get().apply(catalog::products()));

    view! {
        <div class="p-4 max-w-xl mx-auto font-sans text-gray-900">
            <SearchBar query=search_query />
            <InStockToggle in_stock_only=only_in_stock />
            <ProductTable groups=grouped />
        </div>
    }
}
