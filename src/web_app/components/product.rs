// web_app/components/product.rs - Product table components
//
// - ProductTable: header row plus one section per category group
// - CategoryRow: bold category heading
// - ProductRow: name (styled by stock) and price

use leptos::prelude::*;

use crate::web_app::model::{GroupedView, Product, RowStyle};

pub const NAME_HEADER: &str = "Name";
pub const PRICE_HEADER: &str = "Price";

/// Two-column product table
///
/// Re-renders the rows whenever `groups` changes; an empty view leaves
/// only the header.
#[component]
pub fn ProductTable(
    /// Grouped view to display
    #[prop(into)]
    groups: Signal<GroupedView>,
) -> impl IntoView {
    view! {
        <div class="w-full">
            <div class="flex justify-between font-bold">
                <span>{NAME_HEADER}</span>
                <span>{PRICE_HEADER}</span>
            </div>

            {move || {
                groups
                    .get()
                    .into_iter()
                    .map(|group| {
                        view! {
                            <section>
                                <CategoryRow category=group.category />
                                {group
                                    .products
                                    .into_iter()
                                    .map(|product| view! { <ProductRow product=product /> })
                                    .collect_view()}
                            </section>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn CategoryRow(category: String) -> impl IntoView {
    view! {
        <h3 class="font-bold py-2">{category}</h3>
    }
}

/// A single product line; out-of-stock names are highlighted
#[component]
pub fn ProductRow(product: Product) -> impl IntoView {
    let style = RowStyle::for_product(&product);

    view! {
        <div class="flex justify-between">
            <span class=style.name_class() title=style.to_string()>{product.name}</span>
            <span>{product.price}</span>
        </div>
    }
}
