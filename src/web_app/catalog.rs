// web_app/catalog.rs - The fixed product catalog
//
// Built once on first access and shared read-only for the life of the
// process (every SSR request and the hydrated client read the same list).

use std::sync::LazyLock;

use crate::web_app::model::Product;

static CATALOG: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product::new("Fruits", "$1", true, "Apple"),
        Product::new("Fruits", "$1", true, "Dragonfruit"),
        Product::new("Fruits", "$2", false, "Passionfruit"),
        Product::new("Vegetables", "$2", true, "Spinach"),
        Product::new("Vegetables", "$4", false, "Pumpkin"),
        Product::new("Vegetables", "$1", true, "Peas"),
    ]
});

/// All products, in display order
pub fn products() -> &'static [Product] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(products().len(), 6);
    }

    #[test]
    fn test_catalog_order() {
        let names: Vec<&str> = products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["Apple", "Dragonfruit", "Passionfruit", "Spinach", "Pumpkin", "Peas"]
        );
    }

    #[test]
    fn test_catalog_stock_flags() {
        let out_of_stock: Vec<&str> = products()
            .iter()
            .filter(|p| !p.stocked)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(out_of_stock, ["Passionfruit", "Pumpkin"]);
    }

    #[test]
    fn test_catalog_prices_are_preformatted() {
        assert!(products().iter().all(|p| p.price.starts_with('$')));
    }

    #[test]
    fn test_catalog_is_shared() {
        assert!(std::ptr::eq(products(), products()));
    }
}
