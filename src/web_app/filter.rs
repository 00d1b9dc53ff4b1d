// web_app/filter.rs - Filter-and-group pass over the catalog
//
// This is the only logic behind the screen: the page calls it on every
// keystroke or toggle and renders whatever it returns.

use crate::web_app::model::{CategoryGroup, GroupedView, Product};

/// Select matching products and group them by category.
///
/// - a product is kept when its name contains `search_query`
///   (case-insensitive) and, if `only_in_stock` is set, it is stocked
/// - groups appear in the order their category is first met in `catalog`
/// - products keep catalog order inside their group
/// - category keys compare exactly, so "fruits" and "Fruits" are two groups
pub fn filter_and_group(
    catalog: &[Product],
    search_query: &str,
    only_in_stock: bool,
) -> GroupedView {
    let mut groups: GroupedView = Vec::new();

    for product in catalog.iter().filter(|p| p.matches(search_query, only_in_stock)) {
        match groups.iter_mut().find(|g| g.category == product.category) {
            Some(group) => group.products.push(product.clone()),
            None => groups.push(CategoryGroup {
                category: product.category.clone(),
                products: vec![product.clone()],
            }),
        }
    }

    tracing::debug!(
        "Filter: query='{}', only_in_stock={}, groups={}, matches={}",
        search_query,
        only_in_stock,
        groups.len(),
        match_count(&groups)
    );

    groups
}

/// Total number of products across all groups
pub fn match_count(groups: &[CategoryGroup]) -> usize {
    groups.iter().map(|g| g.products.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(category: &str, name: &str, stocked: bool) -> Product {
        Product::new(category, "$1", stocked, name)
    }

    #[test]
    fn test_empty_catalog() {
        assert!(filter_and_group(&[], "", false).is_empty());
        assert!(filter_and_group(&[], "apple", true).is_empty());
    }

    #[test]
    fn test_interleaved_categories_merge_into_first_group() {
        let catalog = vec![
            product("B", "b1", true),
            product("A", "a1", true),
            product("B", "b2", true),
        ];

        let groups = filter_and_group(&catalog, "", false);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "B");
        assert_eq!(groups[0].products, vec![catalog[0].clone(), catalog[2].clone()]);
        assert_eq!(groups[1].category, "A");
    }

    #[test]
    fn test_group_order_follows_filtered_scan() {
        // "A" is first in the catalog but filtered out, so "B" leads.
        let catalog = vec![
            product("A", "skip", true),
            product("B", "keep", true),
            product("A", "keep too", true),
        ];

        let groups = filter_and_group(&catalog, "keep", false);

        let categories: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, ["B", "A"]);
    }

    #[test]
    fn test_category_key_is_case_sensitive() {
        let catalog = vec![product("Fruits", "x", true), product("fruits", "y", true)];

        let groups = filter_and_group(&catalog, "", false);

        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_match_count() {
        let catalog = vec![
            product("A", "one", true),
            product("B", "two", false),
            product("A", "three", true),
        ];

        assert_eq!(match_count(&filter_and_group(&catalog, "", false)), 3);
        assert_eq!(match_count(&filter_and_group(&catalog, "", true)), 2);
        assert_eq!(match_count(&[]), 0);
    }

    #[test]
    fn test_duplicate_products_are_kept() {
        let apple = product("Fruits", "Apple", true);
        let catalog = vec![apple.clone(), apple.clone()];

        let groups = filter_and_group(&catalog, "apple", false);

        assert_eq!(groups[0].products, vec![apple.clone(), apple]);
    }
}
