//! Price sorting
//!
//! Sorting is stable in both directions. Many items share the "no price"
//! key, and they keep their catalog order among themselves.

use std::cmp::Ordering;

use crate::catalog::Listing;
use super::filter::SortOrder;

/// Sort items by price in place
pub fn sort_by_price<T: Listing>(items: &mut [T], order: SortOrder) {
    match order {
        SortOrder::Unsorted => {}
        SortOrder::Ascending => items.sort_by(compare_price),
        SortOrder::Descending => items.sort_by(|a, b| compare_price(b, a)),
    }
}

/// Compare two items by price sort value
fn compare_price<T: Listing>(a: &T, b: &T) -> Ordering {
    a.price_sort_value().total_cmp(&b.price_sort_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Recipe, RecipeCategory};

    fn priced(name: &str, price: Option<&str>) -> Recipe {
        let recipe = Recipe::new(name, RecipeCategory::Other, &["x"]);
        match price {
            Some(p) => recipe.with_price(p),
            None => recipe,
        }
    }

    fn names(items: &[Recipe]) -> Vec<&str> {
        items.iter().map(|r| r.name.as_str()).collect()
    }

    fn sample() -> Vec<Recipe> {
        vec![
            priced("Cake", Some("1,500 G")),
            priced("Gift", Some("Unique")),
            priced("Tea", Some("80 G")),
            priced("Rice", None),
            priced("Stew", Some("N/A")),
        ]
    }

    #[test]
    fn test_unsorted_keeps_order() {
        let mut items = sample();
        sort_by_price(&mut items, SortOrder::Unsorted);
        assert_eq!(names(&items), ["Cake", "Gift", "Tea", "Rice", "Stew"]);
    }

    #[test]
    fn test_ascending_puts_unpriced_first() {
        let mut items = sample();
        sort_by_price(&mut items, SortOrder::Ascending);
        assert_eq!(names(&items), ["Gift", "Rice", "Stew", "Tea", "Cake"]);
    }

    #[test]
    fn test_descending_puts_unpriced_last_in_input_order() {
        let mut items = sample();
        sort_by_price(&mut items, SortOrder::Descending);
        assert_eq!(names(&items), ["Cake", "Tea", "Gift", "Rice", "Stew"]);
    }

    #[test]
    fn test_sort_borrowed_items() {
        let owned = sample();
        let mut borrowed: Vec<&Recipe> = owned.iter().collect();
        sort_by_price(&mut borrowed, SortOrder::Ascending);
        assert_eq!(borrowed.last().map(|r| r.name.as_str()), Some("Cake"));
    }
}
