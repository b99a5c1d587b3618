//! Built-in windmill goods catalog
//!
//! Used when no `windmill.ron` is present in the data directory.

use crate::catalog::{WindmillColor, WindmillGood};

fn good(name: &str, windmill: WindmillColor, ingredients: &[&str], price: &str, time: &str) -> WindmillGood {
    WindmillGood::new(name, windmill, ingredients)
        .with_price(price)
        .with_time(time)
}

/// The default goods list, grouped by windmill
pub fn default_goods() -> Vec<WindmillGood> {
    use WindmillColor::*;

    vec![
        // Red windmill: seeds and grains
        good("Flour", Red, &["Wheat"], "70 G", "1 day"),
        good("Rice Flour", Red, &["Rice"], "80 G", "1 day"),
        good("Curry Powder", Red, &["Chili", "Turmeric"], "150 G", "2 days"),
        good("Turnip Seeds", Red, &["Turnip"], "N/A", "1 day"),
        good("Pumpkin Seeds", Red, &["Pumpkin"], "N/A", "2 days"),

        // Blue windmill: dairy and drinks
        good("Butter", Blue, &["Milk"], "180 G", "1 day"),
        good("Cheese", Blue, &["Milk"], "260 G", "2 days"),
        good("Mayonnaise", Blue, &["Egg", "Oil"], "200 G", "1 day"),
        good("Apple Juice", Blue, &["Apple"], "120 G", "1 day"),
        good("Flour", Blue, &["Wheat"], "75 G", "1 day"),
        good("Windmill Churn", Blue, &["Lumber", "Iron Ore", "Wonderstone"], "Unique", "5 days"),

        // Yellow windmill: materials and crafts
        good("Lumber", Yellow, &["Branch"], "30 G", "1 day"),
        good("Yarn Ball", Yellow, &["Wool"], "240 G", "2 days"),
        good("Cloth", Yellow, &["Yarn Ball", "Yarn Ball"], "1,200 G", "3 days"),
        good("Jewelry Stand", Yellow, &["Lumber", "Silver Ore"], "Unique", "4 days"),
        good("Sun Stone", Yellow, &["Gold Ore", "Wonderstone"], "2,500 G", "5 days"),
        good("Travel Stone", Yellow, &["Amethyst", "Wonderstone"], "N/A", "3 days"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Listing;
    use std::collections::HashSet;

    #[test]
    fn test_goods_identity_is_unique() {
        let goods = default_goods();
        let keys: HashSet<String> = goods.iter().map(|g| g.identity_key().into_owned()).collect();
        assert_eq!(keys.len(), goods.len());
    }

    #[test]
    fn test_shared_names_across_windmills() {
        let goods = default_goods();
        let flour = goods.iter().filter(|g| g.name == "Flour").count();
        assert_eq!(flour, 2);
    }
}
