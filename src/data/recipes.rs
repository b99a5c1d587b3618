//! Built-in kitchen recipe catalog
//!
//! Used when no `recipes.ron` is present in the data directory.

use crate::catalog::{Recipe, RecipeCategory};

/// Shorthand for a priced recipe with an effect
fn dish(name: &str, cat: RecipeCategory, ingredients: &[&str], price: &str, effect: &str) -> Recipe {
    let recipe = Recipe::new(name, cat, ingredients).with_price(price);
    if effect.is_empty() {
        recipe
    } else {
        recipe.with_effect(effect)
    }
}

/// The default recipe list, in menu order
pub fn default_recipes() -> Vec<Recipe> {
    use RecipeCategory::*;

    vec![
        // Salads
        dish("Green Salad", Salad, &["Cabbage", "Cucumber"], "160 G", "Fatigue Recovery Lv. 1"),
        dish("Tomato Salad", Salad, &["Tomato", "Onion"], "150 G", "Fatigue Recovery Lv. 1"),
        dish("Potato Salad", Salad, &["Potato", "Cucumber", "Mayonnaise"], "240 G", "Stamina Lv. 1"),
        dish("Fruit Salad", Salad, &["Apple", "Orange", "Grapes"], "310 G", "Stamina Lv. 2"),
        dish("Mushroom Salad", Salad, &["Mushroom", "Spinach"], "200 G", ""),

        // Soups
        dish("Corn Soup", Soup, &["Corn", "Milk"], "220 G", "Stamina Lv. 1"),
        dish("Tomato Soup", Soup, &["Tomato", "Onion"], "190 G", "Fatigue Recovery Lv. 2"),
        dish("Pumpkin Soup", Soup, &["Pumpkin", "Milk", "Butter"], "330 G", "Stamina Lv. 2"),
        dish("Miso Soup", Soup, &["Miso", "Tofu"], "140 G", ""),
        dish("Seafood Chowder", Soup, &["Fish", "Milk", "Potato"], "N/A", "Fatigue Recovery Lv. 3"),

        // Sides
        dish("Baked Potato", Side, &["Potato", "Butter"], "120 G", ""),
        dish("Bread", Side, &["Flour", "Yeast"], "90 G", ""),
        dish("Boiled Egg", Side, &["Egg"], "60 G", "Stamina Lv. 1"),
        dish("Fried Vegetables", Side, &["Cabbage", "Carrot", "Oil"], "180 G", "Fatigue Recovery Lv. 1"),
        dish("French Fries", Side, &["Potato", "Oil"], "150 G", ""),

        // Main dishes
        dish("Omelet", MainDish, &["Egg", "Milk", "Oil"], "260 G", "Stamina Lv. 2"),
        dish("Omelet Rice", MainDish, &["Egg", "Milk", "Rice", "Oil"], "420 G", "Stamina Lv. 3"),
        dish("Pizza", MainDish, &["Flour", "Cheese", "Tomato", "Onion"], "1,150 G", "Fatigue Recovery Lv. 3"),
        dish("Curry Rice", MainDish, &["Curry Powder", "Rice", "Carrot", "Onion", "Potato"], "1,380 G", "Stamina Lv. 3"),
        dish("Grilled Fish", MainDish, &["Fish"], "240 G", ""),
        dish("Gratin", MainDish, &["Milk", "Flour", "Butter", "Cheese"], "960 G", "Fatigue Recovery Lv. 2"),
        dish("Harvest Feast", MainDish, &["Wheat", "Rice", "Corn", "Pumpkin"], "Unique", "Stamina Lv. 5"),

        // Desserts
        dish("Custard Pudding", Dessert, &["Egg", "Milk", "Sugar"], "350 G", "Fatigue Recovery Lv. 2"),
        dish("Cheesecake", Dessert, &["Cheese", "Egg", "Milk", "Sugar"], "780 G", "Stamina Lv. 2"),
        dish("Apple Pie", Dessert, &["Apple", "Flour", "Butter", "Egg"], "820 G", "Fatigue Recovery Lv. 3"),
        dish("Ice Cream", Dessert, &["Milk", "Egg", "Sugar"], "300 G", ""),
        dish("Honey Cake", Dessert, &["Honey", "Flour", "Egg", "Butter"], "N/A", "Stamina Lv. 3"),

        // Other
        dish("Hot Milk", Other, &["Milk"], "80 G", "Fatigue Recovery Lv. 1"),
        dish("Apple Juice", Other, &["Apple"], "110 G", "Stamina Lv. 1"),
        dish("Herb Tea", Other, &["Herb"], "70 G", "Fatigue Recovery Lv. 1"),
        dish("Wonderful Dish", Other, &["Gold Ore", "Large Egg", "Large Milk"], "Unique", ""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_recipe_names_are_unique() {
        let recipes = default_recipes();
        let names: HashSet<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), recipes.len());
    }

    #[test]
    fn test_every_category_is_represented() {
        let recipes = default_recipes();
        for cat in RecipeCategory::ALL {
            assert!(recipes.iter().any(|r| r.category == cat), "No {} recipes", cat.name());
        }
    }
}
