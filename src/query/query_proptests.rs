use super::*;
use crate::catalog::{Catalog, Listing, Recipe, RecipeCategory, WindmillColor, WindmillGood};
use proptest::prelude::*;

const INGREDIENTS: [&str; 8] = ["Milk", "Egg", "Flour", "Tomato", "Large Milk", "Wheat", "Honey", "Apple"];
const PRICES: [&str; 7] = ["N/A", "Unique", "120 G", "1,200 G", "80 G", "120 G", "junk"];
const EFFECTS: [&str; 5] = ["Stamina Lv. 2", "Stamina", "", "Fatigue Recovery Lv. 1", "Lv. 3"];
const EFFECT_CATEGORIES: [&str; 4] = ["Stamina", "Fatigue Recovery", "Lv. 3", "Speed"];

/// Optional raw price drawn from a small pool so ties are common
fn price_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(PRICES.to_vec()).prop_map(String::from))
}

fn ingredients_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(INGREDIENTS.to_vec(), 1..4)
        .prop_map(|list| list.into_iter().map(String::from).collect())
}

fn recipe_strategy() -> impl Strategy<Value = Recipe> {
    (
        0u32..1000,
        ingredients_strategy(),
        prop::sample::select(RecipeCategory::ALL.to_vec()),
        price_strategy(),
        prop::option::of(prop::sample::select(EFFECTS.to_vec())),
    )
        .prop_map(|(id, ingredients, category, price, effect)| Recipe {
            name: format!("Recipe {id}"),
            ingredients,
            category,
            price,
            effect: effect.map(String::from),
            img: None,
            time: None,
        })
}

fn good_strategy() -> impl Strategy<Value = WindmillGood> {
    (
        0u32..1000,
        ingredients_strategy(),
        prop::sample::select(WindmillColor::ALL.to_vec()),
        price_strategy(),
    )
        .prop_map(|(id, ingredients, windmill, price)| WindmillGood {
            name: format!("Good {id}"),
            ingredients,
            windmill,
            price,
            img: None,
            time: None,
        })
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    (
        prop::collection::vec(recipe_strategy(), 0..20),
        prop::collection::vec(good_strategy(), 0..20),
    )
        .prop_map(|(recipes, goods)| Catalog::new(recipes, goods))
}

fn filter_strategy() -> impl Strategy<Value = FilterState> {
    (
        prop::sample::select(vec!["", "milk", " EGG", "recipe 1", "ap"]),
        prop::sample::subsequence(INGREDIENTS.to_vec(), 0..3),
        prop::option::of(prop::sample::select(RecipeCategory::ALL.to_vec())),
        prop::option::of(prop::sample::select(EFFECT_CATEGORIES.to_vec())),
        prop::option::of(prop::sample::select(WindmillColor::ALL.to_vec())),
        prop::sample::select(SortOrder::ALL.to_vec()),
    )
        .prop_map(|(text, selected, category, effect_category, windmill_color, sort_order)| FilterState {
            text: text.to_string(),
            selected: selected.into_iter().map(String::from).collect(),
            category,
            effect_category: effect_category.map(String::from),
            windmill_color,
            sort_order,
        })
}

fn keys(items: &[crate::catalog::CatalogItem<'_>]) -> Vec<String> {
    items.iter().map(|i| i.identity_key().into_owned()).collect()
}

proptest! {
    /// The pipeline is pure: the same inputs give the same sequence
    #[test]
    fn prop_pipeline_is_idempotent(
        catalog in catalog_strategy(),
        filter in filter_strategy(),
        mode in prop::sample::select(Mode::ALL.to_vec())
    ) {
        let engine = QueryEngine::new(&catalog);
        let first = engine.run(mode, &filter);
        let second = engine.run(mode, &filter);
        prop_assert_eq!(first, second);
    }

    /// Locking one more ingredient never adds results
    #[test]
    fn prop_extra_lock_narrows_results(
        catalog in catalog_strategy(),
        filter in filter_strategy(),
        extra in prop::sample::select(INGREDIENTS.to_vec())
    ) {
        let engine = QueryEngine::new(&catalog);
        let broad = keys(&engine.query_all(&filter));

        let mut narrow_filter = filter.clone();
        narrow_filter.selected.push(extra.to_string());
        let narrow = keys(&engine.query_all(&narrow_filter));

        prop_assert!(narrow.iter().all(|k| broad.contains(k)));
    }

    /// Every result matches every locked ingredient
    #[test]
    fn prop_locked_ingredients_all_present(
        catalog in catalog_strategy(),
        filter in filter_strategy()
    ) {
        let engine = QueryEngine::new(&catalog);
        for item in engine.query_all(&filter) {
            for locked in &filter.selected {
                prop_assert!(item.ingredients().iter().any(|i| contains(i, locked)));
            }
        }
    }

    /// A chosen effect keeps exactly the recipes whose level-stripped effect equals it
    #[test]
    fn prop_effect_filter_matches_stripped_effect(
        catalog in catalog_strategy(),
        effect in prop::sample::select(EFFECT_CATEGORIES.to_vec())
    ) {
        let engine = QueryEngine::new(&catalog);
        let filter = FilterState {
            effect_category: Some(effect.to_string()),
            ..FilterState::default()
        };

        let results = engine.query_recipes(&filter);
        let found: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        let expected: Vec<&str> = catalog
            .recipes()
            .iter()
            .filter(|r| r.effect_category() == effect)
            .map(|r| r.name.as_str())
            .collect();
        prop_assert_eq!(found, expected);

        // Effect categories are exactly the distinct non-empty stripped effects
        for category in catalog.effect_categories() {
            prop_assert!(!category.is_empty());
            prop_assert!(catalog.recipes().iter().any(|r| r.effect_category() == category.as_str()));
        }
    }

    /// Sorting only reorders; items with equal price keep input order
    #[test]
    fn prop_sort_is_stable(
        recipes in prop::collection::vec(recipe_strategy(), 0..30),
        order in prop::sample::select(vec![SortOrder::Ascending, SortOrder::Descending])
    ) {
        let indexed: Vec<(usize, &Recipe)> = recipes.iter().enumerate().collect();
        let mut sorted: Vec<&Recipe> = recipes.iter().collect();
        sort_by_price(&mut sorted, order);

        let position = |r: &Recipe| indexed.iter().position(|(_, x)| std::ptr::eq(*x, r));
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (va, vb) = (a.price_sort_value(), b.price_sort_value());
            match order {
                SortOrder::Ascending => prop_assert!(va <= vb),
                _ => prop_assert!(va >= vb),
            }
            if va == vb {
                prop_assert!(position(a) < position(b));
            }
        }
    }
}
