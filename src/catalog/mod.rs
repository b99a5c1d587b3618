//! Item catalog
//!
//! The two read-only collections the finder searches: kitchen recipes and
//! windmill goods, plus the lookup lists derived from them.

pub mod recipe;
pub mod goods;
pub mod listing;
pub mod price;

use std::collections::BTreeSet;

pub use recipe::{Recipe, RecipeCategory, strip_level};
pub use goods::{WindmillGood, WindmillColor};
pub use listing::{Listing, CatalogItem};
pub use price::{price_sort_value, price_display, price_sort_key, NO_PRICE_LABEL, NO_PRICE_KEY};

/// Immutable recipe and goods catalog
///
/// Entries keep their declaration order. The effect category list is built
/// once here and never recomputed.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    goods: Vec<WindmillGood>,
    effect_categories: Vec<String>,
}

impl Catalog {
    /// Build a catalog from recipe and goods lists
    pub fn new(recipes: Vec<Recipe>, goods: Vec<WindmillGood>) -> Self {
        let effect_categories = derive_effect_categories(&recipes);
        log::debug!(
            "Catalog built: {} recipes, {} goods, {} effect categories",
            recipes.len(),
            goods.len(),
            effect_categories.len()
        );

        Self {
            recipes,
            goods,
            effect_categories,
        }
    }

    /// Recipes in catalog order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Windmill goods in catalog order
    pub fn goods(&self) -> &[WindmillGood] {
        &self.goods
    }

    /// Distinct effect names (level stripped), sorted alphabetically
    pub fn effect_categories(&self) -> &[String] {
        &self.effect_categories
    }

    /// Total number of entries across both catalogs
    pub fn len(&self) -> usize {
        self.recipes.len() + self.goods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collect the distinct effect names of every recipe that has an effect
fn derive_effect_categories(recipes: &[Recipe]) -> Vec<String> {
    recipes
        .iter()
        .filter(|r| r.effect.as_deref().is_some_and(|e| !e.is_empty()))
        .map(|r| r.effect_category().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
