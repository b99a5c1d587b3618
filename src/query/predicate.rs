//! Item predicates
//!
//! An item matches a filter when every gate in its catalog's [`Predicate`]
//! passes. Gates are checked in order and stop at the first failure.
//! Inside a gate, matching is OR-based: a locked ingredient is satisfied by
//! any of the item's ingredients, and free text by any ingredient or the name.

use crate::catalog::{Listing, Recipe, WindmillGood};
use super::filter::FilterState;
use super::normalize::contains;

/// A single independent filter check
pub type Gate<T> = fn(&T, &FilterState) -> bool;

/// Recipe category must match the selected category
pub fn category_gate(recipe: &Recipe, filter: &FilterState) -> bool {
    filter.category.map_or(true, |cat| recipe.category == cat)
}

/// Windmill color must match the selected color
pub fn windmill_gate(good: &WindmillGood, filter: &FilterState) -> bool {
    filter.windmill_color.map_or(true, |color| good.windmill == color)
}

/// Effect name (level stripped) must match the selected effect
pub fn effect_gate(recipe: &Recipe, filter: &FilterState) -> bool {
    filter
        .effect_category
        .as_deref()
        .map_or(true, |effect| recipe.effect_category() == effect)
}

/// Every locked ingredient must match at least one of the item's ingredients
pub fn ingredient_lock_gate<T: Listing>(item: &T, filter: &FilterState) -> bool {
    filter
        .selected
        .iter()
        .all(|locked| item.ingredients().iter().any(|i| contains(i, locked)))
}

/// Free text must match an ingredient or the item name
pub fn free_text_gate<T: Listing>(item: &T, filter: &FilterState) -> bool {
    if filter.text.is_empty() {
        return true;
    }
    item.ingredients().iter().any(|i| contains(i, &filter.text)) || contains(item.name(), &filter.text)
}

/// Ordered gate list for one catalog
pub struct Predicate<T: 'static> {
    gates: &'static [Gate<T>],
}

impl Predicate<Recipe> {
    /// Category, effect, locked ingredients, free text
    pub fn recipes() -> Self {
        const GATES: &[Gate<Recipe>] = &[
            category_gate,
            effect_gate,
            ingredient_lock_gate::<Recipe>,
            free_text_gate::<Recipe>,
        ];
        Self { gates: GATES }
    }
}

impl Predicate<WindmillGood> {
    /// Windmill color, locked ingredients, free text
    pub fn goods() -> Self {
        const GATES: &[Gate<WindmillGood>] = &[
            windmill_gate,
            ingredient_lock_gate::<WindmillGood>,
            free_text_gate::<WindmillGood>,
        ];
        Self { gates: GATES }
    }
}

impl<T: 'static> Predicate<T> {
    /// Check if an item passes every gate
    pub fn matches(&self, item: &T, filter: &FilterState) -> bool {
        self.gates.iter().all(|gate| gate(item, filter))
    }

    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }
}
