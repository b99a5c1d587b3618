//! Browsing session
//!
//! Owns the filter state and the current mode, accepts user intents, and
//! recomputes results on demand. The last result is memoized against the
//! state that produced it.

mod summary;

use std::cell::RefCell;

use crate::catalog::{Catalog, CatalogItem, RecipeCategory, WindmillColor};
use crate::query::{contains, same_key, FilterState, Mode, QueryEngine, SortOrder};

pub use summary::ResultSummary;

/// How an ingredient badge should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientMark {
    /// Matches a locked ingredient
    Locked,
    /// Matches the text being typed
    Typed,
    Plain,
}

/// Memoized pipeline output and the state it was computed for
struct CachedResults<'a> {
    mode: Mode,
    filter: FilterState,
    items: Vec<CatalogItem<'a>>,
}

/// One user's browsing session over a catalog
pub struct Session<'a> {
    engine: QueryEngine<'a>,
    mode: Mode,
    filter: FilterState,
    cache: RefCell<Option<CachedResults<'a>>>,
}

impl<'a> Session<'a> {
    /// Start a session in recipe mode
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_mode(catalog, Mode::default())
    }

    /// Start a session in the given mode
    pub fn with_mode(catalog: &'a Catalog, mode: Mode) -> Self {
        Self {
            engine: QueryEngine::new(catalog),
            mode,
            filter: FilterState::default(),
            cache: RefCell::new(None),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.engine.catalog()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    // ========================================================================
    // Intents
    // ========================================================================

    /// Replace the free-text query
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.filter.text = text.into();
    }

    pub fn clear_text(&mut self) {
        self.filter.text.clear();
    }

    /// Lock an ingredient so every result must contain it
    ///
    /// Blank input and ingredients already locked (ignoring case and
    /// surrounding whitespace) are ignored. Returns whether it was locked;
    /// the text query is cleared only when it was.
    pub fn lock_ingredient(&mut self, ingredient: &str) -> bool {
        let trimmed = ingredient.trim();
        if trimmed.is_empty() {
            return false;
        }
        if self.filter.selected.iter().any(|s| same_key(s, trimmed)) {
            log::debug!("Ingredient '{}' already locked", trimmed);
            return false;
        }

        self.filter.selected.push(trimmed.to_string());
        self.filter.text.clear();
        log::debug!("Locked ingredient '{}' ({} locked)", trimmed, self.filter.selected.len());
        true
    }

    /// Remove the locked ingredient at `index`, if any
    pub fn unlock_ingredient(&mut self, index: usize) -> Option<String> {
        if index < self.filter.selected.len() {
            Some(self.filter.selected.remove(index))
        } else {
            None
        }
    }

    pub fn clear_ingredients(&mut self) {
        self.filter.selected.clear();
    }

    /// Set the recipe category filter, `None` for all
    pub fn set_category(&mut self, category: Option<RecipeCategory>) {
        self.filter.category = category;
    }

    /// Set the effect filter, `None` for all effects
    pub fn set_effect_category(&mut self, effect: Option<String>) {
        self.filter.effect_category = effect;
    }

    /// Set the windmill filter, `None` for all windmills
    pub fn set_windmill_color(&mut self, color: Option<WindmillColor>) {
        self.filter.windmill_color = color;
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.filter.sort_order = order;
    }

    /// Switch catalogs, resetting every filter
    pub fn switch_mode(&mut self, mode: Mode) {
        log::info!("Switching mode {:?} -> {:?}", self.mode, mode);
        self.filter = FilterState::default();
        self.mode = mode;
    }

    // ========================================================================
    // Outputs
    // ========================================================================

    /// Filtered and sorted results for the current state
    pub fn results(&self) -> Vec<CatalogItem<'a>> {
        let mut cache = self.cache.borrow_mut();
        if let Some(cached) = cache.as_ref() {
            if cached.mode == self.mode && cached.filter == self.filter {
                return cached.items.clone();
            }
        }

        let items = self.engine.run(self.mode, &self.filter);
        log::trace!("Recomputed {:?} results: {} items", self.mode, items.len());
        *cache = Some(CachedResults {
            mode: self.mode,
            filter: self.filter.clone(),
            items: items.clone(),
        });
        items
    }

    /// Number of entries in the active mode before filtering
    pub fn total_count(&self) -> usize {
        self.engine.total_count(self.mode)
    }

    /// Check if any filter that applies to the current mode is narrowing results
    pub fn has_active_filters(&self) -> bool {
        !self.filter.selected.is_empty()
            || (self.mode.shows_recipes()
                && (self.filter.category.is_some() || self.filter.effect_category.is_some()))
            || (self.mode.shows_goods() && self.filter.windmill_color.is_some())
    }

    /// Whether the "press Enter to lock" hint should be shown
    pub fn show_hint(&self) -> bool {
        !self.has_active_filters() && self.filter.text.is_empty()
    }

    /// Result count line for the current state
    pub fn summary(&self) -> ResultSummary {
        ResultSummary::new(self.mode, self.results().len(), self.total_count())
    }

    /// Highlight for an ingredient badge on a result card
    pub fn ingredient_mark(&self, ingredient: &str) -> IngredientMark {
        if self.filter.selected.iter().any(|s| contains(ingredient, s)) {
            IngredientMark::Locked
        } else if !self.filter.text.is_empty() && contains(ingredient, &self.filter.text) {
            IngredientMark::Typed
        } else {
            IngredientMark::Plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Listing, Recipe, WindmillGood};

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Recipe::new("Salad", RecipeCategory::Salad, &["Lettuce", "Tomato"])
                    .with_price("120 G")
                    .with_effect("Energy Lv. 1"),
                Recipe::new("Soup A", RecipeCategory::Soup, &["Tomato"])
                    .with_price("N/A")
                    .with_effect(""),
                Recipe::new("Custard", RecipeCategory::Dessert, &["Milk", "Egg", "Sugar"])
                    .with_price("300 G"),
                Recipe::new("Hot Milk", RecipeCategory::Other, &["Milk"]).with_price("50 G"),
            ],
            vec![
                WindmillGood::new("Butter", WindmillColor::Blue, &["Milk"]).with_price("150 G"),
                WindmillGood::new("Flour", WindmillColor::Red, &["Wheat"]).with_price("Unique"),
            ],
        )
    }

    fn names(session: &Session<'_>) -> Vec<String> {
        session.results().iter().map(|i| i.name().to_string()).collect()
    }

    #[test]
    fn test_end_to_end_text_sort_and_lock() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);

        session.set_text("tomato");
        assert_eq!(names(&session), ["Salad", "Soup A"]);

        session.set_sort_order(SortOrder::Ascending);
        assert_eq!(names(&session), ["Soup A", "Salad"]);

        assert!(session.lock_ingredient("Lettuce"));
        assert_eq!(session.filter().text, "");
        assert_eq!(names(&session), ["Salad"]);
    }

    #[test]
    fn test_lock_requires_every_ingredient() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);

        session.lock_ingredient("Milk");
        let milk_only = names(&session);
        assert_eq!(milk_only, ["Custard", "Hot Milk"]);

        session.lock_ingredient("Egg");
        let milk_and_egg = names(&session);
        assert_eq!(milk_and_egg, ["Custard"]);
        assert!(milk_and_egg.iter().all(|n| milk_only.contains(n)));
    }

    #[test]
    fn test_lock_rejects_blank_and_duplicates() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);

        session.set_text("mil");
        assert!(!session.lock_ingredient("   "));
        assert!(session.lock_ingredient("  Milk "));
        assert!(!session.lock_ingredient("milk"));
        assert_eq!(session.filter().selected, ["Milk"]);
    }

    #[test]
    fn test_unlock_and_clear() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);
        session.lock_ingredient("Milk");
        session.lock_ingredient("Egg");

        assert_eq!(session.unlock_ingredient(5), None);
        assert_eq!(session.unlock_ingredient(0), Some("Milk".to_string()));
        assert_eq!(session.filter().selected, ["Egg"]);

        session.clear_ingredients();
        assert!(session.filter().selected.is_empty());
    }

    #[test]
    fn test_switch_mode_resets_filters() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);
        session.set_text("milk");
        session.lock_ingredient("Egg");
        session.set_text("sug");
        session.set_category(Some(RecipeCategory::Dessert));
        session.set_effect_category(Some("Energy".to_string()));
        session.set_windmill_color(Some(WindmillColor::Blue));
        session.set_sort_order(SortOrder::Descending);

        session.switch_mode(Mode::Goods);

        assert_eq!(session.mode(), Mode::Goods);
        assert!(session.filter().is_default());
        assert_eq!(session.filter().text, "");
        assert!(session.filter().selected.is_empty());
        assert_eq!(session.filter().category, None);
        assert_eq!(session.filter().windmill_color, None);
        assert_eq!(session.filter().effect_category, None);
        assert_eq!(session.filter().sort_order, SortOrder::Unsorted);
    }

    #[test]
    fn test_results_follow_state_changes() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);

        let first = session.results();
        assert_eq!(first, session.results());

        session.set_category(Some(RecipeCategory::Soup));
        assert_eq!(names(&session), ["Soup A"]);

        session.set_category(None);
        assert_eq!(session.results(), first);
    }

    #[test]
    fn test_effect_filter() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);
        assert_eq!(catalog.effect_categories(), ["Energy"]);

        session.set_effect_category(Some("Energy".to_string()));
        assert_eq!(names(&session), ["Salad"]);
    }

    #[test]
    fn test_all_mode_merges_catalogs() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);
        session.switch_mode(Mode::All);
        session.lock_ingredient("milk");

        assert_eq!(names(&session), ["Custard", "Hot Milk", "Butter"]);
        assert_eq!(session.total_count(), 6);
    }

    #[test]
    fn test_has_active_filters_depends_on_mode() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);
        assert!(!session.has_active_filters());
        assert!(session.show_hint());

        // Windmill filter does not apply to recipes
        session.set_windmill_color(Some(WindmillColor::Red));
        assert!(!session.has_active_filters());

        session.switch_mode(Mode::Goods);
        session.set_category(Some(RecipeCategory::Salad));
        assert!(!session.has_active_filters());
        session.set_windmill_color(Some(WindmillColor::Red));
        assert!(session.has_active_filters());

        session.switch_mode(Mode::All);
        session.set_effect_category(Some("Energy".to_string()));
        assert!(session.has_active_filters());

        session.switch_mode(Mode::Recipes);
        session.set_text("egg");
        assert!(!session.has_active_filters());
        assert!(!session.show_hint());
        session.lock_ingredient("egg");
        assert!(session.has_active_filters());
    }

    #[test]
    fn test_ingredient_marks() {
        let catalog = catalog();
        let mut session = Session::new(&catalog);
        session.lock_ingredient("milk");
        session.set_text("eg");

        assert_eq!(session.ingredient_mark("Large Milk"), IngredientMark::Locked);
        assert_eq!(session.ingredient_mark("Egg"), IngredientMark::Typed);
        assert_eq!(session.ingredient_mark("Sugar"), IngredientMark::Plain);
    }
}
