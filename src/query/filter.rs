//! Filter state
//!
//! Everything the user can narrow the catalog by. Every field has an "All"
//! default; [`FilterState::default`] is the state right after a mode switch.

use serde::{Deserialize, Serialize};

use crate::catalog::{RecipeCategory, WindmillColor};

/// Which catalog(s) are being browsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Kitchen recipes only
    #[default]
    Recipes,
    /// Windmill goods only
    Goods,
    /// Both catalogs merged
    All,
}

impl Mode {
    /// Every mode in toggle order
    pub const ALL: [Mode; 3] = [Mode::Recipes, Mode::Goods, Mode::All];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Recipes => "Kitchen Recipes",
            Mode::Goods => "Windmill Goods",
            Mode::All => "Search All",
        }
    }

    /// Whether recipe-only filters (category, effect) apply
    pub fn shows_recipes(&self) -> bool {
        matches!(self, Mode::Recipes | Mode::All)
    }

    /// Whether the windmill filter applies
    pub fn shows_goods(&self) -> bool {
        matches!(self, Mode::Goods | Mode::All)
    }
}

/// Price sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Catalog order
    #[default]
    Unsorted,
    /// Cheapest first
    Ascending,
    /// Priciest first
    Descending,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Unsorted, SortOrder::Ascending, SortOrder::Descending];

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Unsorted => "Default",
            SortOrder::Ascending => "Cheapest",
            SortOrder::Descending => "Priciest",
        }
    }
}

/// Current filter selections
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterState {
    /// Free-text query matched against ingredients and names
    pub text: String,
    /// Locked ingredients, in the order they were locked
    pub selected: Vec<String>,
    /// Recipe category, `None` for all
    pub category: Option<RecipeCategory>,
    /// Effect name without level, `None` for all effects
    pub effect_category: Option<String>,
    /// Windmill color, `None` for all
    pub windmill_color: Option<WindmillColor>,
    pub sort_order: SortOrder,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style text setter
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder-style locked ingredient list
    pub fn with_selected(mut self, selected: &[&str]) -> Self {
        self.selected = selected.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Check if every field is at its default
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
