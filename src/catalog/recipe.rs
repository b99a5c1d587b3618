//! Kitchen recipe definitions
//!
//! Recipe records, their menu categories, and effect label handling.

use serde::{Deserialize, Serialize};

/// Menu category a recipe belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipeCategory {
    Salad,
    Soup,
    Side,
    MainDish,
    Dessert,
    Other,
}

impl RecipeCategory {
    /// Every category in menu order
    pub const ALL: [RecipeCategory; 6] = [
        RecipeCategory::Salad,
        RecipeCategory::Soup,
        RecipeCategory::Side,
        RecipeCategory::MainDish,
        RecipeCategory::Dessert,
        RecipeCategory::Other,
    ];

    /// Get category name as shown in the catalog
    pub fn name(&self) -> &'static str {
        match self {
            RecipeCategory::Salad => "Salad",
            RecipeCategory::Soup => "Soup",
            RecipeCategory::Side => "Side",
            RecipeCategory::MainDish => "Main Dish",
            RecipeCategory::Dessert => "Dessert",
            RecipeCategory::Other => "Other",
        }
    }

    /// Get display color RGB
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            RecipeCategory::Salad => (30, 92, 47),
            RecipeCategory::Soup => (26, 74, 107),
            RecipeCategory::Side => (92, 61, 0),
            RecipeCategory::MainDish => (107, 26, 26),
            RecipeCategory::Dessert => (90, 26, 107),
            RecipeCategory::Other => (46, 26, 107),
        }
    }
}

/// A kitchen recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Ingredients in display order
    pub ingredients: Vec<String>,
    /// Category the recipe is filed under
    #[serde(rename = "cat")]
    pub category: RecipeCategory,
    /// Raw sale price text, e.g. "1,200 G", "N/A" or "Unique"
    #[serde(default)]
    pub price: Option<String>,
    /// Effect label, e.g. "Fatigue Recovery Lv. 3"
    #[serde(default)]
    pub effect: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

impl Recipe {
    /// Create a recipe with no price, effect or artwork
    pub fn new(name: impl Into<String>, category: RecipeCategory, ingredients: &[&str]) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            category,
            price: None,
            effect: None,
            img: None,
            time: None,
        }
    }

    /// Builder-style price setter
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Builder-style effect setter
    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }

    /// Effect name without its level, "" when the recipe has no effect
    pub fn effect_category(&self) -> &str {
        strip_level(self.effect.as_deref().unwrap_or(""))
    }
}

/// Strip a trailing " Lv. <digits>" token from an effect label
///
/// `"Fatigue Recovery Lv. 3"` becomes `"Fatigue Recovery"`; labels without a
/// level are returned trimmed.
pub fn strip_level(effect: &str) -> &str {
    let without_level = effect
        .rfind("Lv.")
        .filter(|&at| {
            let (head, tail) = effect.split_at(at);
            let digits = tail["Lv.".len()..].trim_start();
            head.ends_with(char::is_whitespace)
                && !digits.is_empty()
                && digits.chars().all(|c| c.is_ascii_digit())
        })
        .map_or(effect, |at| &effect[..at]);

    without_level.trim()
}
