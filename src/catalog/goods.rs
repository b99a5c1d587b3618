//! Windmill goods
//!
//! Items crafted at the red, blue and yellow windmills.

use serde::{Deserialize, Serialize};

/// Names of goods that can only be made once the Purple Wonderstone is found
const WONDERSTONE_GOODS: [&str; 4] = ["windmill churn", "jewelry stand", "sun stone", "travel stone"];

/// Windmill wheel a good is produced on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindmillColor {
    Red,
    Blue,
    Yellow,
}

impl WindmillColor {
    /// Every windmill in display order
    pub const ALL: [WindmillColor; 3] = [WindmillColor::Red, WindmillColor::Blue, WindmillColor::Yellow];

    pub fn name(&self) -> &'static str {
        match self {
            WindmillColor::Red => "Red",
            WindmillColor::Blue => "Blue",
            WindmillColor::Yellow => "Yellow",
        }
    }

    /// Get display color RGB
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            WindmillColor::Red => (153, 27, 27),
            WindmillColor::Blue => (30, 64, 175),
            WindmillColor::Yellow => (133, 77, 14),
        }
    }
}

/// A good produced on a windmill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindmillGood {
    pub name: String,
    /// Input materials in display order
    pub ingredients: Vec<String>,
    pub windmill: WindmillColor,
    /// Raw sale price text, e.g. "2,500 G", "N/A" or "Unique"
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    /// Production time label
    #[serde(default)]
    pub time: Option<String>,
}

impl WindmillGood {
    /// Create a good with no price, artwork or production time
    pub fn new(name: impl Into<String>, windmill: WindmillColor, ingredients: &[&str]) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            windmill,
            price: None,
            img: None,
            time: None,
        }
    }

    /// Builder-style price setter
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Builder-style production time setter
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Check if crafting this good needs the Purple Wonderstone
    pub fn requires_purple_wonderstone(&self) -> bool {
        let name = self.name.to_lowercase();
        WONDERSTONE_GOODS.iter().any(|good| name.contains(good))
    }
}
