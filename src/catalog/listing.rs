//! Common item interface
//!
//! Recipes and windmill goods are filtered, sorted and displayed through the
//! same [`Listing`] trait. [`CatalogItem`] tags a borrowed entry with the
//! catalog it came from when both catalogs are searched together.

use std::borrow::Cow;

use super::goods::WindmillGood;
use super::price;
use super::recipe::Recipe;

/// Capabilities shared by every catalog entry
pub trait Listing {
    fn name(&self) -> &str;

    /// Ingredients in display order
    fn ingredients(&self) -> &[String];

    /// Raw price text, if any
    fn price(&self) -> Option<&str>;

    /// Stable identity within the entry's catalog
    fn identity_key(&self) -> Cow<'_, str>;

    /// Numeric key for price sorting
    fn price_sort_value(&self) -> f64 {
        price::price_sort_value(self.price())
    }

    /// Price label for display
    fn display_price(&self) -> &str {
        price::price_display(self.price())
    }
}

impl Listing for Recipe {
    fn name(&self) -> &str {
        &self.name
    }

    fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    fn identity_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

impl Listing for WindmillGood {
    fn name(&self) -> &str {
        &self.name
    }

    fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    // The same good can be listed on more than one windmill
    fn identity_key(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{}{}", self.name, self.windmill.name()))
    }
}

/// A catalog entry tagged with its source catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogItem<'a> {
    Recipe(&'a Recipe),
    Good(&'a WindmillGood),
}

impl<'a> CatalogItem<'a> {
    pub fn as_recipe(&self) -> Option<&'a Recipe> {
        match *self {
            CatalogItem::Recipe(recipe) => Some(recipe),
            CatalogItem::Good(_) => None,
        }
    }

    pub fn as_good(&self) -> Option<&'a WindmillGood> {
        match *self {
            CatalogItem::Good(good) => Some(good),
            CatalogItem::Recipe(_) => None,
        }
    }
}

impl<'a> From<&'a Recipe> for CatalogItem<'a> {
    fn from(recipe: &'a Recipe) -> Self {
        CatalogItem::Recipe(recipe)
    }
}

impl<'a> From<&'a WindmillGood> for CatalogItem<'a> {
    fn from(good: &'a WindmillGood) -> Self {
        CatalogItem::Good(good)
    }
}

impl Listing for CatalogItem<'_> {
    fn name(&self) -> &str {
        match self {
            CatalogItem::Recipe(recipe) => recipe.name(),
            CatalogItem::Good(good) => good.name(),
        }
    }

    fn ingredients(&self) -> &[String] {
        match self {
            CatalogItem::Recipe(recipe) => recipe.ingredients(),
            CatalogItem::Good(good) => good.ingredients(),
        }
    }

    fn price(&self) -> Option<&str> {
        match self {
            CatalogItem::Recipe(recipe) => recipe.price(),
            CatalogItem::Good(good) => good.price(),
        }
    }

    fn identity_key(&self) -> Cow<'_, str> {
        match self {
            CatalogItem::Recipe(recipe) => recipe.identity_key(),
            CatalogItem::Good(good) => good.identity_key(),
        }
    }
}

impl<T: Listing + ?Sized> Listing for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn ingredients(&self) -> &[String] {
        (**self).ingredients()
    }

    fn price(&self) -> Option<&str> {
        (**self).price()
    }

    fn identity_key(&self) -> Cow<'_, str> {
        (**self).identity_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RecipeCategory, WindmillColor};

    #[test]
    fn test_goods_identity_includes_windmill() {
        let red = WindmillGood::new("Flour", WindmillColor::Red, &["Wheat"]);
        let blue = WindmillGood::new("Flour", WindmillColor::Blue, &["Wheat"]);
        assert_ne!(red.identity_key(), blue.identity_key());
    }

    #[test]
    fn test_tagged_item_delegates() {
        let recipe = Recipe::new("Pizza", RecipeCategory::MainDish, &["Flour", "Cheese"])
            .with_price("1,500 G");
        let item = CatalogItem::from(&recipe);

        assert_eq!(item.as_recipe().map(|r| r.category), Some(RecipeCategory::MainDish));
        assert_eq!(item.name(), "Pizza");
        assert_eq!(item.ingredients().len(), 2);
        assert_eq!(item.price_sort_value(), 1500.0);
        assert_eq!(item.display_price(), "1,500 G");
        assert!(item.as_good().is_none());
    }
}
