//! Query engine
//!
//! Runs the catalog predicates over one or both catalogs and applies the
//! price sort. Results borrow from the catalog and keep catalog order until
//! sorted.

use crate::catalog::{Catalog, CatalogItem, Recipe, WindmillGood};
use super::filter::{FilterState, Mode};
use super::predicate::Predicate;
use super::sort::sort_by_price;

/// Filters a catalog against a [`FilterState`]
pub struct QueryEngine<'a> {
    catalog: &'a Catalog,
    recipe_predicate: Predicate<Recipe>,
    goods_predicate: Predicate<WindmillGood>,
}

impl<'a> QueryEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            recipe_predicate: Predicate::recipes(),
            goods_predicate: Predicate::goods(),
        }
    }

    /// The catalog being searched
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Recipes matching the filter, in catalog order
    pub fn query_recipes(&self, filter: &FilterState) -> Vec<&'a Recipe> {
        self.catalog
            .recipes()
            .iter()
            .filter(|r| self.recipe_predicate.matches(r, filter))
            .collect()
    }

    /// Windmill goods matching the filter, in catalog order
    pub fn query_goods(&self, filter: &FilterState) -> Vec<&'a WindmillGood> {
        self.catalog
            .goods()
            .iter()
            .filter(|g| self.goods_predicate.matches(g, filter))
            .collect()
    }

    /// Matching recipes followed by matching goods, each tagged with its source
    pub fn query_all(&self, filter: &FilterState) -> Vec<CatalogItem<'a>> {
        let recipes = self.query_recipes(filter).into_iter().map(CatalogItem::from);
        let goods = self.query_goods(filter).into_iter().map(CatalogItem::from);
        recipes.chain(goods).collect()
    }

    /// Full pipeline for a mode: filter, then sort by price
    pub fn run(&self, mode: Mode, filter: &FilterState) -> Vec<CatalogItem<'a>> {
        let mut items: Vec<CatalogItem<'a>> = match mode {
            Mode::Recipes => self.query_recipes(filter).into_iter().map(CatalogItem::from).collect(),
            Mode::Goods => self.query_goods(filter).into_iter().map(CatalogItem::from).collect(),
            Mode::All => self.query_all(filter),
        };
        sort_by_price(&mut items, filter.sort_order);
        items
    }

    /// Number of entries in the active mode before filtering
    pub fn total_count(&self, mode: Mode) -> usize {
        match mode {
            Mode::Recipes => self.catalog.recipes().len(),
            Mode::Goods => self.catalog.goods().len(),
            Mode::All => self.catalog.len(),
        }
    }
}
