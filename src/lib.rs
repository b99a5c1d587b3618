//! Bazaar Finder - Recipe and windmill goods search for Grand Bazaar
//!
//! Narrow the kitchen recipe and windmill goods catalogs down by locked
//! ingredients, free text, category, effect and windmill, and sort them
//! by price.

pub mod catalog;
pub mod query;
pub mod session;
pub mod data;
pub mod settings;
pub mod ui;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogItem, Listing, Recipe, RecipeCategory, WindmillColor, WindmillGood};
pub use query::{FilterState, Mode, QueryEngine, SortOrder};
pub use session::Session;
