//! Catalog data
//!
//! This module supplies the recipe and windmill catalogs, either from
//! external RON files or from the built-in defaults.

pub mod loader;
pub mod recipes;
pub mod windmill;

pub use loader::{CatalogData, DataError, DEFAULT_DATA_DIR, export_default_data, read_ron};
pub use recipes::default_recipes;
pub use windmill::default_goods;
