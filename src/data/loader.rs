//! RON catalog loader
//!
//! Loads the recipe and windmill catalogs from external RON files, with
//! fallback to the built-in catalogs for any file that is missing or broken.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::catalog::{Catalog, Recipe, WindmillGood};
use super::recipes::default_recipes;
use super::windmill::default_goods;

/// Directory searched when no data directory is configured
pub const DEFAULT_DATA_DIR: &str = "assets/data";

const RECIPES_FILE: &str = "recipes.ron";
const GOODS_FILE: &str = "windmill.ron";

/// Errors reading or writing catalog files
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize {name}: {source}")]
    Serialize {
        name: &'static str,
        #[source]
        source: ron::Error,
    },
}

/// Raw catalog contents before they are frozen into a [`Catalog`]
#[derive(Debug, Clone)]
pub struct CatalogData {
    pub recipes: Vec<Recipe>,
    pub goods: Vec<WindmillGood>,
}

impl CatalogData {
    /// Load each catalog file from `dir`, falling back to built-ins per file
    pub fn load_from_dir(dir: &Path) -> Self {
        Self {
            recipes: load_or_default(&dir.join(RECIPES_FILE), default_recipes),
            goods: load_or_default(&dir.join(GOODS_FILE), default_goods),
        }
    }

    /// Freeze into an immutable catalog
    pub fn into_catalog(self) -> Catalog {
        Catalog::new(self.recipes, self.goods)
    }
}

impl Default for CatalogData {
    fn default() -> Self {
        Self {
            recipes: default_recipes(),
            goods: default_goods(),
        }
    }
}

/// Read a RON file into `T`
pub fn read_ron<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    ron::from_str(&content).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a catalog file, or build the fallback if it is missing or broken
fn load_or_default<T>(path: &Path, fallback: fn() -> Vec<T>) -> Vec<T>
where
    T: DeserializeOwned,
{
    if !path.exists() {
        log::info!("{} not found, using built-in catalog", path.display());
        return fallback();
    }

    match read_ron::<Vec<T>>(path) {
        Ok(entries) => {
            log::info!("Loaded {} entries from {}", entries.len(), path.display());
            entries
        }
        Err(e) => {
            log::warn!("{}. Using built-in catalog", e);
            fallback()
        }
    }
}

/// Write `value` as pretty RON
fn write_ron<T: Serialize>(path: &Path, name: &'static str, value: &T) -> Result<(), DataError> {
    let ron = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
        .map_err(|source| DataError::Serialize { name, source })?;

    fs::write(path, ron).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Export the built-in catalogs to RON files in `dir` for easy editing
pub fn export_default_data(dir: &Path) -> Result<(), DataError> {
    fs::create_dir_all(dir).map_err(|source| DataError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    write_ron(&dir.join(RECIPES_FILE), "recipes", &default_recipes())?;
    write_ron(&dir.join(GOODS_FILE), "windmill goods", &default_goods())?;

    log::info!("Exported built-in catalogs to {}", dir.display());
    Ok(())
}
