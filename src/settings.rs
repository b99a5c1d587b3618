//! Viewer settings
//!
//! Persistent preferences for the terminal viewer, stored as JSON in the
//! platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::DEFAULT_DATA_DIR;
use crate::query::Mode;

/// Errors reading or writing the settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write settings to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Viewer preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderSettings {
    /// Directory holding `recipes.ron` and `windmill.ron`
    pub data_dir: PathBuf,
    /// Mode the viewer opens in
    pub start_mode: Mode,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for FinderSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            start_mode: Mode::Recipes,
            log_level: "info".to_string(),
        }
    }
}

/// Get the settings file path
pub fn settings_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "bazaar-finder", "BazaarFinder") {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push("settings.json");
        path
    } else {
        PathBuf::from("./settings.json")
    }
}

/// Read settings from `path` without logging
///
/// Returns `Ok(None)` when no file exists yet. Callers that start logging
/// after reading settings report the error themselves.
pub fn read_settings(path: &Path) -> Result<Option<FinderSettings>, SettingsError> {
    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = serde_json::from_str(&data).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(settings))
}

/// Settings to run with after a [`read_settings`] of `path`
///
/// A missing file gives defaults quietly; a broken one gives defaults with
/// a warning. Call this once logging is up so the warning reaches the log.
pub fn resolve_settings(
    path: &Path,
    read: Result<Option<FinderSettings>, SettingsError>,
) -> FinderSettings {
    match read {
        Ok(Some(settings)) => {
            log::info!("Settings loaded from {:?}", path);
            settings
        }
        Ok(None) => FinderSettings::default(),
        Err(e) => {
            log::warn!("{}, using defaults", e);
            FinderSettings::default()
        }
    }
}

/// Save settings to `path`, creating its directory if needed
pub fn save_settings_to(settings: &FinderSettings, path: &Path) -> Result<(), SettingsError> {
    let io_error = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).map_err(io_error)?;

    log::info!("Settings saved to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(path: &Path) -> FinderSettings {
        resolve_settings(path, read_settings(path))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load(&dir.path().join("settings.json"));
        assert_eq!(settings, FinderSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = FinderSettings {
            data_dir: PathBuf::from("/srv/bazaar"),
            start_mode: Mode::All,
            log_level: "debug".to_string(),
        };

        save_settings_to(&settings, &path).unwrap();
        assert_eq!(load(&path), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "start_mode": "Goods" }"#).unwrap();

        let settings = load(&path);
        assert_eq!(settings.start_mode, Mode::Goods);
        assert_eq!(settings.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn test_read_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let read = read_settings(&dir.path().join("settings.json")).unwrap();
        assert!(read.is_none());
    }

    #[test]
    fn test_read_keeps_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_settings(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains("settings.json"));
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load(&path), FinderSettings::default());
    }
}
