//! Application configuration, read from an optional JSON file.

use crate::charts::ChartLayout;
use crate::scene::SceneId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Path to the config file, overriding the default lookup.
pub const CONFIG_ENV: &str = "CLIMATE_SCENES_CONFIG";
/// Overrides `data_dir` from the file.
pub const DATA_DIR_ENV: &str = "CLIMATE_SCENES_DATA_DIR";
pub const DEFAULT_CONFIG_FILE: &str = "climate_scenes.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the scene CSV files.
    pub data_dir: PathBuf,
    pub initial_scene: SceneId,
    pub layout: ChartLayout,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            initial_scene: SceneId::Scene1,
            layout: ChartLayout::default(),
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the configuration from the environment.
    ///
    /// Uses `$CLIMATE_SCENES_CONFIG` if set, else `climate_scenes.json` in the
    /// working directory if present, else defaults. `$CLIMATE_SCENES_DATA_DIR`
    /// then overrides `data_dir`.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let data_dir = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        Self::resolve(explicit.as_deref(), data_dir)
    }

    fn resolve(explicit: Option<&Path>, data_dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"initial_scene": 3, "layout": {"height": 600}}"#).unwrap();

        let config = AppConfig::from_file(&path).unwrap();

        assert_eq!(config.initial_scene, SceneId::Scene3);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.layout.height, 600.0);
        assert_eq!(config.layout.width, 800.0);
    }

    #[test]
    fn test_invalid_scene_id_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"initial_scene": 4}"#).unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let err = AppConfig::resolve(Some(Path::new("/nonexistent/config.json")), None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_data_dir_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"data_dir": "from_file"}"#).unwrap();

        let config = AppConfig::resolve(Some(&path), Some(PathBuf::from("from_env"))).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("from_env"));

        let config = AppConfig::resolve(Some(&path), None).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("from_file"));
    }
}
