//! Application settings and paths.
//!
//! Manages XDG-compliant paths for configuration and record data.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory paths following the XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/roster)
    pub config_dir: PathBuf,
    /// Data directory (~/.local/share/roster)
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve paths using XDG directories.
    ///
    /// Nothing is created on disk; record files create their directory when
    /// first written.
    pub fn resolve() -> ConfigResult<Self> {
        let project =
            ProjectDirs::from("com", "roster", "roster").ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
            data_dir: project.data_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding record files. Falls back to the XDG data directory.
    pub data_dir: Option<PathBuf>,
    /// Record file base name used when `--file` is not given.
    pub default_file: String,
    /// Listing format used when `--format` is not given.
    pub default_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_file: "students".to_string(),
            default_format: "table".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default location, or defaults if absent.
    pub fn load(paths: &Paths) -> ConfigResult<Self> {
        let file = paths.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Directory holding record files.
    pub fn data_dir(&self, paths: &Paths) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| paths.data_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_paths(dir: &TempDir) -> Paths {
        Paths {
            config_dir: dir.path().join("config"),
            data_dir: dir.path().join("data"),
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_file, "students");
        assert_eq!(settings.default_format, "table");
        assert!(settings.data_dir.is_none());
    }

    #[test]
    fn test_missing_settings_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(&temp_paths(&dir)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_roundtrip_on_disk() {
        let dir = TempDir::new().unwrap();
        let paths = temp_paths(&dir);
        let settings = Settings {
            data_dir: Some(dir.path().join("records")),
            default_file: "class-a".to_string(),
            default_format: "json".to_string(),
        };

        fs::create_dir_all(&paths.config_dir).unwrap();
        fs::write(
            paths.settings_file(),
            serde_json::to_string_pretty(&settings).unwrap(),
        )
        .unwrap();
        assert_eq!(Settings::load(&paths).unwrap(), settings);
        assert_eq!(settings.data_dir(&paths), dir.path().join("records"));
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("settings.json");
        fs::write(&file, r#"{ "default_file": "class-b" }"#).unwrap();

        let settings = Settings::load_from(&file).unwrap();
        assert_eq!(settings.default_file, "class-b");
        assert_eq!(settings.default_format, "table");
        assert_eq!(settings.data_dir(&temp_paths(&dir)), dir.path().join("data"));
    }

    #[test]
    fn test_invalid_settings_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("settings.json");
        fs::write(&file, "not json").unwrap();

        assert!(matches!(
            Settings::load_from(&file),
            Err(ConfigError::InvalidFormat(_))
        ));
    }
}
