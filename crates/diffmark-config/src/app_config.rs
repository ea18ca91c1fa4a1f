//! Application configuration
//!
//! Configuration loaded from .diffmark.toml.

use crate::config_file::{config_candidates, find_config_file};
use anyhow::{Context, Result};
use diffmark_core::model::{DEFAULT_DELETION_MARKER, DEFAULT_INSERTION_MARKER};
use diffmark_core::DiffMarkers;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from .diffmark.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Language id handed to the code renderer (e.g. "json", "rust")
    #[serde(default = "default_language")]
    pub language: String,

    /// Suffix appended to inserted lines
    #[serde(default = "default_insertion_marker")]
    pub insertion_marker: String,

    /// Suffix appended to deleted lines
    #[serde(default = "default_deletion_marker")]
    pub deletion_marker: String,

    /// Directory exports are written to
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_language() -> String {
    "json".to_string()
}

fn default_insertion_marker() -> String {
    DEFAULT_INSERTION_MARKER.to_string()
}

fn default_deletion_marker() -> String {
    DEFAULT_DELETION_MARKER.to_string()
}

fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            insertion_marker: default_insertion_marker(),
            deletion_marker: default_deletion_marker(),
            export_dir: default_export_dir(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        Self::load_first(&config_candidates())
    }

    /// Load the first existing candidate, or use defaults
    ///
    /// A file that cannot be read or parsed is reported at `warn` and the
    /// defaults are used instead.
    pub fn load_first(candidates: &[PathBuf]) -> Self {
        let Some(path) = find_config_file(candidates) else {
            log::debug!("No config file found, using default app config");
            return Self::default();
        };

        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{:#}; using default app config", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::info!("Loaded app config from {}", path.display());
        Ok(config)
    }

    /// Marker convention for the annotator and renderer
    pub fn markers(&self) -> DiffMarkers {
        DiffMarkers::new(&self.insertion_marker, &self.deletion_marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.language, "json");
        assert_eq!(config.markers(), DiffMarkers::default());
        assert_eq!(config.log_level, "warn");
        assert!(!config.export_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            language = "rust"
            insertion_marker = " // +"
            deletion_marker = " // -"
            export_dir = "/tmp/exports"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.language, "rust");
        assert_eq!(config.markers(), DiffMarkers::new(" // +", " // -"));
        assert_eq!(config.export_dir, PathBuf::from("/tmp/exports"));
        // log_level should use default
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            language = "yaml"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.language, "yaml");
        // Other fields should use defaults
        assert_eq!(config.insertion_marker, " // [!code ++]");
        assert_eq!(config.deletion_marker, " // [!code --]");
    }

    #[test]
    fn test_load_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = \"debug\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.language, "json");

        std::fs::write(&path, "language = [").unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = TempDir::new().unwrap();
        let err = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_first_uses_first_existing_file() {
        let dir = TempDir::new().unwrap();
        let local = dir.path().join("local.toml");
        let home = dir.path().join("home.toml");
        std::fs::write(&home, "language = \"rust\"").unwrap();

        let config = AppConfig::load_first(&[local.clone(), home.clone()]);
        assert_eq!(config.language, "rust");

        std::fs::write(&local, "language = \"yaml\"").unwrap();
        let config = AppConfig::load_first(&[local, home]);
        assert_eq!(config.language, "yaml");
    }

    #[test]
    fn test_load_first_malformed_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".diffmark.toml");
        std::fs::write(&path, "language = [").unwrap();

        let config = AppConfig::load_first(&[path]);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_first_without_files() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_first(&[dir.path().join("nope.toml")]);
        assert_eq!(config, AppConfig::default());
    }
}
