//! Configuration management for brigade-dispatch
//!
//! Config stored at: ~/.config/brigade-dispatch/config.json

use dispatch_domain::service::DEFAULT_ZOOM;
use dispatch_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "brigade-dispatch";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Status store snapshot override
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Zoom hint for dispatch maps
    #[serde(default = "default_map_zoom")]
    pub map_zoom: u8,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Where `dispatch` writes its map when no path is given
    #[serde(default)]
    pub map_output: Option<PathBuf>,
}

fn default_map_zoom() -> u8 {
    DEFAULT_ZOOM
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            map_zoom: default_map_zoom(),
            output_format: OutputFormat::default(),
            map_output: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the status store snapshot path
    pub fn store_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.store_path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(data_dir.join("brigade.json"))
    }

    /// Load config from `path`, or use defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=19).contains(&self.map_zoom) {
            return Err(ConfigError::InvalidValue(format!(
                "map_zoom must be between 1 and 19, got {}",
                self.map_zoom
            ))
            .into());
        }
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Brigade Dispatch Configuration")?;
        writeln!(f, "==============================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Status store:   {}",
            self.store_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Map zoom:       {}", self.map_zoom)?;
        writeln!(
            f,
            "Map output:     {}",
            self.map_output
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.map_zoom, 12);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"output_format": "json"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.map_zoom, DEFAULT_ZOOM);
        assert!(config.store_path.is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            store_path: Some(PathBuf::from("/srv/brigade.json")),
            map_zoom: 14,
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
        assert_eq!(
            config.store_path().unwrap(),
            PathBuf::from("/srv/brigade.json")
        );
    }

    #[test]
    fn test_invalid_zoom_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"map_zoom": 30}"#).unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(dispatch_types::Error::Config(ConfigError::ParseError(_)))
        ));
    }
}
