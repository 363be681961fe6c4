//! Configuration management for routeopt
//!
//! Config stored at: ~/.config/routeopt/config.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use routeopt_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default zones CSV path
    #[serde(default)]
    pub zones_csv: Option<PathBuf>,

    /// Center catalog TOML override; built-in catalog when unset
    #[serde(default)]
    pub centers_file: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Initial map viewport center latitude
    #[serde(default = "default_map_lat")]
    pub map_center_lat: f64,

    /// Initial map viewport center longitude
    #[serde(default = "default_map_lng")]
    pub map_center_lng: f64,
}

fn default_map_lat() -> f64 {
    40.0
}

fn default_map_lng() -> f64 {
    -95.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zones_csv: None,
            centers_file: None,
            output_format: OutputFormat::default(),
            map_center_lat: default_map_lat(),
            map_center_lng: default_map_lng(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("routeopt");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Routeopt Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Zones CSV:      {}",
            self.zones_csv
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(unset)".to_string())
        )?;
        writeln!(
            f,
            "Centers file:   {}",
            self.centers_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Map center:     ({}, {})",
            self.map_center_lat, self.map_center_lng
        )?;

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

    #[test]
    fn test_default_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.map_center_lat, 40.0);
        assert_eq!(back.map_center_lng, -95.0);
        assert_eq!(back.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.zones_csv.is_none());
        assert_eq!(config.map_center_lat, 40.0);
    }
}
