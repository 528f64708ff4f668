//! Configuration for the monitor
//!
//! Settings are read from a TOML file. Every section and field is optional
//! and falls back to its default.

use crate::display::{OutputFormat, RenderOptions};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub sensor: SensorConfig,
}

/// How the alert log is rendered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Emit ANSI colors
    pub color: bool,
    /// Prefix lines with the time they were produced
    pub timestamps: bool,
    pub format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            timestamps: false,
            format: OutputFormat::Text,
        }
    }
}

/// Behavior of the simulated sensor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SensorConfig {
    /// Log a sensor line before each simulated motion event
    pub announce: bool,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self { announce: true }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read and
    /// `ConfigError::TomlError` if it is not valid configuration.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Rendering options for the terminal alert log
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            color: self.display.color,
            timestamps: self.display.timestamps,
            format: self.display.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert!(config.display.color);
        assert!(!config.display.timestamps);
        assert_eq!(config.display.format, OutputFormat::Text);
        assert!(config.sensor.announce);
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml_str(
            r#"
[display]
timestamps = true
format = "json"
"#,
        )
        .unwrap();

        assert!(config.display.color);
        assert!(config.display.timestamps);
        assert_eq!(config.display.format, OutputFormat::Json);
        assert!(config.sensor.announce);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = Config::from_toml_str("[display]\nformat = \"xml\"\n");
        assert!(matches!(result, Err(ConfigError::TomlError(_))));
    }

    #[test]
    fn test_render_options() {
        let mut config = Config::default();
        config.display.color = false;
        config.display.timestamps = true;

        let options = config.render_options();
        assert!(!options.color);
        assert!(options.timestamps);
        assert_eq!(options.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[sensor]\nannounce = false").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(!config.sensor.announce);
        assert!(config.display.color);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = Config::from_file(Path::new("/nonexistent/kidsmon.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.display.format = OutputFormat::Json;
        config.sensor.announce = false;

        let text = toml::to_string(&config).unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }
}
