use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::api::types::OutputFormat;
use crate::core::DEFAULT_OBSERVER_HEIGHT;
use crate::validation::check_height;

/// Settings that can be stored in a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Observer eye height used when `-c` is not given (meters)
    pub default_observer_height: f64,
    /// Output format used when `--format` is not given
    pub output_format: OutputFormat,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            default_observer_height: DEFAULT_OBSERVER_HEIGHT,
            output_format: OutputFormat::Text,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid parameter value
    InvalidParameter { parameter: String, value: String, reason: String },
    /// Configuration file I/O error
    IoError { message: String },
    /// JSON serialization/deserialization error
    SerializationError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter { parameter, value, reason } => {
                write!(f, "Invalid configuration value {} = {}: {}", parameter, value, reason)
            }
            ConfigError::IoError { message } => write!(f, "{}", message),
            ConfigError::SerializationError { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ToolConfig {
    /// Read and validate a JSON configuration file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: ToolConfig = serde_json::from_str(&content).map_err(|e| {
            ConfigError::SerializationError {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            }
        })?;

        config.validate()?;
        info!(path = %path_str, "loaded configuration");
        debug!(?config, "configuration values");
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = serde_json::to_string_pretty(self).map_err(|e| {
            ConfigError::SerializationError {
                message: format!("Failed to serialize configuration: {}", e),
            }
        })?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_height("default_observer_height", self.default_observer_height).map_err(|e| {
            ConfigError::InvalidParameter {
                parameter: "default_observer_height".to_string(),
                value: self.default_observer_height.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ToolConfig::default();
        assert_eq!(config.default_observer_height, 1.5);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "default_observer_height": 1.7, "output_format": "csv" }}"#).unwrap();

        let config = ToolConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.default_observer_height, 1.7);
        assert_eq!(config.output_format, OutputFormat::Csv);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tangent-sight.json");
        let config = ToolConfig {
            default_observer_height: 2.25,
            output_format: OutputFormat::Json,
        };

        config.save_to_file(&path).unwrap();
        assert_eq!(ToolConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = ToolConfig {
            default_observer_height: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter { ref parameter, .. }) if parameter == "default_observer_height"
        ));

        let config = ToolConfig {
            default_observer_height: 100.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_depth_is_not_configurable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "production_depth": 2 }}"#).unwrap();
        let result = ToolConfig::load_from_file(file.path());
        assert!(matches!(result, Err(ConfigError::SerializationError { .. })));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ToolConfig::load_from_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let result = ToolConfig::load_from_file(file.path());
        assert!(matches!(result, Err(ConfigError::SerializationError { .. })));
    }
}
