use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TrainStatError;
use crate::export::ReportFormat;
use crate::logging::LogConfig;
use crate::models::WorkoutPackage;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LogConfig,

    /// Report output settings
    pub output: OutputSettings,

    /// Packages processed when no input file is given
    pub packages: Vec<WorkoutPackage>,
}

/// Report output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Default report format
    pub format: ReportFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            logging: LogConfig::default(),
            output: OutputSettings::default(),
            packages: WorkoutPackage::samples(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let toml_content = self.to_toml()?;

        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration to TOML")
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trainstat")
            .join("config.toml")
    }

    /// Load configuration with fallback to defaults.
    ///
    /// A missing default file silently yields the defaults; a missing explicit
    /// file, an unreadable or an invalid one is a configuration error.
    pub fn load_or_default(path: Option<&Path>) -> crate::Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        if !config_path.exists() {
            if path.is_some() {
                return Err(TrainStatError::Configuration(format!(
                    "file not found: {}",
                    config_path.display()
                )));
            }
            return Ok(Self::default());
        }

        Self::load_from_file(&config_path)
            .map_err(|e| TrainStatError::Configuration(format!("{:#}", e)))
    }

    /// Write the default configuration, replacing whatever is at `path`
    pub fn init_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::default();
        config.save_to_file(path)?;
        Ok(config)
    }
}
