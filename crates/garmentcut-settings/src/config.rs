//! Configuration and settings management for GarmentCut
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform configuration directory.
//!
//! Configuration is organized into sections:
//! - Processing tolerances (simplifier, repairer, classifier, strict numbers)
//! - Preview preferences (repair overlay, view padding)
//! - Recently opened pattern files

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use garmentcut_vector::{SvgRenderOptions, VectorProcessingParameters};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const MAX_RECENT_FILES: usize = 10;

/// On-disk configuration format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Preview preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Overlay repair markers on the preview
    pub show_repairs: bool,
    /// Padding around the drawing extent in the view window
    pub view_padding: f64,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            show_repairs: true,
            view_padding: 10.0,
        }
    }
}

impl PreviewSettings {
    pub fn render_options(&self) -> SvgRenderOptions {
        SvgRenderOptions {
            show_repairs: self.show_repairs,
            padding: self.view_padding,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Recent pattern files, most recent first
    pub recent_files: Vec<PathBuf>,
    /// Pipeline tolerances
    pub processing: VectorProcessingParameters,
    /// Preview preferences
    pub preview: PreviewSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/garmentcut/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("garmentcut").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.processing.validate()?;

        let padding = self.preview.view_padding;
        if !padding.is_finite() || padding < 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "preview.view_padding".to_string(),
                value: padding.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}
