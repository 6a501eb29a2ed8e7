//! Settings manager
//!
//! Owns the active [`Config`] and the file it is persisted to.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct SettingsManager {
    config_path: PathBuf,
    config: Config,
}

impl SettingsManager {
    /// Manager for an explicit config file, starting from defaults
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            config: Config::default(),
        }
    }

    /// Manager for the platform default config file
    pub fn with_default_path() -> SettingsResult<Self> {
        Ok(Self::new(Config::default_path()?))
    }

    /// Create the directory holding the default config file
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let path = Config::default_path()?;
        let dir = path
            .parent()
            .ok_or_else(|| SettingsError::ConfigDirectory(path.display().to_string()))?;
        std::fs::create_dir_all(dir)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
        Ok(dir.to_path_buf())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Load the config file, failing if it is missing or invalid
    pub fn load(&mut self) -> SettingsResult<&Config> {
        self.config = Config::load_from_file(&self.config_path)?;
        debug!("Loaded settings from {}", self.config_path.display());
        Ok(&self.config)
    }

    /// Load the config file, falling back to defaults when it is missing
    /// or unreadable
    pub fn load_or_default(&mut self) -> &Config {
        if !self.config_path.exists() {
            debug!(
                "No settings file at {}, using defaults",
                self.config_path.display()
            );
            self.config = Config::default();
            return &self.config;
        }

        match Config::load_from_file(&self.config_path) {
            Ok(config) => self.config = config,
            Err(e) => {
                warn!(
                    "Ignoring settings file {}: {}",
                    self.config_path.display(),
                    e
                );
                self.config = Config::default();
            }
        }
        &self.config
    }

    /// Write the active config, creating parent directories as needed
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(dir) = self.config_path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        self.config.save_to_file(&self.config_path)?;
        debug!("Saved settings to {}", self.config_path.display());
        Ok(())
    }
}
