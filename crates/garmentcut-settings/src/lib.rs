//! GarmentCut Settings Crate
//!
//! Handles processing tolerances, preview preferences and their persistence.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{Config, ConfigFormat, PreviewSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use manager::SettingsManager;
