//! Application configuration module.
//!
//! Handles loading and validating `config.toml` from the data directory.
//! A missing file means stock defaults; an existing file only needs the
//! keys it wants to override.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [images]
//! max_width = 800   # Stored photos wider than this are downscaled
//! quality = 70      # JPEG quality (1-100)
//!
//! [storage]
//! # Byte cap for the persisted collection. Omit for no local limit.
//! # capacity_bytes = 5242880
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{NormalizeOptions, Quality};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Application configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Photo normalization settings (max width, JPEG quality).
    pub images: ImagesConfig,
    /// Persistence settings (storage capacity).
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images.quality == 0 || self.images.quality > 100 {
            return Err(ConfigError::Validation(
                "images.quality must be 1-100".into(),
            ));
        }
        if self.images.max_width == 0 {
            return Err(ConfigError::Validation(
                "images.max_width must be non-zero".into(),
            ));
        }
        if self.storage.capacity_bytes == Some(0) {
            return Err(ConfigError::Validation(
                "storage.capacity_bytes must be non-zero when set".into(),
            ));
        }
        Ok(())
    }

    /// Imaging options derived from this config.
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            max_width: self.images.max_width,
            quality: Quality::new(self.images.quality),
        }
    }
}

/// Photo normalization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Maximum stored width in pixels; wider photos are downscaled to fit.
    pub max_width: u32,
    /// JPEG encoding quality (1 = worst, 100 = best).
    pub quality: u32,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            max_width: 800,
            quality: 70,
        }
    }
}

/// Persistence settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Byte cap for the persisted collection, mirroring environments with a
    /// fixed storage quota. When absent, no local limit is enforced.
    pub capacity_bytes: Option<usize>,
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from `config.toml` in the given directory.
///
/// A missing file yields stock defaults. An existing file is parsed sparsely
/// on top of the defaults, rejects unknown keys, and is validated.
pub fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: AppConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# Wandermark Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the data directory (next to the bookmark collection).
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Photo normalization
# ---------------------------------------------------------------------------
[images]
# Maximum stored width in pixels. Wider photos are downscaled to this width
# with the height following proportionally; narrower photos keep their size.
max_width = 800

# JPEG encoding quality for stored photos (1 = worst, 100 = best).
quality = 70

# ---------------------------------------------------------------------------
# Storage
# ---------------------------------------------------------------------------
[storage]
# Byte cap for the persisted collection, mirroring environments with a fixed
# storage quota. A save that would exceed it fails without touching the
# previously saved data. Omit or comment out for no local limit.
# capacity_bytes = 5242880
"#
}
