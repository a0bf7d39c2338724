//! Configuration file support for fbtouch.
//!
//! Settings are read from `~/.config/fbtouch/config.toml` (or a file passed
//! with `--config`). Every field is optional; a missing default config file
//! means defaults throughout.

pub mod types;

// Re-export commonly used types at module level
pub use types::{FramebufferConfig, InputConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [framebuffer]
/// device = "/dev/fb0"
///
/// [input]
/// batch_size = 64
/// read_retries = 0
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output device settings
    #[serde(default)]
    pub framebuffer: FramebufferConfig,

    /// Input read settings
    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    /// Clamps values to their accepted ranges, logging a warning for each fix.
    ///
    /// Validated ranges:
    /// - `input.batch_size`: 1 - 1024
    /// - `input.read_retries`: 0 - 16
    fn validate_and_clamp(&mut self) {
        if !(1..=1024).contains(&self.input.batch_size) {
            log::warn!(
                "Invalid batch_size {}, clamping to 1-1024 range",
                self.input.batch_size
            );
            self.input.batch_size = self.input.batch_size.clamp(1, 1024);
        }

        if self.input.read_retries > 16 {
            log::warn!(
                "Invalid read_retries {}, clamping to 0-16 range",
                self.input.read_retries
            );
            self.input.read_retries = 16;
        }

        if self.framebuffer.device.as_os_str().is_empty() {
            log::warn!(
                "Empty framebuffer device, falling back to {}",
                crate::framebuffer::DEFAULT_DEVICE
            );
            self.framebuffer.device = PathBuf::from(crate::framebuffer::DEFAULT_DEVICE);
        }
    }

    /// Returns the path to the default configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("fbtouch");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads the default configuration file, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, which must exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}
