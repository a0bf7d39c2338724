//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::framebuffer::DEFAULT_DEVICE;
use crate::input::DEFAULT_BATCH_SIZE;

/// Framebuffer output settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct FramebufferConfig {
    /// Framebuffer device to draw on (overridden by `--framebuffer`)
    #[serde(default = "default_framebuffer_device")]
    pub device: PathBuf,
}

impl Default for FramebufferConfig {
    fn default() -> Self {
        Self {
            device: default_framebuffer_device(),
        }
    }
}

/// Input device read settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct InputConfig {
    /// Maximum number of event records requested per read (valid range: 1 - 1024)
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Consecutive interrupted reads to retry before giving up (valid range: 0 - 16)
    /// 0 keeps every read error fatal
    #[serde(default = "default_read_retries")]
    pub read_retries: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            read_retries: default_read_retries(),
        }
    }
}

fn default_framebuffer_device() -> PathBuf {
    PathBuf::from(DEFAULT_DEVICE)
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

fn default_read_retries() -> u32 {
    0
}
