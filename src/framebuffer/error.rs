//! Errors raised while opening and mapping a framebuffer device.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FramebufferError {
    #[error("failed to open framebuffer {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{request} failed: {source}")]
    Query {
        request: &'static str,
        #[source]
        source: nix::Error,
    },

    #[error("unsupported framebuffer depth: {bits_per_pixel} bits per pixel")]
    UnsupportedFormat { bits_per_pixel: u32 },

    #[error("framebuffer reports no video memory")]
    EmptyMemory,

    #[error("failed to map framebuffer memory: {0}")]
    Map(#[source] std::io::Error),
}
