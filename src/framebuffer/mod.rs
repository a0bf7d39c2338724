//! Linux fbdev surface.
//!
//! Opens a framebuffer device such as `/dev/fb0`, asks the driver for its
//! geometry and pixel layout, and maps video memory so the marker can be drawn
//! with plain memory writes.

pub mod error;
pub mod ffi;
pub mod format;

pub use error::FramebufferError;
pub use format::{Channel, PixelFormat};

use std::fs::{File, OpenOptions};
use std::path::Path;

use log::{debug, info};
use memmap2::{MmapMut, MmapOptions};

use crate::draw::{Color, Surface};
use crate::util::Rect;

/// Default framebuffer device.
pub const DEFAULT_DEVICE: &str = "/dev/fb0";

/// Visible area and memory layout of a framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Visible width in pixels.
    pub xres: u32,
    /// Visible height in pixels.
    pub yres: u32,
    /// Horizontal pan offset into the virtual screen.
    pub xoffset: u32,
    /// Vertical pan offset into the virtual screen.
    pub yoffset: u32,
    /// Bytes per scanline.
    pub line_length: u32,
}

/// A memory-mapped framebuffer implementing [`Surface`].
pub struct Framebuffer {
    map: MmapMut,
    format: PixelFormat,
    geometry: Geometry,
    // Keeps the device open for as long as the mapping lives.
    _file: Option<File>,
}

impl Framebuffer {
    /// Opens and maps the framebuffer device at `path`.
    pub fn open(path: &Path) -> Result<Self, FramebufferError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| FramebufferError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let var = ffi::var_screen_info(&file).map_err(|source| FramebufferError::Query {
            request: "FBIOGET_VSCREENINFO",
            source,
        })?;
        let fix = ffi::fix_screen_info(&file).map_err(|source| FramebufferError::Query {
            request: "FBIOGET_FSCREENINFO",
            source,
        })?;
        debug!("fb_var_screeninfo: {:?}", var);
        debug!("fb_fix_screeninfo: {:?}", fix);

        let format = PixelFormat::from_var_info(&var)?;
        let geometry = Geometry {
            xres: var.xres,
            yres: var.yres,
            xoffset: var.xoffset,
            yoffset: var.yoffset,
            line_length: fix.line_length,
        };

        let len = fix.smem_len as usize;
        if len == 0 {
            return Err(FramebufferError::EmptyMemory);
        }
        // SAFETY: the mapping is only accessed through this value; other
        // writers to video memory (the console, other clients) only cause
        // visual artifacts, not memory unsafety for byte-level writes.
        let map = unsafe { MmapOptions::new().len(len).map_mut(&file) }
            .map_err(FramebufferError::Map)?;

        info!(
            "Opened framebuffer {} ({}): {}x{} at {} bpp, {} bytes mapped",
            path.display(),
            fix.id(),
            geometry.xres,
            geometry.yres,
            var.bits_per_pixel,
            len
        );

        Ok(Self {
            map,
            format,
            geometry,
            _file: Some(file),
        })
    }

    /// Wraps an existing mapping, e.g. anonymous memory standing in for a device.
    pub fn from_mapping(map: MmapMut, format: PixelFormat, geometry: Geometry) -> Self {
        Self {
            map,
            format,
            geometry,
            _file: None,
        }
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Raw video memory.
    pub fn memory(&self) -> &[u8] {
        &self.map
    }

    /// Byte offset of a visible pixel. The caller checks bounds first.
    fn offset(&self, x: i32, y: i32) -> usize {
        let row = (y as usize + self.geometry.yoffset as usize) * self.geometry.line_length as usize;
        let col = (x as usize + self.geometry.xoffset as usize) * self.format.bytes_per_pixel;
        row + col
    }
}

impl Surface for Framebuffer {
    fn bounds(&self) -> Rect {
        Rect::from_size(self.geometry.xres, self.geometry.yres)
    }

    fn set(&mut self, x: i32, y: i32, color: Color) {
        if !self.bounds().contains(x, y) {
            return;
        }
        let offset = self.offset(x, y);
        let pixel = self.format.encode(color);
        let bytes = pixel.as_slice();
        if let Some(dst) = self.map.get_mut(offset..offset + bytes.len()) {
            dst.copy_from_slice(bytes);
        }
    }

    fn fill(&mut self, color: Color) {
        let pixel = self.format.encode(color);
        let bytes = pixel.as_slice();
        let bounds = self.bounds();
        for y in 0..bounds.height {
            let start = self.offset(0, y);
            let end = start + bounds.width as usize * bytes.len();
            let Some(row) = self.map.get_mut(start..end) else {
                break;
            };
            for dst in row.chunks_exact_mut(bytes.len()) {
                dst.copy_from_slice(bytes);
            }
        }
    }
}
