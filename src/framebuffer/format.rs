//! Packed pixel formats described by `fb_var_screeninfo` bitfields.

use super::error::FramebufferError;
use super::ffi::{FbBitfield, FbVarScreenInfo};
use crate::draw::Color;

/// Location of one channel inside a packed pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Channel {
    pub offset: u32,
    pub length: u32,
}

impl Channel {
    pub const fn new(offset: u32, length: u32) -> Self {
        Self { offset, length }
    }

    fn pack(self, component: f64) -> u32 {
        if self.length == 0 || self.offset >= 32 {
            return 0;
        }
        Color::scale_component(component, self.length) << self.offset
    }
}

impl From<FbBitfield> for Channel {
    fn from(field: FbBitfield) -> Self {
        Self::new(field.offset, field.length)
    }
}

/// Truecolor layout of a framebuffer pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormat {
    pub bytes_per_pixel: usize,
    pub red: Channel,
    pub green: Channel,
    pub blue: Channel,
    pub transp: Channel,
}

impl PixelFormat {
    /// 16-bit RGB 5:6:5.
    pub const RGB565: PixelFormat = PixelFormat {
        bytes_per_pixel: 2,
        red: Channel::new(11, 5),
        green: Channel::new(5, 6),
        blue: Channel::new(0, 5),
        transp: Channel::new(0, 0),
    };

    /// 32-bit RGB with an unused top byte.
    pub const XRGB8888: PixelFormat = PixelFormat {
        bytes_per_pixel: 4,
        red: Channel::new(16, 8),
        green: Channel::new(8, 8),
        blue: Channel::new(0, 8),
        transp: Channel::new(0, 0),
    };

    /// Derives the format from the screen info reported by the driver.
    pub fn from_var_info(info: &FbVarScreenInfo) -> Result<Self, FramebufferError> {
        let bytes_per_pixel = match info.bits_per_pixel {
            16 => 2,
            24 => 3,
            32 => 4,
            bits => return Err(FramebufferError::UnsupportedFormat { bits_per_pixel: bits }),
        };

        Ok(Self {
            bytes_per_pixel,
            red: info.red.into(),
            green: info.green.into(),
            blue: info.blue.into(),
            transp: info.transp.into(),
        })
    }

    /// Packs a color into a pixel value. Only the low
    /// `bytes_per_pixel * 8` bits are meaningful.
    pub fn pack(&self, color: Color) -> u32 {
        self.red.pack(color.r)
            | self.green.pack(color.g)
            | self.blue.pack(color.b)
            | self.transp.pack(color.a)
    }

    /// Packs a color into the bytes stored in video memory (native order).
    pub fn encode(&self, color: Color) -> PixelBytes {
        let bytes = self.pack(color).to_ne_bytes();
        let len = self.bytes_per_pixel.min(bytes.len());
        let start = if cfg!(target_endian = "big") {
            bytes.len() - len
        } else {
            0
        };
        PixelBytes {
            bytes,
            start,
            len,
        }
    }
}

/// Encoded pixel, borrowed as a slice of `bytes_per_pixel` bytes.
#[derive(Debug, Clone, Copy)]
pub struct PixelBytes {
    bytes: [u8; 4],
    start: usize,
    len: usize,
}

impl PixelBytes {
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[self.start..self.start + self.len]
    }
}
