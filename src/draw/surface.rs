//! Pixel surface capability and an in-memory implementation.

use super::color::{Color, TRANSPARENT};
use crate::util::Rect;

/// Something that can be painted one pixel at a time.
///
/// Implementations clip: [`Surface::set`] outside [`Surface::bounds`] does
/// nothing.
pub trait Surface {
    /// Visible area of the surface.
    fn bounds(&self) -> Rect;

    /// Sets a single pixel, ignoring coordinates outside the bounds.
    fn set(&mut self, x: i32, y: i32, color: Color);

    /// Paints every visible pixel.
    fn fill(&mut self, color: Color) {
        let bounds = self.bounds();
        for y in bounds.y..bounds.y.saturating_add(bounds.height) {
            for x in bounds.x..bounds.x.saturating_add(bounds.width) {
                self.set(x, y, color);
            }
        }
    }
}

/// Row-major grid of colors held in memory.
///
/// Pixels start out [`TRANSPARENT`] so callers can tell painted pixels from
/// untouched ones.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Iterates over `(x, y, color)` for every pixel.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, Color)> + '_ {
        let width = self.width as usize;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, color)| ((i % width) as i32, (i / width) as i32, *color))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl Surface for PixelGrid {
    fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }
}
