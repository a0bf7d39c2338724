//! Rendering primitives for the touch marker.
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with the marker palette
//! - [`Surface`]: pixel-addressable target with clipping
//! - [`PixelGrid`]: in-memory surface
//! - [`draw_marker`]: the square outline drawn at the touch point

pub mod color;
pub mod marker;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{BLACK, Color, TRANSPARENT, WHITE};
pub use marker::{MARKER_RADIUS, draw_marker};
pub use surface::{PixelGrid, Surface};
