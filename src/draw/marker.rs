//! Square touch marker.

use super::color::Color;
use super::surface::Surface;
use crate::input::Position;

/// Half-width of the marker outline in pixels.
pub const MARKER_RADIUS: i32 = 35;

/// Draws the outline of a square centered at `pos`.
///
/// Each edge runs from `-MARKER_RADIUS` to `+MARKER_RADIUS` inclusive, so the
/// corners are set twice. Erasing is the same call in the background color,
/// which covers exactly the pixels a draw touched.
pub fn draw_marker<S: Surface + ?Sized>(surface: &mut S, pos: Position, color: Color) {
    let r = MARKER_RADIUS;
    for i in -r..=r {
        surface.set(pos.x.saturating_add(i), pos.y.saturating_sub(r), color);
        surface.set(pos.x.saturating_add(i), pos.y.saturating_add(r), color);
        surface.set(pos.x.saturating_sub(r), pos.y.saturating_add(i), color);
        surface.set(pos.x.saturating_add(r), pos.y.saturating_add(i), color);
    }
}
