//! RGBA color type and the marker palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use fbtouch::draw::Color;
/// let grey = Color::new(0.5, 0.5, 0.5, 1.0);
/// assert_eq!(Color::scale_component(grey.r, 8), 128);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Scales one component to an unsigned integer of `bits` width.
    ///
    /// Out-of-range components are clamped; a zero-width channel yields 0.
    pub fn scale_component(component: f64, bits: u32) -> u32 {
        if bits == 0 {
            return 0;
        }
        let max = if bits >= 32 {
            u32::MAX
        } else {
            (1u32 << bits) - 1
        };
        (component.clamp(0.0, 1.0) * f64::from(max)).round() as u32
    }
}

/// Background color; erasing a marker paints it in this color.
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Marker color.
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Fully transparent color; marks pixels an in-memory surface never wrote.
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};
