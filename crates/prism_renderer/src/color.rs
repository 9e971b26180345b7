//! RGB color helpers.
//!
//! Colors share the `Vec3` representation, with channels nominally in
//! `[0, 1]`. Lighting sums may exceed that range until they are clamped.

use prism_math::{Interval, Vec3};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

pub const BLACK: Color = Color::ZERO;
pub const WHITE: Color = Color::ONE;
pub const RED: Color = Color::X;
pub const GREEN: Color = Color::Y;
pub const BLUE: Color = Color::Z;

/// Clamp each channel to [0, 1].
#[inline]
pub fn clamp(color: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}

/// Raise each channel to `1 / gamma`.
///
/// A gamma of 1.0 leaves the color unchanged.
pub fn gamma_correct(color: Color, gamma: f32) -> Color {
    if gamma == 1.0 {
        return color;
    }
    let inv = 1.0 / gamma;
    Color::new(color.x.powf(inv), color.y.powf(inv), color.z.powf(inv))
}

/// Convert a color to 8-bit RGB.
///
/// Channels are clamped first, then `255 * c` is truncated.
pub fn to_rgb8(color: Color) -> [u8; 3] {
    let c = clamp(color);
    [
        (255.0 * c.x) as u8,
        (255.0 * c.y) as u8,
        (255.0 * c.z) as u8,
    ]
}

/// Pack a color as `0xRRGGBB`.
pub fn to_rgb24(color: Color) -> u32 {
    let [r, g, b] = to_rgb8(color);
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}
