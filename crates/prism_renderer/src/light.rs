//! Point lights and distance attenuation.

use crate::Color;
use prism_math::Vec3;

/// An omnidirectional light at a single position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    /// Multiplier on `color`, never negative
    pub intensity: f32,
}

impl PointLight {
    /// Create a new point light. Negative intensity is clamped to zero.
    pub fn new(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity: intensity.max(0.0),
        }
    }

    /// White light with the given intensity.
    pub fn white(position: Vec3, intensity: f32) -> Self {
        Self::new(position, Color::ONE, intensity)
    }
}

/// Falloff `1 / (1 + linear·d + quadratic·d²)` applied to light contributions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Attenuation {
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    /// No falloff: the factor is 1 at every distance.
    pub const NONE: Attenuation = Attenuation {
        linear: 0.0,
        quadratic: 0.0,
    };

    pub fn new(linear: f32, quadratic: f32) -> Self {
        Self {
            linear: linear.max(0.0),
            quadratic: quadratic.max(0.0),
        }
    }

    /// Attenuation factor at `distance`.
    #[inline]
    pub fn factor(&self, distance: f32) -> f32 {
        1.0 / (1.0 + self.linear * distance + self.quadratic * distance * distance)
    }
}
