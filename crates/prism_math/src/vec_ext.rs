use crate::Vec3;

/// Lengths below this are treated as zero by [`VecExt::unit_or_zero`].
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Vector operations with defined behavior for degenerate input.
///
/// `glam` covers the arithmetic, dot/cross products, length and lerp.
/// These additions never produce NaN: a vector too short to normalize
/// becomes the zero vector instead.
pub trait VecExt: Sized {
    /// Unit vector in the same direction, or zero when the length is
    /// below [`NORMALIZE_EPSILON`].
    fn unit_or_zero(self) -> Self;

    /// Mirror `self` about the normal `n`: `v - 2 * dot(v, n) * n`.
    fn reflected(self, n: Self) -> Self;

    /// True if every component is within [`NORMALIZE_EPSILON`] of zero.
    fn is_near_zero(self) -> bool;

    /// Component-wise comparison with a strict tolerance.
    fn approx_eq(self, other: Self, epsilon: f32) -> bool;
}

impl VecExt for Vec3 {
    #[inline]
    fn unit_or_zero(self) -> Self {
        let len = self.length();
        if len < NORMALIZE_EPSILON {
            return Vec3::ZERO;
        }
        self / len
    }

    #[inline]
    fn reflected(self, n: Self) -> Self {
        self - 2.0 * self.dot(n) * n
    }

    #[inline]
    fn is_near_zero(self) -> bool {
        self.approx_eq(Vec3::ZERO, NORMALIZE_EPSILON)
    }

    #[inline]
    fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        let d = (self - other).abs();
        d.x < epsilon && d.y < epsilon && d.z < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_or_zero() {
        let v = Vec3::new(3.0, 0.0, 4.0).unit_or_zero();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!(v.approx_eq(Vec3::new(0.6, 0.0, 0.8), 1e-6));
    }

    #[test]
    fn test_unit_or_zero_degenerate() {
        // Zero and near-zero vectors collapse to zero rather than NaN
        let zero = Vec3::ZERO.unit_or_zero();
        assert_eq!(zero, Vec3::ZERO);
        assert!(!zero.x.is_nan());

        let tiny = Vec3::splat(1e-8).unit_or_zero();
        assert_eq!(tiny, Vec3::ZERO);
    }

    #[test]
    fn test_reflected() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let r = v.reflected(Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));

        // Reflecting twice gives the original vector back
        assert_eq!(r.reflected(Vec3::Y), v);
    }

    #[test]
    fn test_is_near_zero() {
        assert!(Vec3::ZERO.is_near_zero());
        assert!(Vec3::splat(1e-7).is_near_zero());
        assert!(!Vec3::new(0.0, 1e-3, 0.0).is_near_zero());
    }

    #[test]
    fn test_approx_eq() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert!(a.approx_eq(a + Vec3::splat(1e-4), 1e-3));
        assert!(!a.approx_eq(a + Vec3::new(0.0, 0.0, 1e-2), 1e-3));
    }
}
