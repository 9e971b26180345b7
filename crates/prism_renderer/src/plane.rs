//! Infinite plane primitive.

use std::fmt;

use crate::{
    hittable::{HitRecord, Hittable},
    Color,
};
use prism_math::{Interval, Ray, Vec3, VecExt};

/// Rays with `|dot(normal, direction)|` below this are treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    color: Color,
}

impl Plane {
    /// Create a plane. The normal is normalized here.
    pub fn new(point: Vec3, normal: Vec3, color: Color) -> Self {
        Self {
            point,
            normal: normal.unit_or_zero(),
            color,
        }
    }

    /// Plane through three points, normal `cross(p2 - p1, p3 - p1)`.
    pub fn from_points(p1: Vec3, p2: Vec3, p3: Vec3, color: Color) -> Self {
        let normal = (p2 - p1).cross(p3 - p1);
        Self::new(p1, normal, color)
    }

    /// Horizontal (XZ) plane at height `y`, facing +Y.
    pub fn horizontal(y: f32, color: Color) -> Self {
        Self::new(Vec3::new(0.0, y, 0.0), Vec3::Y, color)
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Signed distance from the plane, positive on the normal side.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        (point - self.point).dot(self.normal)
    }

    /// True if `point` lies strictly on the side the normal faces.
    pub fn is_in_front(&self, point: Vec3) -> bool {
        self.signed_distance(point) > 0.0
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let denom = self.normal.dot(ray.direction());

        // Parallel rays never hit, including rays lying in the plane
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(HitRecord::new(ray, t, self.normal, self.color))
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plane {{ point: ({:.3}, {:.3}, {:.3}), normal: ({:.3}, {:.3}, {:.3}) }}",
            self.point.x, self.point.y, self.point.z, self.normal.x, self.normal.y, self.normal.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_hit_from_above() {
        let plane = Plane::horizontal(-1.0, Color::new(0.2, 0.8, 0.2));
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        let rec = plane.hit(&ray, Interval::from_min(0.001)).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-6);
        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::Y);
        assert!(rec.point.approx_eq(Vec3::new(0.0, -1.0, 0.0), 1e-6));
        assert_eq!(rec.material_color, Color::new(0.2, 0.8, 0.2));
    }

    #[test]
    fn test_plane_hit_from_below() {
        let plane = Plane::horizontal(0.0, Color::ONE);
        let ray = Ray::new(Vec3::new(1.0, -3.0, 2.0), Vec3::Y);

        let rec = plane.hit(&ray, Interval::from_min(0.001)).unwrap();
        assert!((rec.t - 3.0).abs() < 1e-6);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::NEG_Y);
    }

    #[test]
    fn test_plane_parallel_miss() {
        let plane = Plane::horizontal(0.0, Color::ONE);

        let above = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(plane.hit(&above, Interval::UNIVERSE).is_none());

        // Lying in the plane is also rejected
        let inside = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(plane.hit(&inside, Interval::UNIVERSE).is_none());
    }

    #[test]
    fn test_plane_behind_ray() {
        let plane = Plane::horizontal(0.0, Color::ONE);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);

        assert!(plane.hit(&ray, Interval::from_min(0.001)).is_none());
    }

    #[test]
    fn test_plane_from_points() {
        let plane = Plane::from_points(Vec3::ZERO, Vec3::X, Vec3::Z, Color::ONE);

        // X cross Z points down
        assert!(plane.normal().approx_eq(Vec3::NEG_Y, 1e-6));
        assert!((plane.normal().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_plane_signed_distance() {
        let plane = Plane::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 4.0, 0.0), Color::ONE);

        assert!((plane.signed_distance(Vec3::new(5.0, 5.0, 1.0)) - 3.0).abs() < 1e-6);
        assert!(plane.is_in_front(Vec3::new(0.0, 2.5, 0.0)));
        assert!(!plane.is_in_front(Vec3::new(0.0, 2.0, 0.0)));
        assert!(!plane.is_in_front(Vec3::ZERO));
    }
}
