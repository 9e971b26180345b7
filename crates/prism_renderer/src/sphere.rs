//! Sphere primitive for ray tracing.

use std::fmt;

use crate::{
    hittable::{HitRecord, Hittable},
    Color,
};
use prism_math::{Interval, Ray, Vec3, VecExt};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    color: Color,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// A non-positive radius is replaced by 1.0.
    pub fn new(center: Vec3, radius: f32, color: Color) -> Self {
        let radius = if radius > 0.0 { radius } else { 1.0 };
        Self {
            center,
            radius,
            color,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Quadratic discriminant `half_b² - a·c` for `ray`.
    ///
    /// Negative means a miss, zero a tangent ray.
    pub fn discriminant(&self, ray: &Ray) -> f32 {
        let (a, half_b, c) = self.coefficients(ray);
        half_b * half_b - a * c
    }

    /// Both roots of the intersection quadratic, smaller first.
    ///
    /// Unbounded: roots behind the origin are returned too.
    pub fn roots(&self, ray: &Ray) -> Option<(f32, f32)> {
        let (a, half_b, c) = self.coefficients(ray);
        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 || a == 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();
        Some(((-half_b - sqrtd) / a, (-half_b + sqrtd) / a))
    }

    /// Unit normal pointing out of the sphere through `point`.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).unit_or_zero()
    }

    /// True if `point` is inside or on the surface.
    pub fn contains_point(&self, point: Vec3) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }

    #[inline]
    fn coefficients(&self, ray: &Ray) -> (f32, f32, f32) {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;
        (a, half_b, c)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let (near, far) = self.roots(ray)?;

        // Nearest root in range; the far one covers rays starting inside
        let root = if ray_t.surrounds(near) {
            near
        } else if ray_t.surrounds(far) {
            far
        } else {
            return None;
        };

        let point = ray.at(root);
        let outward_normal = (point - self.center) / self.radius;
        Some(HitRecord::new(ray, root, outward_normal, self.color))
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sphere {{ center: ({:.3}, {:.3}, {:.3}), radius: {:.3} }}",
            self.center.x, self.center.y, self.center.z, self.radius
        )
    }
}
