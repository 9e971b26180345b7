//! Hittable trait and HitRecord for ray-object intersection.

use std::fmt;

use crate::{Color, Plane, Sphere};
use prism_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
    /// Color of the surface that was hit
    pub material_color: Color,
}

impl HitRecord {
    /// Build a record for a hit at `t` along `ray`.
    ///
    /// `outward_normal` is the geometric normal of the primitive; it is
    /// flipped as needed so the stored normal opposes the ray.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3, material_color: Color) -> Self {
        let mut rec = Self {
            point: ray.at(t),
            normal: outward_normal,
            t,
            front_face: true,
            material_color,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

impl fmt::Display for HitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HitRecord {{ point: ({:.3}, {:.3}, {:.3}), normal: ({:.3}, {:.3}, {:.3}), t: {:.6}, front_face: {} }}",
            self.point.x,
            self.point.y,
            self.point.z,
            self.normal.x,
            self.normal.y,
            self.normal.z,
            self.t,
            self.front_face
        )
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object strictly inside `ray_t`.
    ///
    /// Returns the nearest such hit, or `None`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// The closed set of primitives a scene can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive {
    /// Surface color of the primitive.
    pub fn color(&self) -> Color {
        match self {
            Primitive::Sphere(sphere) => sphere.color(),
            Primitive::Plane(plane) => plane.color(),
        }
    }
}

impl Hittable for Primitive {
    #[inline]
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray, ray_t),
            Primitive::Plane(plane) => plane.hit(ray, ray_t),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}
