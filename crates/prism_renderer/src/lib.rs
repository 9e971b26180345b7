//! Prism renderer - CPU ray casting
//!
//! Intersects rays with spheres and infinite planes, picks the nearest
//! hit with a linear scan and shades it with ambient plus Lambertian
//! diffuse light from point lights, testing each light with a shadow ray.

mod camera;
pub mod color;
mod hittable;
mod job;
mod light;
mod plane;
mod renderer;
mod sampler;
mod scene;
mod sphere;

pub use camera::{Camera, Projection};
pub use color::Color;
pub use hittable::{HitRecord, Hittable, Primitive};
pub use job::RenderJob;
pub use light::{Attenuation, PointLight};
pub use plane::Plane;
pub use renderer::{
    render, render_pixel, write_ppm_header, write_ppm_pixel, RenderError, RenderSettings,
};
pub use sampler::Lcg;
pub use scene::{Background, Scene, SceneError, AMBIENT, MAX_LIGHTS, MAX_OBJECTS, SURFACE_EPSILON};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from prism_math
pub use prism_math::{Interval, Ray, Vec3, VecExt};
