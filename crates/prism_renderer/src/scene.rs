//! Scene aggregate: primitives, lights, background and shading.
//!
//! Lookup is a linear scan over at most [`MAX_OBJECTS`] primitives. The
//! scene is built once and only read while rendering.

use std::fmt;

use thiserror::Error;

use crate::{
    color::{self, Color},
    hittable::{HitRecord, Hittable, Primitive},
    light::{Attenuation, PointLight},
};
use prism_math::{Interval, Ray, VecExt};

/// Maximum number of primitives a scene can hold.
pub const MAX_OBJECTS: usize = 32;
/// Maximum number of point lights a scene can hold.
pub const MAX_LIGHTS: usize = 8;

/// Fraction of the surface color that is always visible.
pub const AMBIENT: f32 = 0.1;
/// Offset used for primary-ray t_min and shadow-ray origins.
pub const SURFACE_EPSILON: f32 = 1e-3;

/// Errors raised while populating a scene.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    #[error("scene is full: at most {0} objects are supported")]
    TooManyObjects(usize),

    #[error("scene is full: at most {0} lights are supported")]
    TooManyLights(usize),
}

/// What a ray sees when it hits nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    Solid(Color),
    /// Blend from `bottom` (looking down) to `top` (looking up).
    Gradient { bottom: Color, top: Color },
}

impl Background {
    /// The white-to-sky-blue gradient.
    pub const SKY: Background = Background::Gradient {
        bottom: Color::ONE,
        top: Color::new(0.5, 0.7, 1.0),
    };

    /// Background color seen along `ray`.
    pub fn color(&self, ray: &Ray) -> Color {
        match *self {
            Background::Solid(color) => color,
            Background::Gradient { bottom, top } => {
                let a = 0.5 * (ray.direction().y + 1.0);
                bottom.lerp(top, a)
            }
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid(color::BLACK)
    }
}

/// A bounded set of primitives and point lights.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    objects: Vec<Primitive>,
    lights: Vec<PointLight>,
    background: Background,
    attenuation: Attenuation,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(background: Background) -> Self {
        Self {
            objects: Vec::with_capacity(MAX_OBJECTS),
            lights: Vec::with_capacity(MAX_LIGHTS),
            background,
            attenuation: Attenuation::NONE,
        }
    }

    /// Set the light falloff used for every light.
    pub fn with_attenuation(mut self, attenuation: Attenuation) -> Self {
        self.attenuation = attenuation;
        self
    }

    /// Add a primitive. Fails without modifying the scene once full.
    pub fn add_object(&mut self, object: impl Into<Primitive>) -> Result<(), SceneError> {
        if self.objects.len() >= MAX_OBJECTS {
            return Err(SceneError::TooManyObjects(MAX_OBJECTS));
        }
        self.objects.push(object.into());
        Ok(())
    }

    /// Add a point light. Fails without modifying the scene once full.
    pub fn add_light(&mut self, light: PointLight) -> Result<(), SceneError> {
        if self.lights.len() >= MAX_LIGHTS {
            return Err(SceneError::TooManyLights(MAX_LIGHTS));
        }
        self.lights.push(light);
        Ok(())
    }

    pub fn objects(&self) -> &[Primitive] {
        &self.objects
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn background(&self) -> Background {
        self.background
    }

    pub fn attenuation(&self) -> Attenuation {
        self.attenuation
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// True if anything blocks the segment from `rec` to `light`.
    ///
    /// The shadow ray starts slightly above the surface so it cannot
    /// report the surface it was cast from.
    pub fn is_occluded(&self, rec: &HitRecord, light: &PointLight) -> bool {
        let origin = rec.point + rec.normal * SURFACE_EPSILON;
        let to_light = light.position - origin;
        let distance = to_light.length();

        let shadow_ray = Ray::new(origin, to_light);
        let range = Interval::new(SURFACE_EPSILON, distance - SURFACE_EPSILON);
        self.hit(&shadow_ray, range).is_some()
    }

    /// Lambertian shading with shadow rays for a single hit.
    ///
    /// Ambient is always applied; each light adds a diffuse term when it
    /// faces the surface and is not blocked. The result is clamped to [0, 1].
    pub fn shade(&self, rec: &HitRecord) -> Color {
        let material = rec.material_color;
        let mut total = material * AMBIENT;

        for light in &self.lights {
            let to_light = light.position - rec.point;
            let distance = to_light.length();
            let light_dir = to_light.unit_or_zero();

            let ndotl = rec.normal.dot(light_dir);
            if ndotl <= 0.0 {
                continue;
            }

            if self.is_occluded(rec, light) {
                continue;
            }

            let falloff = self.attenuation.factor(distance);
            total += material * light.color * (ndotl * light.intensity * falloff);
        }

        color::clamp(total)
    }

    /// Color seen along a primary ray.
    ///
    /// `depth` bounds recursion; no secondary bounces are traced, so any
    /// depth above zero behaves the same.
    pub fn ray_color(&self, ray: &Ray, depth: u32) -> Color {
        if depth == 0 {
            return color::BLACK;
        }

        match self.hit(ray, Interval::from_min(SURFACE_EPSILON)) {
            Some(rec) => self.shade(&rec),
            None => self.background.color(ray),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Background::default())
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scene {{ objects: {}, lights: {}, background: {:?} }}",
            self.objects.len(),
            self.lights.len(),
            self.background
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane, Sphere};
    use prism_math::Vec3;

    fn grey() -> Color {
        Color::splat(0.5)
    }

    #[test]
    fn test_nearest_hit_regardless_of_order() {
        let near = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, Color::X);
        let far = Sphere::new(Vec3::new(0.0, 0.0, -2.6), 0.5, Color::Y);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let mut forward = Scene::default();
        forward.add_object(near).unwrap();
        forward.add_object(far).unwrap();

        let mut reversed = Scene::default();
        reversed.add_object(far).unwrap();
        reversed.add_object(near).unwrap();

        for scene in [&forward, &reversed] {
            let rec = scene.hit(&ray, Interval::from_min(0.001)).unwrap();
            assert!((rec.t - 1.5).abs() < 1e-5);
            assert_eq!(rec.material_color, Color::X);
        }
    }

    #[test]
    fn test_hit_respects_range() {
        let mut scene = Scene::default();
        scene.add_object(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, grey())).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        assert!(scene.hit(&ray, Interval::new(0.001, 3.0)).is_none());
        assert!(scene.hit(&ray, Interval::new(0.001, 4.5)).is_some());
        assert!(Scene::default().hit(&ray, Interval::UNIVERSE).is_none());
    }

    #[test]
    fn test_object_capacity() {
        let mut scene = Scene::default();
        for i in 0..MAX_OBJECTS {
            let sphere = Sphere::new(Vec3::new(i as f32, 0.0, -10.0), 0.25, grey());
            assert!(scene.add_object(sphere).is_ok());
        }

        let extra = Plane::horizontal(0.0, grey());
        assert_eq!(
            scene.add_object(extra),
            Err(SceneError::TooManyObjects(MAX_OBJECTS))
        );
        assert_eq!(scene.len(), MAX_OBJECTS);
    }

    #[test]
    fn test_light_capacity() {
        let mut scene = Scene::default();
        for i in 0..MAX_LIGHTS {
            assert!(scene.add_light(PointLight::white(Vec3::splat(i as f32), 1.0)).is_ok());
        }

        let result = scene.add_light(PointLight::white(Vec3::ZERO, 1.0));
        assert_eq!(result, Err(SceneError::TooManyLights(MAX_LIGHTS)));
        assert_eq!(scene.lights().len(), MAX_LIGHTS);
    }

    #[test]
    fn test_light_straight_above_plane() {
        let mut scene = Scene::default();
        scene.add_object(Plane::horizontal(0.0, grey())).unwrap();
        scene.add_light(PointLight::new(Vec3::new(0.0, 5.0, 0.0), Color::ONE, 0.8)).unwrap();

        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Y);
        let rec = scene.hit(&ray, Interval::from_min(SURFACE_EPSILON)).unwrap();
        let shaded = scene.shade(&rec);

        // ambient + ndotl(1) * intensity
        let expected = grey() * AMBIENT + grey() * 0.8;
        assert!(shaded.approx_eq(expected, 1e-5), "{:?} != {:?}", shaded, expected);
    }

    #[test]
    fn test_light_behind_surface() {
        let mut scene = Scene::default();
        scene.add_object(Plane::horizontal(0.0, grey())).unwrap();
        scene.add_light(PointLight::white(Vec3::new(0.0, -5.0, 0.0), 1.0)).unwrap();

        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Y);
        let rec = scene.hit(&ray, Interval::from_min(SURFACE_EPSILON)).unwrap();

        assert!(scene.shade(&rec).approx_eq(grey() * AMBIENT, 1e-6));
    }

    #[test]
    fn test_occluded_light_contributes_nothing() {
        let mut scene = Scene::default();
        scene.add_object(Plane::horizontal(0.0, grey())).unwrap();
        scene.add_object(Sphere::new(Vec3::new(0.0, 2.0, 0.0), 0.5, grey())).unwrap();
        let light = PointLight::white(Vec3::new(0.0, 4.0, 0.0), 1.0);
        scene.add_light(light).unwrap();

        // Surface point directly under the occluder
        let ray = Ray::new(Vec3::new(0.0, 1.0, 1.0), Vec3::new(0.0, -1.0, -1.0));
        let rec = scene.hit(&ray, Interval::from_min(SURFACE_EPSILON)).unwrap();
        assert!(rec.point.approx_eq(Vec3::ZERO, 1e-5));

        assert!(scene.is_occluded(&rec, &light));
        assert!(scene.shade(&rec).approx_eq(grey() * AMBIENT, 1e-6));
    }

    #[test]
    fn test_occluder_beyond_light_is_ignored() {
        let mut scene = Scene::default();
        scene.add_object(Plane::horizontal(0.0, grey())).unwrap();
        scene.add_object(Sphere::new(Vec3::new(0.0, 6.0, 0.0), 0.5, grey())).unwrap();
        let light = PointLight::white(Vec3::new(0.0, 4.0, 0.0), 1.0);
        scene.add_light(light).unwrap();

        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let rec = scene.hit(&ray, Interval::from_min(SURFACE_EPSILON)).unwrap();

        assert!(!scene.is_occluded(&rec, &light));
        assert!(scene.shade(&rec).approx_eq(grey() * 1.1, 1e-5));
    }

    #[test]
    fn test_shading_clamps() {
        let mut scene = Scene::default();
        scene.add_object(Plane::horizontal(0.0, Color::ONE)).unwrap();
        scene.add_light(PointLight::white(Vec3::new(0.0, 1.0, 0.0), 5.0)).unwrap();

        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let rec = scene.hit(&ray, Interval::from_min(SURFACE_EPSILON)).unwrap();
        assert_eq!(scene.shade(&rec), Color::ONE);
    }

    #[test]
    fn test_attenuation_applied() {
        let mut scene = Scene::default().with_attenuation(Attenuation::new(0.0, 1.0));
        scene.add_object(Plane::horizontal(0.0, Color::ONE)).unwrap();
        scene.add_light(PointLight::white(Vec3::new(0.0, 2.0, 0.0), 1.0)).unwrap();

        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let rec = scene.hit(&ray, Interval::from_min(SURFACE_EPSILON)).unwrap();

        // 0.1 ambient + 1 / (1 + 4)
        let shaded = scene.shade(&rec);
        assert!((shaded.x - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_ray_color_background() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        let solid = Scene::new(Background::Solid(Color::new(0.1, 0.2, 0.3)));
        assert_eq!(solid.ray_color(&ray, 5), Color::new(0.1, 0.2, 0.3));

        let sky = Scene::new(Background::SKY);
        assert!(sky.ray_color(&ray, 5).approx_eq(Color::new(0.5, 0.7, 1.0), 1e-6));
        let down = Ray::new(Vec3::ZERO, Vec3::NEG_Y);
        assert!(sky.ray_color(&down, 5).approx_eq(Color::ONE, 1e-6));
    }

    #[test]
    fn test_ray_color_zero_depth() {
        let scene = Scene::new(Background::Solid(Color::ONE));
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(scene.ray_color(&ray, 0), color::BLACK);
    }
}
