//! Camera for ray generation.
//!
//! Maps normalized viewport coordinates `(u, v)` in `[0, 1]²` to rays.
//! `(0, 0)` is the lower-left corner of the view, `(1, 1)` the upper-right.

use prism_math::{Ray, Vec3, VecExt};

/// How the view volume is shaped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Parallel rays through a `viewport_width` x `viewport_height` window.
    Orthographic {
        viewport_width: f32,
        viewport_height: f32,
    },
    /// Rays fanning out from the eye. `vfov` is the vertical field of
    /// view in degrees.
    Perspective { vfov: f32, aspect_ratio: f32 },
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    projection: Projection,
    image_width: u32,
    image_height: u32,

    origin: Vec3,
    lower_left: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    /// Unit vector pointing from the target back toward the eye
    w: Vec3,
}

impl Camera {
    /// Create a camera for the given projection and image size.
    pub fn new(
        projection: Projection,
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        image_width: u32,
        image_height: u32,
    ) -> Self {
        // Calculate camera basis vectors
        let w = (look_from - look_at).unit_or_zero();
        let u = vup.cross(w).unit_or_zero();
        let v = w.cross(u);

        let (horizontal, vertical, lower_left) = match projection {
            Projection::Orthographic {
                viewport_width,
                viewport_height,
            } => {
                let horizontal = u * viewport_width;
                let vertical = v * viewport_height;
                let lower_left = look_from - horizontal * 0.5 - vertical * 0.5;
                (horizontal, vertical, lower_left)
            }
            Projection::Perspective { vfov, aspect_ratio } => {
                let half_height = (vfov.to_radians() / 2.0).tan();
                let half_width = aspect_ratio * half_height;

                let horizontal = u * (2.0 * half_width);
                let vertical = v * (2.0 * half_height);
                // Viewport sits one unit in front of the eye
                let lower_left = look_from - horizontal * 0.5 - vertical * 0.5 - w;
                (horizontal, vertical, lower_left)
            }
        };

        Self {
            projection,
            image_width,
            image_height,
            origin: look_from,
            lower_left,
            horizontal,
            vertical,
            w,
        }
    }

    /// Orthographic camera with a viewport measured in world units.
    pub fn orthographic(
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        viewport_width: f32,
        viewport_height: f32,
        image_width: u32,
        image_height: u32,
    ) -> Self {
        Self::new(
            Projection::Orthographic {
                viewport_width,
                viewport_height,
            },
            look_from,
            look_at,
            vup,
            image_width,
            image_height,
        )
    }

    /// Perspective camera with a vertical field of view in degrees.
    pub fn perspective(
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        vfov: f32,
        aspect_ratio: f32,
        image_width: u32,
        image_height: u32,
    ) -> Self {
        Self::new(
            Projection::Perspective { vfov, aspect_ratio },
            look_from,
            look_at,
            vup,
            image_width,
            image_height,
        )
    }

    /// Generate the ray through viewport coordinates `(u, v)`.
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        let viewport_point = self.lower_left + u * self.horizontal + v * self.vertical;

        match self.projection {
            Projection::Orthographic { .. } => Ray::new(viewport_point, -self.w),
            Projection::Perspective { .. } => Ray::new(self.origin, viewport_point - self.origin),
        }
    }

    /// Map pixel coordinates to viewport coordinates.
    ///
    /// `u = x / (width - 1)`, so the first and last columns land exactly
    /// on the viewport edges.
    pub fn pixel_to_uv(&self, x: u32, y: u32) -> (f32, f32) {
        self.sample_to_uv(x as f32, y as f32)
    }

    /// Like [`Camera::pixel_to_uv`] for fractional (jittered) positions.
    ///
    /// A dimension of one pixel maps to the viewport center.
    pub fn sample_to_uv(&self, x: f32, y: f32) -> (f32, f32) {
        (
            axis_to_unit(x, self.image_width),
            axis_to_unit(y, self.image_height),
        )
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn lower_left(&self) -> Vec3 {
        self.lower_left
    }

    pub fn horizontal(&self) -> Vec3 {
        self.horizontal
    }

    pub fn vertical(&self) -> Vec3 {
        self.vertical
    }
}

#[inline]
fn axis_to_unit(p: f32, dimension: u32) -> f32 {
    if dimension <= 1 {
        return 0.5;
    }
    p / (dimension - 1) as f32
}
