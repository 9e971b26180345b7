//! Scene description types.
//!
//! These are plain serde structs mirroring the JSON scene format. They
//! carry no rendering logic; `prism_renderer` turns them into a scene,
//! camera and render settings.

use prism_math::Vec3;
use serde::{Deserialize, Serialize};

/// Output image size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageDesc {
    pub width: u32,
    pub height: u32,
}

impl Default for ImageDesc {
    fn default() -> Self {
        Self {
            width: 400,
            height: 225,
        }
    }
}

impl ImageDesc {
    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Camera projection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProjectionDesc {
    /// Vertical field of view in degrees; aspect comes from the image.
    Perspective { fov: f32 },
    Orthographic {
        viewport_width: f32,
        viewport_height: f32,
    },
}

impl Default for ProjectionDesc {
    fn default() -> Self {
        ProjectionDesc::Perspective { fov: 90.0 }
    }
}

/// Camera placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDesc {
    pub origin: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: ProjectionDesc,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            target: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            projection: ProjectionDesc::default(),
        }
    }
}

/// Sampling and output settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderDesc {
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub gamma: f32,
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for RenderDesc {
    fn default() -> Self {
        Self {
            samples_per_pixel: 1,
            max_depth: 10,
            gamma: 1.0,
            seed: 0x5EED,
            show_progress: true,
        }
    }
}

/// Color for rays that miss every object.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundDesc {
    Solid(Vec3),
    Gradient { bottom: Vec3, top: Vec3 },
}

impl Default for BackgroundDesc {
    fn default() -> Self {
        BackgroundDesc::Gradient {
            bottom: Vec3::ONE,
            top: Vec3::new(0.5, 0.7, 1.0),
        }
    }
}

/// Light falloff coefficients. Zero means no falloff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttenuationDesc {
    pub linear: f32,
    pub quadratic: f32,
}

/// A primitive in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectDesc {
    Sphere {
        center: Vec3,
        radius: f32,
        color: Vec3,
    },
    Plane {
        point: Vec3,
        normal: Vec3,
        color: Vec3,
    },
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightDesc {
    pub position: Vec3,
    #[serde(default = "white")]
    pub color: Vec3,
    #[serde(default = "unit_intensity")]
    pub intensity: f32,
}

fn white() -> Vec3 {
    Vec3::ONE
}

fn unit_intensity() -> f32 {
    1.0
}

/// A complete scene: what to render and how.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    /// Scene name (usually from filename)
    pub name: String,
    pub image: ImageDesc,
    pub camera: CameraDesc,
    pub render: RenderDesc,
    pub background: BackgroundDesc,
    pub attenuation: AttenuationDesc,
    pub objects: Vec<ObjectDesc>,
    pub lights: Vec<LightDesc>,
}

impl SceneDescription {
    /// Create an empty scene with default camera and settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The built-in scene: three spheres on a ground plane, two lights.
    pub fn demo() -> Self {
        Self {
            name: "demo".to_string(),
            camera: CameraDesc {
                origin: Vec3::new(0.0, 0.5, 1.5),
                target: Vec3::new(0.0, 0.0, -1.0),
                up: Vec3::Y,
                projection: ProjectionDesc::Perspective { fov: 70.0 },
            },
            objects: vec![
                ObjectDesc::Plane {
                    point: Vec3::new(0.0, -0.5, 0.0),
                    normal: Vec3::Y,
                    color: Vec3::new(0.8, 0.8, 0.8),
                },
                ObjectDesc::Sphere {
                    center: Vec3::new(0.0, 0.0, -1.0),
                    radius: 0.5,
                    color: Vec3::new(0.7, 0.3, 0.3),
                },
                ObjectDesc::Sphere {
                    center: Vec3::new(-1.1, 0.0, -1.3),
                    radius: 0.5,
                    color: Vec3::new(0.3, 0.7, 0.3),
                },
                ObjectDesc::Sphere {
                    center: Vec3::new(1.1, 0.0, -1.3),
                    radius: 0.5,
                    color: Vec3::new(0.3, 0.3, 0.7),
                },
            ],
            lights: vec![
                LightDesc {
                    position: Vec3::new(2.0, 3.0, 1.0),
                    color: Vec3::ONE,
                    intensity: 0.8,
                },
                LightDesc {
                    position: Vec3::new(-3.0, 2.0, 0.5),
                    color: Vec3::new(1.0, 0.9, 0.7),
                    intensity: 0.4,
                },
            ],
            ..Default::default()
        }
    }

    /// Get object count.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
