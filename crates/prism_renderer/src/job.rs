//! Building a renderable scene from a description.

use std::io::Write;

use prism_core::{BackgroundDesc, ObjectDesc, ProjectionDesc, SceneDescription};

use crate::{
    renderer, Attenuation, Background, Camera, Plane, PointLight, Projection, RenderError,
    RenderSettings, Scene, SceneError, Sphere,
};

/// Everything [`renderer::render`] needs, built from one description.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub scene: Scene,
    pub camera: Camera,
    pub settings: RenderSettings,
}

impl RenderJob {
    /// Convert a description into a scene, camera and settings.
    ///
    /// Fails if the description holds more objects or lights than a
    /// scene can store.
    pub fn from_description(desc: &SceneDescription) -> Result<Self, SceneError> {
        Ok(Self {
            scene: build_scene(desc)?,
            camera: build_camera(desc),
            settings: build_settings(desc),
        })
    }

    /// Render this job to `output`.
    pub fn render<W: Write>(&self, output: W) -> Result<(), RenderError> {
        renderer::render(&self.scene, &self.camera, &self.settings, output)
    }
}

fn build_scene(desc: &SceneDescription) -> Result<Scene, SceneError> {
    let background = match desc.background {
        BackgroundDesc::Solid(color) => Background::Solid(color),
        BackgroundDesc::Gradient { bottom, top } => Background::Gradient { bottom, top },
    };
    let attenuation = Attenuation::new(desc.attenuation.linear, desc.attenuation.quadratic);
    let mut scene = Scene::new(background).with_attenuation(attenuation);

    for object in &desc.objects {
        let result = match *object {
            ObjectDesc::Sphere {
                center,
                radius,
                color,
            } => scene.add_object(Sphere::new(center, radius, color)),
            ObjectDesc::Plane {
                point,
                normal,
                color,
            } => scene.add_object(Plane::new(point, normal, color)),
        };
        if let Err(err) = result {
            log::warn!("Scene '{}': {} ({} described)", desc.name, err, desc.object_count());
            return Err(err);
        }
    }

    for light in &desc.lights {
        let light = PointLight::new(light.position, light.color, light.intensity);
        if let Err(err) = scene.add_light(light) {
            log::warn!("Scene '{}': {} ({} described)", desc.name, err, desc.light_count());
            return Err(err);
        }
    }

    log::debug!("Built {}", scene);
    Ok(scene)
}

fn build_camera(desc: &SceneDescription) -> Camera {
    let projection = match desc.camera.projection {
        ProjectionDesc::Perspective { fov } => Projection::Perspective {
            vfov: fov,
            aspect_ratio: desc.image.aspect_ratio(),
        },
        ProjectionDesc::Orthographic {
            viewport_width,
            viewport_height,
        } => Projection::Orthographic {
            viewport_width,
            viewport_height,
        },
    };

    Camera::new(
        projection,
        desc.camera.origin,
        desc.camera.target,
        desc.camera.up,
        desc.image.width,
        desc.image.height,
    )
}

fn build_settings(desc: &SceneDescription) -> RenderSettings {
    RenderSettings {
        samples_per_pixel: desc.render.samples_per_pixel,
        max_depth: desc.render.max_depth,
        show_progress: desc.render.show_progress,
        gamma: desc.render.gamma,
        seed: desc.render.seed,
    }
}
