//! Scene file loading.
//!
//! Scene files are JSON documents matching [`SceneDescription`]. Every
//! section is optional; missing sections take their defaults.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::description::{ObjectDesc, ProjectionDesc, SceneDescription};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and validate a scene file.
///
/// The scene name defaults to the file stem when the file does not set one.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    let mut desc = load_scene_from_str(&source)?;

    if desc.name.is_empty() {
        desc.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();
    }

    log::info!(
        "Loaded scene '{}' from {}: {} objects, {} lights",
        desc.name,
        path.display(),
        desc.object_count(),
        desc.light_count()
    );
    Ok(desc)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(source: &str) -> LoadResult<SceneDescription> {
    let desc: SceneDescription = serde_json::from_str(source)?;
    validate(&desc)?;
    Ok(desc)
}

/// Reject descriptions that cannot be rendered.
///
/// Recoverable oddities (non-positive radii, zero-length normals) are only
/// logged; the primitives themselves handle them.
pub fn validate(desc: &SceneDescription) -> LoadResult<()> {
    if desc.image.width == 0 || desc.image.height == 0 {
        return Err(LoadError::Invalid(format!(
            "image must be at least 1x1, got {}x{}",
            desc.image.width, desc.image.height
        )));
    }
    if desc.render.samples_per_pixel == 0 {
        return Err(LoadError::Invalid(
            "samples_per_pixel must be at least 1".into(),
        ));
    }
    if desc.render.max_depth == 0 {
        return Err(LoadError::Invalid("max_depth must be at least 1".into()));
    }
    if !(desc.render.gamma > 0.0) {
        return Err(LoadError::Invalid(format!(
            "gamma must be positive, got {}",
            desc.render.gamma
        )));
    }

    match desc.camera.projection {
        ProjectionDesc::Perspective { fov } if !(fov > 0.0 && fov < 180.0) => {
            return Err(LoadError::Invalid(format!(
                "fov must be between 0 and 180 degrees, got {}",
                fov
            )));
        }
        ProjectionDesc::Orthographic {
            viewport_width,
            viewport_height,
        } if !(viewport_width > 0.0 && viewport_height > 0.0) => {
            return Err(LoadError::Invalid(format!(
                "orthographic viewport must be positive, got {}x{}",
                viewport_width, viewport_height
            )));
        }
        _ => {}
    }

    if (desc.camera.origin - desc.camera.target).length_squared() == 0.0 {
        return Err(LoadError::Invalid(
            "camera origin and target must differ".into(),
        ));
    }

    for (i, object) in desc.objects.iter().enumerate() {
        match object {
            ObjectDesc::Sphere { radius, .. } if *radius <= 0.0 => {
                log::warn!("Object {}: sphere radius {} is not positive, using 1.0", i, radius);
            }
            ObjectDesc::Plane { normal, .. } if normal.length_squared() == 0.0 => {
                log::warn!("Object {}: plane normal is zero, plane will never be hit", i);
            }
            _ => {}
        }
    }

    for (i, light) in desc.lights.iter().enumerate() {
        if light.intensity < 0.0 {
            log::warn!("Light {}: negative intensity {} clamped to 0", i, light.intensity);
        }
    }

    Ok(())
}
