//! Prism Core - scene descriptions for the Prism ray caster.
//!
//! This crate provides:
//!
//! - **Description types**: `SceneDescription` and its camera, image,
//!   render, background, object and light sections
//! - **Loading**: JSON scene files via serde, with validation
//!
//! # Example
//!
//! ```ignore
//! use prism_core::load_scene;
//!
//! let desc = load_scene("scene.json")?;
//! println!("Loaded {} objects, {} lights",
//!     desc.objects.len(),
//!     desc.lights.len());
//! ```

pub mod description;
pub mod loader;

// Re-export commonly used types
pub use description::{
    AttenuationDesc, BackgroundDesc, CameraDesc, ImageDesc, LightDesc, ObjectDesc,
    ProjectionDesc, RenderDesc, SceneDescription,
};
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
