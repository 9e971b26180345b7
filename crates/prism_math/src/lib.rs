// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod interval;
mod ray;
mod vec_ext;

pub use interval::Interval;
pub use ray::Ray;
pub use vec_ext::{VecExt, NORMALIZE_EPSILON};
