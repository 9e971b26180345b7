//! Render driver.
//!
//! Scans every pixel top row first, averages `samples_per_pixel` rays per
//! pixel and streams the result as a plain-text PPM (P3) image.

use std::io::{self, BufWriter, Write};
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, RngCore};
use thiserror::Error;

use crate::{
    color::{self, Color},
    Camera, Lcg, Scene,
};

/// Errors returned by [`render`].
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid render settings: {0}")]
    InvalidSettings(String),

    #[error("failed to write image: {0}")]
    Io(#[from] io::Error),
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray depth (no bounces are traced, see [`Scene::ray_color`])
    pub max_depth: u32,
    /// Show a scanline progress bar on stderr
    pub show_progress: bool,
    /// Output gamma; 1.0 writes linear values
    pub gamma: f32,
    /// Seed for the jitter generator
    pub seed: u64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            samples_per_pixel: 1,
            max_depth: 10,
            show_progress: false,
            gamma: 1.0,
            seed: 0x5EED,
        }
    }
}

impl RenderSettings {
    /// Check settings against the camera they will be used with.
    pub fn validate(&self, camera: &Camera) -> Result<(), RenderError> {
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidSettings(
                "samples_per_pixel must be at least 1".into(),
            ));
        }
        if self.max_depth == 0 {
            return Err(RenderError::InvalidSettings(
                "max_depth must be at least 1".into(),
            ));
        }
        if !(self.gamma > 0.0) {
            return Err(RenderError::InvalidSettings(format!(
                "gamma must be positive, got {}",
                self.gamma
            )));
        }
        if camera.image_width() == 0 || camera.image_height() == 0 {
            return Err(RenderError::InvalidSettings(format!(
                "image must be at least 1x1, got {}x{}",
                camera.image_width(),
                camera.image_height()
            )));
        }
        Ok(())
    }
}

/// Render a single pixel with multi-sampling.
///
/// One sample uses the exact pixel position; more samples are jittered
/// by up to half a pixel in each direction and averaged.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    x: u32,
    y: u32,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Color {
    if settings.samples_per_pixel <= 1 {
        let (u, v) = camera.pixel_to_uv(x, y);
        return scene.ray_color(&camera.get_ray(u, v), settings.max_depth);
    }

    let mut pixel_color = Color::ZERO;
    for _ in 0..settings.samples_per_pixel {
        let sx = x as f32 + rng.gen::<f32>() - 0.5;
        let sy = y as f32 + rng.gen::<f32>() - 0.5;
        let (u, v) = camera.sample_to_uv(sx, sy);
        pixel_color += scene.ray_color(&camera.get_ray(u, v), settings.max_depth);
    }

    // Average the samples
    pixel_color / settings.samples_per_pixel as f32
}

/// Write the PPM header for a `width` x `height` image.
pub fn write_ppm_header<W: Write>(out: &mut W, width: u32, height: u32) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", width, height)?;
    writeln!(out, "255")
}

/// Write one pixel as an `R G B` line.
pub fn write_ppm_pixel<W: Write>(out: &mut W, pixel: Color, gamma: f32) -> io::Result<()> {
    let [r, g, b] = color::to_rgb8(color::gamma_correct(color::clamp(pixel), gamma));
    writeln!(out, "{} {} {}", r, g, b)
}

/// Render the scene and stream it to `output` as a P3 image.
///
/// Settings are validated before anything is written. Write errors are
/// returned as-is; the output may then hold a partial image.
pub fn render<W: Write>(
    scene: &Scene,
    camera: &Camera,
    settings: &RenderSettings,
    output: W,
) -> Result<(), RenderError> {
    settings.validate(camera)?;

    let width = camera.image_width();
    let height = camera.image_height();
    log::info!(
        "Rendering {}x{} @ {} spp ({} objects, {} lights)",
        width,
        height,
        settings.samples_per_pixel,
        scene.len(),
        scene.lights().len()
    );

    let start = Instant::now();
    let progress = progress_bar(height, settings.show_progress);
    let mut rng = Lcg::new(settings.seed);
    let mut out = BufWriter::new(output);

    write_ppm_header(&mut out, width, height)?;

    // Top row first: v = 1 is the top of the viewport
    for y in (0..height).rev() {
        progress.set_message(format!("scanlines remaining: {}", y));
        for x in 0..width {
            let pixel = render_pixel(scene, camera, x, y, settings, &mut rng);
            write_ppm_pixel(&mut out, pixel, settings.gamma)?;
        }
        progress.inc(1);
    }

    out.flush()?;
    progress.finish_and_clear();
    log::info!("Rendered in {:?}", start.elapsed());

    Ok(())
}

fn progress_bar(rows: u32, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(rows as u64);
    let style = ProgressStyle::default_bar()
        .template("{bar:40.cyan/blue} {pos}/{len} rows | {msg} | ETA: {eta}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}
