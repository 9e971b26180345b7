use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use prism_core::{load_scene, SceneDescription};
use prism_renderer::RenderJob;
use structopt::StructOpt;

/// Images larger than this in either dimension get a warning.
const LARGE_IMAGE: u32 = 4096;

/// Render spheres and planes lit by point lights to a PPM image.
#[derive(Debug, StructOpt)]
#[structopt(name = "prism", rename_all = "kebab-case")]
struct Opt {
    /// Image width in pixels (overrides the scene file)
    #[structopt(short = "w", long)]
    width: Option<u32>,

    /// Image height in pixels (overrides the scene file)
    #[structopt(short = "h", long)]
    height: Option<u32>,

    /// Output PPM file
    #[structopt(short = "o", long, default_value = "output.ppm", parse(from_os_str))]
    output: PathBuf,

    /// JSON scene description; the built-in demo scene is used if omitted
    #[structopt(short = "s", long, parse(from_os_str))]
    scene: Option<PathBuf>,

    /// Samples per pixel (overrides the scene file)
    #[structopt(long)]
    samples: Option<u32>,

    /// Disable the progress bar
    #[structopt(short = "q", long)]
    quiet: bool,
}

/// Apply command line overrides on top of the scene description.
fn apply_overrides(desc: &mut SceneDescription, opt: &Opt) -> Result<()> {
    if let Some(width) = opt.width {
        if width == 0 {
            bail!("width must be positive");
        }
        desc.image.width = width;
    }
    if let Some(height) = opt.height {
        if height == 0 {
            bail!("height must be positive");
        }
        desc.image.height = height;
    }
    if let Some(samples) = opt.samples {
        if samples == 0 {
            bail!("samples must be positive");
        }
        desc.render.samples_per_pixel = samples;
    }
    if opt.quiet {
        desc.render.show_progress = false;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = Opt::from_args();
    log::debug!("{:?}", opt);

    let mut desc = match &opt.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => SceneDescription::demo(),
    };
    apply_overrides(&mut desc, &opt)?;

    if desc.image.width > LARGE_IMAGE || desc.image.height > LARGE_IMAGE {
        log::warn!(
            "Large image size {}x{} may be slow",
            desc.image.width,
            desc.image.height
        );
    }

    let job = RenderJob::from_description(&desc)
        .with_context(|| format!("failed to build scene '{}'", desc.name))?;

    let file = File::create(&opt.output)
        .with_context(|| format!("could not open output file {}", opt.output.display()))?;

    let start = Instant::now();
    job.render(file)
        .with_context(|| format!("failed to render to {}", opt.output.display()))?;

    log::info!(
        "Wrote {}x{} image to {} in {:?}",
        desc.image.width,
        desc.image.height,
        opt.output.display(),
        start.elapsed()
    );
    Ok(())
}
