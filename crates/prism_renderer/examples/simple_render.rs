//! Simple ray casting example.
//!
//! Builds a small scene in code and saves it in PPM format.

use prism_renderer::{
    render, Background, Camera, Color, Plane, PointLight, RenderSettings, Scene, Sphere, Vec3,
};
use std::fs::File;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Prism Ray Caster - Simple Example");
    println!("=================================");

    let scene = build_scene()?;
    println!("{}", scene);

    // Set up camera
    let (width, height) = (800, 450);
    let camera = Camera::perspective(
        Vec3::new(0.0, 1.0, 2.0),  // look_from
        Vec3::new(0.0, 0.0, -1.0), // look_at
        Vec3::new(0.0, 1.0, 0.0),  // vup
        60.0,
        width as f32 / height as f32,
        width,
        height,
    );

    let settings = RenderSettings {
        samples_per_pixel: 4,
        show_progress: true,
        gamma: 2.0,
        ..RenderSettings::default()
    };

    let start = std::time::Instant::now();
    let filename = "output.ppm";
    render(&scene, &camera, &settings, File::create(filename)?)?;

    println!("Rendered in {:?}", start.elapsed());
    println!("Saved to {}", filename);
    Ok(())
}

fn build_scene() -> Result<Scene, prism_renderer::SceneError> {
    let mut scene = Scene::new(Background::SKY);

    // Ground
    scene.add_object(Plane::horizontal(-0.5, Color::new(0.5, 0.5, 0.5)))?;

    // A row of spheres
    for i in -2..=2 {
        let x = i as f32 * 1.1;
        let tint = (i + 2) as f32 / 4.0;
        scene.add_object(Sphere::new(
            Vec3::new(x, 0.0, -1.5),
            0.5,
            Color::new(tint, 0.4, 1.0 - tint),
        ))?;
    }

    scene.add_light(PointLight::white(Vec3::new(3.0, 4.0, 2.0), 0.9))?;
    scene.add_light(PointLight::new(
        Vec3::new(-4.0, 2.0, 0.0),
        Color::new(1.0, 0.8, 0.6),
        0.3,
    ))?;

    Ok(scene)
}
