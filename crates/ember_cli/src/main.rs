//! Headless progressive renderer.
//!
//! Renders a scene over many frames, folding each frame into the temporal
//! history buffer, then writes the converged image as a PNG. With no
//! arguments a built-in demo scene is used:
//!
//! ```text
//! ember [scene.json] [frames]
//! ```

use anyhow::Context;

use ember_core::{load_scene, Material, Scene, Sphere, Triangle};
use ember_math::Vec3;
use ember_renderer::{
    accumulate, render_frame, Camera, DepthFilm, Film, RenderConfig, Sky,
};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;
const DEFAULT_FRAMES: u32 = 32;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let scene_path = args.next();
    let frames: u32 = match args.next() {
        Some(n) => n.parse().context("frame count must be an integer")?,
        None => DEFAULT_FRAMES,
    };
    anyhow::ensure!(frames >= 1, "need at least one frame");

    let scene = match &scene_path {
        Some(path) => {
            log::info!("Loading scene from {path}");
            load_scene(path).with_context(|| format!("failed to load {path}"))?
        }
        None => {
            log::info!("No scene file given, using the demo scene");
            demo_scene()
        }
    };
    log::info!(
        "Scene: {} spheres, {} triangles in {} meshes",
        scene.spheres.len(),
        scene.triangles.len(),
        scene.meshes.len()
    );

    let camera = Camera::look_at(
        Vec3::new(0.0, 1.5, 4.0),
        Vec3::new(0.0, 0.8, 0.0),
        Vec3::Y,
        50.0,
        WIDTH,
        HEIGHT,
    );
    let sky = Sky::default();
    let config = RenderConfig {
        samples_per_pixel: 8,
        max_bounces: 4,
        depth_enabled: true,
        ..Default::default()
    };

    let mut raw = Film::new(WIDTH, HEIGHT);
    let mut history = Film::new(WIDTH, HEIGHT);
    let mut depth = DepthFilm::new(WIDTH, HEIGHT);

    log::info!(
        "Rendering {WIDTH}x{HEIGHT} @ {} spp, {frames} frames",
        config.samples_per_pixel
    );
    let start = std::time::Instant::now();

    for frame in 0..frames {
        let frame_start = std::time::Instant::now();
        render_frame(
            &camera,
            &scene,
            &sky,
            &config,
            frame,
            &mut raw,
            Some(&mut depth),
        );
        // The render pass has fully completed before accumulation starts
        accumulate(&mut history, &raw, frame);
        log::info!("frame {}/{} in {:?}", frame + 1, frames, frame_start.elapsed());
    }

    log::info!("Rendered {frames} frames in {:?}", start.elapsed());

    image::save_buffer(
        "ember.png",
        &history.to_rgba(),
        WIDTH,
        HEIGHT,
        image::ColorType::Rgba8,
    )
    .context("failed to write ember.png")?;
    log::info!("Wrote ember.png");

    if config.depth_enabled {
        image::save_buffer(
            "ember_depth.png",
            &depth.to_gray(),
            WIDTH,
            HEIGHT,
            image::ColorType::L8,
        )
        .context("failed to write ember_depth.png")?;
        log::info!("Wrote ember_depth.png");
    }

    Ok(())
}

/// Built-in demo scene: a quad floor, three spheres of varying gloss, and
/// an emissive sphere lamp.
fn demo_scene() -> Scene {
    let mut scene = Scene::new();

    // Floor quad, wound so the normal faces up
    let floor = vec![
        Triangle::new(
            Vec3::new(-6.0, 0.0, -6.0),
            Vec3::new(-6.0, 0.0, 6.0),
            Vec3::new(6.0, 0.0, 6.0),
        ),
        Triangle::new(
            Vec3::new(-6.0, 0.0, -6.0),
            Vec3::new(6.0, 0.0, 6.0),
            Vec3::new(6.0, 0.0, -6.0),
        ),
    ];
    scene.add_mesh(floor, Material::diffuse(Vec3::new(0.55, 0.55, 0.5)));

    scene.add_sphere(Sphere::new(
        Vec3::new(-1.6, 0.8, 0.0),
        0.8,
        Material::diffuse(Vec3::new(0.8, 0.25, 0.2)),
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(0.0, 0.8, -0.6),
        0.8,
        Material::glossy(Vec3::new(0.25, 0.5, 0.85), 0.7, 0.4),
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(1.6, 0.8, 0.0),
        0.8,
        Material::glossy(Vec3::new(0.9, 0.9, 0.9), 1.0, 1.0),
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(0.6, 3.2, 2.0),
        0.6,
        Material::emissive(Vec3::new(1.0, 0.95, 0.85), 12.0),
    ));

    scene
}
