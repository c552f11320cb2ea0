//! Per-pixel integration: one frame of raw radiance estimates.
//!
//! Every pixel is an independent task: it derives its own sampler from the
//! pixel index and frame counter, traces `samples_per_pixel` paths through
//! the shared read-only scene, and averages them. Buckets of pixels run in
//! parallel on rayon; the frame's buffer writes all complete before the
//! function returns, which is the ordering barrier the temporal
//! accumulation pass relies on.

use rayon::prelude::*;

use ember_core::Scene;
use ember_math::Vec3;

use crate::bucket::{generate_buckets, render_bucket, DEFAULT_BUCKET_SIZE};
use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::film::{DepthFilm, Film};
use crate::sampler::Sampler;
use crate::sky::Sky;
use crate::tracer::PathTracer;

/// Render a single pixel: average of `samples_per_pixel` traced paths.
///
/// The caller must guarantee `samples_per_pixel >= 1`. Every sample reuses
/// the pixel's camera ray; the sampler stream simply continues from one
/// sample to the next, so the whole pixel is a pure function of
/// (pixel index, frame, scene).
pub fn render_pixel(
    tracer: &PathTracer<'_>,
    camera: &Camera,
    config: &RenderConfig,
    x: u32,
    y: u32,
    frame: u32,
) -> (Vec3, f32) {
    let mut sampler = Sampler::for_pixel(camera.pixel_index(x, y), frame);
    let ray = camera.primary_ray(x, y);

    let mut total = Vec3::ZERO;
    let mut depth = 1.0;
    for _ in 0..config.samples_per_pixel {
        let sample = tracer.trace(ray, &mut sampler);
        total += sample.radiance;
        depth = sample.depth;
    }

    (total / config.samples_per_pixel as f32, depth)
}

/// Render one full frame into `film` (and `depth_film` when depth output
/// is enabled).
///
/// Buckets render in parallel; the single-threaded write-back below the
/// `collect` keeps all buffer writes inside this call, so the caller can
/// run temporal accumulation immediately afterwards.
pub fn render_frame(
    camera: &Camera,
    scene: &Scene,
    sky: &Sky,
    config: &RenderConfig,
    frame: u32,
    film: &mut Film,
    mut depth_film: Option<&mut DepthFilm>,
) {
    debug_assert_eq!(film.width, camera.width);
    debug_assert_eq!(film.height, camera.height);

    let start = std::time::Instant::now();
    let tracer = PathTracer::new(scene, sky, config);
    let buckets = generate_buckets(camera.width, camera.height, DEFAULT_BUCKET_SIZE);

    let results: Vec<_> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, &tracer, camera, config, frame))
        .collect();

    for result in results {
        let bucket = result.bucket;
        let mut i = 0;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let x = bucket.x + local_x;
                let y = bucket.y + local_y;
                film.set(x, y, result.pixels[i]);
                if config.depth_enabled {
                    if let Some(depth) = depth_film.as_deref_mut() {
                        depth.set(x, y, result.depths[i]);
                    }
                }
                i += 1;
            }
        }
    }

    log::debug!(
        "frame {frame}: {}x{} @ {} spp, {} primitives, {:?}",
        camera.width,
        camera.height,
        config.samples_per_pixel,
        scene.primitive_count(),
        start.elapsed()
    );
}
