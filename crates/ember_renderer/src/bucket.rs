//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that render independently and
//! in parallel. Each bucket task owns its samplers outright and touches
//! only its own output vectors, so there is no shared mutable state
//! during the render pass.

use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::integrator::render_pixel;
use crate::tracer::PathTracer;

use ember_math::Vec3;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 32;

/// Generate buckets for an image, sorted center-out.
///
/// Center-out ordering mimics production renderers, where the visually
/// important middle of the frame finishes first. The order affects only
/// scheduling; pixel output is identical either way.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    // A zero size would never advance the sweep below
    let bucket_size = bucket_size.max(1);

    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_center_out(&mut buckets, width, height);

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from the image center.
fn sort_center_out(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    buckets.sort_by(|a, b| {
        let a_dist = (a.x as f32 + a.width as f32 / 2.0 - center_x).powi(2)
            + (a.y as f32 + a.height as f32 / 2.0 - center_y).powi(2);
        let b_dist = (b.x as f32 + b.width as f32 / 2.0 - center_x).powi(2)
            + (b.y as f32 + b.height as f32 / 2.0 - center_y).powi(2);

        a_dist
            .partial_cmp(&b_dist)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Result of rendering a bucket: colors and depths in row-major order
/// within the bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    pub pixels: Vec<Vec3>,
    pub depths: Vec<f32>,
}

/// Render every pixel of a bucket for one frame.
pub fn render_bucket(
    bucket: &Bucket,
    tracer: &PathTracer<'_>,
    camera: &Camera,
    config: &RenderConfig,
    frame: u32,
) -> BucketResult {
    let count = bucket.pixel_count() as usize;
    let mut pixels = Vec::with_capacity(count);
    let mut depths = Vec::with_capacity(count);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let x = bucket.x + local_x;
            let y = bucket.y + local_y;
            let (color, depth) = render_pixel(tracer, camera, config, x, y, frame);
            pixels.push(color);
            depths.push(depth);
        }
    }

    BucketResult {
        bucket: *bucket,
        pixels,
        depths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(64, 64, 32);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 64 * 64);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(50, 50, 32);
        assert_eq!(buckets.len(), 4); // 2x2 grid with partial buckets

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 50 * 50);
    }

    #[test]
    fn test_zero_bucket_size_clamps_to_one() {
        let buckets = generate_buckets(3, 2, 0);
        assert_eq!(buckets.len(), 6); // one bucket per pixel

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 6);
    }

    #[test]
    fn test_center_out_order() {
        let buckets = generate_buckets(96, 96, 32);
        assert_eq!(buckets.len(), 9); // 3x3 grid

        // First bucket should be the center one
        let first = &buckets[0];
        assert_eq!(first.x, 32);
        assert_eq!(first.y, 32);
    }
}
