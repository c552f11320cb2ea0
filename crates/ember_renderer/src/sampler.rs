//! Deterministic per-path random number generation.
//!
//! Each in-flight path owns one 32-bit state, seeded from its pixel index
//! and the frame counter. Every draw advances the state with a wrapping
//! linear-congruential mix followed by an xorshift-style avalanche; there
//! is no hidden entropy source anywhere, which is what makes repeated
//! renders bit-identical.

use ember_math::{Vec2, Vec3};
use std::f32::consts::TAU;

/// Frame stride mixed into the per-pixel seed so successive frames draw
/// decorrelated sample streams.
const FRAME_SEED_STRIDE: u32 = 719393;

/// Pseudo-random sample stream for one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    state: u32,
}

impl Sampler {
    /// Create a sampler from a raw seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create the sampler for a pixel on a given frame.
    pub fn for_pixel(pixel_index: u32, frame: u32) -> Self {
        Self::new(pixel_index.wrapping_add(frame.wrapping_mul(FRAME_SEED_STRIDE)))
    }

    /// Advance the state and return the next raw 32-bit value.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(747_796_405)
            .wrapping_add(2_891_336_453);
        let s = self.state;
        let word = ((s >> ((s >> 28) + 4)) ^ s).wrapping_mul(277_803_737);
        (word >> 22) ^ word
    }

    /// Uniform value in [0, 1).
    ///
    /// Uses the top 24 bits so the quotient is exactly representable and
    /// never rounds up to 1.0.
    #[inline]
    pub fn next_uniform(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / 16_777_216.0
    }

    /// Standard-normal value via the polar Box-Muller transform.
    #[inline]
    pub fn next_normal(&mut self) -> f32 {
        let theta = TAU * self.next_uniform();
        // 1 - u lies in (0, 1], keeping the log finite
        let rho = (-2.0 * (1.0 - self.next_uniform()).ln()).sqrt();
        rho * theta.cos()
    }

    /// Uniformly distributed unit vector on the sphere.
    ///
    /// Three independent normals, normalized; the joint density is
    /// rotationally symmetric so no rejection loop is needed.
    #[inline]
    pub fn next_direction(&mut self) -> Vec3 {
        Vec3::new(self.next_normal(), self.next_normal(), self.next_normal()).normalize()
    }

    /// Unit vector on the hemisphere around `normal`.
    ///
    /// Sign-flips a sphere sample onto the normal's side, so every draw is
    /// accepted.
    #[inline]
    pub fn next_hemisphere(&mut self, normal: Vec3) -> Vec3 {
        let dir = self.next_direction();
        if dir.dot(normal) < 0.0 {
            -dir
        } else {
            dir
        }
    }

    /// Area-uniform point inside the unit disk.
    #[inline]
    pub fn next_disk(&mut self) -> Vec2 {
        let angle = TAU * self.next_uniform();
        let radius = self.next_uniform().sqrt();
        Vec2::new(angle.cos(), angle.sin()) * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_range_and_coverage() {
        for seed in [0u32, 1, 42, 0xdead_beef, u32::MAX] {
            let mut sampler = Sampler::new(seed);
            let mut min = f32::INFINITY;
            let mut max = f32::NEG_INFINITY;
            for _ in 0..10_000 {
                let v = sampler.next_uniform();
                assert!((0.0..1.0).contains(&v), "out of range: {v}");
                min = min.min(v);
                max = max.max(v);
            }
            // The stream should spread over most of [0, 1)
            assert!(min < 0.05, "seed {seed}: min {min}");
            assert!(max > 0.95, "seed {seed}: max {max}");
        }
    }

    #[test]
    fn test_state_always_advances() {
        // No fixed point: the state must change on every call
        for seed in [0u32, 7, 719393, u32::MAX] {
            let mut sampler = Sampler::new(seed);
            for _ in 0..1000 {
                let before = sampler;
                sampler.next_uniform();
                assert_ne!(sampler, before);
            }
        }
    }

    #[test]
    fn test_deterministic_given_seed() {
        let mut a = Sampler::for_pixel(123, 7);
        let mut b = Sampler::for_pixel(123, 7);
        for _ in 0..100 {
            assert_eq!(a.next_uniform().to_bits(), b.next_uniform().to_bits());
        }
    }

    #[test]
    fn test_normal_is_roughly_centered() {
        let mut sampler = Sampler::new(99);
        let n = 20_000;
        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        for _ in 0..n {
            let v = sampler.next_normal() as f64;
            assert!(v.is_finite());
            sum += v;
            sum_sq += v * v;
        }
        let mean = sum / n as f64;
        let var = sum_sq / n as f64 - mean * mean;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((var - 1.0).abs() < 0.1, "variance {var}");
    }

    #[test]
    fn test_direction_is_unit() {
        let mut sampler = Sampler::new(5);
        for _ in 0..1000 {
            let d = sampler.next_direction();
            assert!((d.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_hemisphere_respects_normal() {
        let mut sampler = Sampler::new(11);
        let normal = Vec3::new(0.0, 1.0, 0.0);
        for _ in 0..1000 {
            let d = sampler.next_hemisphere(normal);
            assert!(d.dot(normal) >= 0.0);
        }
    }

    #[test]
    fn test_disk_points_inside_unit_circle() {
        let mut sampler = Sampler::new(13);
        for _ in 0..1000 {
            let p = sampler.next_disk();
            assert!(p.length() <= 1.0 + 1e-6);
        }
    }
}
