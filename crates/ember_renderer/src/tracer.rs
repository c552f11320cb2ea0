//! Core path tracing loop.
//!
//! One `trace` call estimates the radiance arriving along a single camera
//! ray by walking up to `max_bounces + 1` path segments, resampling the
//! direction at every surface hit and accumulating emitted light weighted
//! by the running throughput.

use ember_core::Scene;
use ember_math::{Interval, Vec3};

use crate::config::{LightAccumulation, RenderConfig};
use crate::intersect::{closest_hit, HIT_EPSILON};
use crate::ray::Ray;
use crate::sampler::Sampler;
use crate::sky::Sky;

/// Nominal distance to the (directional) sun for occlusion queries.
const SUN_DISTANCE: f32 = 1.0e4;

/// Rec.601 luminance of a linear RGB color.
#[inline]
pub fn luminance(color: Vec3) -> f32 {
    0.299 * color.x + 0.587 * color.y + 0.114 * color.z
}

/// Mirror-reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Radiance and primary-hit depth for one traced path.
#[derive(Debug, Clone, Copy)]
pub struct TraceSample {
    /// Estimated incoming radiance along the camera ray
    pub radiance: Vec3,
    /// Primary-hit distance normalized by the render distance (1 on miss)
    pub depth: f32,
}

/// Path tracer over one frame's immutable scene data.
///
/// Holds only shared references, so one tracer is freely shared across
/// render tasks.
#[derive(Clone, Copy)]
pub struct PathTracer<'a> {
    scene: &'a Scene,
    sky: &'a Sky,
    config: &'a RenderConfig,
}

impl<'a> PathTracer<'a> {
    pub fn new(scene: &'a Scene, sky: &'a Sky, config: &'a RenderConfig) -> Self {
        Self { scene, sky, config }
    }

    fn hit_range(&self) -> Interval {
        Interval::new(HIT_EPSILON, self.config.render_distance)
    }

    /// Estimate the radiance arriving along `ray`.
    ///
    /// The ray is consumed: its origin and direction are rewritten at each
    /// bounce. Paths always run to the bounce cap or an environment miss;
    /// there is no Russian-roulette termination.
    pub fn trace(&self, mut ray: Ray, sampler: &mut Sampler) -> TraceSample {
        let config = self.config;
        let range = self.hit_range();

        let mut incoming = Vec3::ZERO;
        let mut throughput = Vec3::ONE;
        let mut depth = 1.0;
        let mut hit_anything = false;

        for bounce in 0..=config.max_bounces {
            let hit = closest_hit(&ray, self.scene, range, config.cull_backfaces);

            if bounce == 0 {
                depth = if hit.hit {
                    (hit.t / config.render_distance).min(1.0)
                } else {
                    1.0
                };
            }

            if !hit.hit {
                if config.environment_enabled {
                    let mut environment = self.sky.radiance(ray.direction) * self.sky.intensity;
                    // Sky seen indirectly is darkened separately from the
                    // path throughput
                    if hit_anything {
                        environment *= config.indirect_sky_strength;
                    }
                    incoming += environment * throughput;
                }
                break;
            }

            hit_anything = true;
            let material = hit.material;

            // Cosine-weighted-like diffuse lobe: normal perturbed by a
            // uniform unit vector
            let diffuse_dir = {
                let d = hit.normal + sampler.next_direction();
                if d.length_squared() < 1e-8 {
                    hit.normal
                } else {
                    d.normalize()
                }
            };
            let specular_dir = reflect(ray.direction, hit.normal);
            let is_specular = if sampler.next_uniform() < material.specular_probability {
                1.0
            } else {
                0.0
            };

            ray.origin = hit.point;
            ray.direction = diffuse_dir
                .lerp(specular_dir, material.smoothness * is_specular)
                .normalize();

            // Emission picks up the throughput accumulated so far, before
            // this surface's color is folded in
            let emitted = material.emission_color * material.emission_strength;
            let absorbed = material.color.lerp(material.specular_color, is_specular);
            match config.accumulation {
                LightAccumulation::Standard => {
                    incoming += emitted * throughput;
                    throughput *= absorbed;
                }
                LightAccumulation::Energy => {
                    // The ray carries the luminance of the throughput as a
                    // scalar energy, recomputed after every bounce and
                    // spent on the next emission pickup
                    incoming += emitted * throughput * ray.energy;
                    throughput *= absorbed;
                    ray.energy = luminance(throughput);
                }
            }
        }

        TraceSample {
            radiance: incoming,
            depth,
        }
    }

    /// Occlusion query from a surface point toward the sun.
    ///
    /// Fires a single ray against the sun's travel direction and reports
    /// whether any geometry sits closer than the nominal sun distance.
    /// Unused by the main integration loop; kept for direct-lighting
    /// extensions.
    pub fn cast_shadow_ray(&self, origin: Vec3) -> bool {
        if !self.config.shadows_enabled {
            return false;
        }
        let ray = Ray::new(origin, -self.sky.sun_direction);
        let range = Interval::new(HIT_EPSILON, SUN_DISTANCE);
        closest_hit(&ray, self.scene, range, self.config.cull_backfaces).hit
    }
}
