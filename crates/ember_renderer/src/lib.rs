//! Ember - progressive CPU path tracing
//!
//! A Monte Carlo path tracer producing a progressively denoised image:
//! each frame is an independent stochastic estimate, and a temporal
//! accumulation pass folds frames into an exact running mean. Rendering is
//! fully deterministic given the frame counter; there is no global
//! entropy source anywhere in the kernel.

mod accumulate;
mod bucket;
mod camera;
mod config;
mod film;
mod hit;
mod integrator;
mod intersect;
mod ray;
mod sampler;
mod sky;
mod tracer;

pub use accumulate::accumulate;
pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use config::{LightAccumulation, RenderConfig};
pub use film::{color_to_rgba, linear_to_gamma, DepthFilm, Film};
pub use hit::HitRecord;
pub use integrator::{render_frame, render_pixel};
pub use intersect::{closest_hit, intersect_sphere, intersect_triangle, HIT_EPSILON};
pub use ray::Ray;
pub use sampler::Sampler;
pub use sky::Sky;
pub use tracer::{luminance, PathTracer, TraceSample};

/// Re-export math and scene types for downstream convenience
pub use ember_core::{Color, Material, Mesh, Scene, Sphere, Triangle};
pub use ember_math::{Aabb, Interval, Vec3};
