//! Camera ray generation.
//!
//! The host hands the renderer a camera-to-world transform and an inverse
//! projection matrix; primary rays are built by unprojecting each pixel's
//! normalized device coordinates into view space and carrying origin and
//! direction into world space.

use ember_math::{Mat4, Vec3};

use crate::ray::Ray;

/// Camera for generating primary rays.
#[derive(Debug, Clone)]
pub struct Camera {
    cam_to_world: Mat4,
    inv_projection: Mat4,
    pub width: u32,
    pub height: u32,
}

impl Camera {
    /// Create a camera from the host-supplied matrices.
    pub fn from_matrices(cam_to_world: Mat4, inv_projection: Mat4, width: u32, height: u32) -> Self {
        Self {
            cam_to_world,
            inv_projection,
            width,
            height,
        }
    }

    /// Convenience constructor from a look-at pose and a vertical field of
    /// view in degrees.
    pub fn look_at(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        vfov_degrees: f32,
        width: u32,
        height: u32,
    ) -> Self {
        let aspect = width as f32 / height as f32;
        let projection =
            Mat4::perspective_rh(vfov_degrees.to_radians(), aspect, 0.01, 1000.0);
        Self {
            cam_to_world: Mat4::look_at_rh(eye, target, up).inverse(),
            inv_projection: projection.inverse(),
            width,
            height,
        }
    }

    /// Generate the primary ray through the center of pixel (x, y).
    ///
    /// Deterministic: no sub-pixel jitter, so every sample of a pixel
    /// shares the same camera ray.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let ndc_x = (x as f32 + 0.5) / self.width as f32 * 2.0 - 1.0;
        let ndc_y = 1.0 - (y as f32 + 0.5) / self.height as f32 * 2.0;

        // Unproject a point on the far plane to get the view-space direction
        let view_target = self
            .inv_projection
            .project_point3(Vec3::new(ndc_x, ndc_y, 1.0));

        let origin = self.cam_to_world.transform_point3(Vec3::ZERO);
        let direction = self
            .cam_to_world
            .transform_vector3(view_target)
            .normalize();

        Ray::new(origin, direction)
    }

    /// Linear pixel index used to seed the sampler.
    #[inline]
    pub fn pixel_index(&self, x: u32, y: u32) -> u32 {
        y * self.width + x
    }
}
