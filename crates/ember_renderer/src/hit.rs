//! Hit record produced by every intersection query.

use ember_core::Material;
use ember_math::Vec3;

/// Result of a ray-primitive intersection test.
///
/// When `hit` is false the remaining fields are sentinels (`t` is
/// infinity); callers must check the flag before reading them.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Whether the ray struck the primitive
    pub hit: bool,
    /// Distance along the ray to the intersection
    pub t: f32,
    /// World-space intersection point
    pub point: Vec3,
    /// Surface normal at the intersection (unit length)
    pub normal: Vec3,
    /// Material of the primitive that was struck
    pub material: Material,
}

impl HitRecord {
    /// A non-hit, used to seed nearest-hit searches.
    pub fn miss() -> Self {
        Self {
            hit: false,
            t: f32::INFINITY,
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: Material::default(),
        }
    }
}

impl Default for HitRecord {
    fn default() -> Self {
        Self::miss()
    }
}
