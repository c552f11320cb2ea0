//! Ray type for path tracing.

use ember_math::Vec3;

/// A ray with origin, unit direction, and a scalar energy accumulator.
///
/// The origin and direction are rewritten in place at every bounce. The
/// `energy` field is only read and written by the energy light-accumulation
/// mode; the standard mode ignores it.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray
    pub origin: Vec3,
    /// Direction vector (unit length)
    pub direction: Vec3,
    /// Scalar energy carried along the path (energy accumulation mode only)
    pub energy: f32,
}

impl Ray {
    /// Create a new ray with full energy.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            energy: 1.0,
        }
    }

    /// Compute a point along the ray at parameter t.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::NEG_Z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        assert_eq!(ray.at(0.0), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(ray.at(1.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.5), Vec3::new(2.5, 0.0, 0.0));
    }

    #[test]
    fn test_new_ray_has_full_energy() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(ray.energy, 1.0);
    }
}
