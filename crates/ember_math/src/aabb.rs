use crate::{Interval, Vec3};

/// Axis-aligned bounding box stored as one interval per axis.
///
/// Mesh records carry their bounds so a future acceleration pass can cull
/// whole triangle ranges; the intersection loop itself does not consult
/// them yet.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create an empty AABB (contains nothing).
    pub fn empty() -> Self {
        Self {
            x: Interval::EMPTY,
            y: Interval::EMPTY,
            z: Interval::EMPTY,
        }
    }

    /// Create an AABB from two corner points.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            x: Interval::new(a.x.min(b.x), a.x.max(b.x)),
            y: Interval::new(a.y.min(b.y), a.y.max(b.y)),
            z: Interval::new(a.z.min(b.z), a.z.max(b.z)),
        }
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&box0.x, &box1.x),
            y: Interval::surrounding(&box0.y, &box1.y),
            z: Interval::surrounding(&box0.z, &box1.z),
        }
    }

    /// Grow the box to include a point.
    pub fn grow(&mut self, p: Vec3) {
        *self = Self::surrounding(self, &Self::from_points(p, p));
    }

    /// Center of the box.
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.x.min + self.x.max) * 0.5,
            (self.y.min + self.y.max) * 0.5,
            (self.z.min + self.z.max) * 0.5,
        )
    }

    /// Returns true if the point is inside the box (inclusive).
    pub fn contains_point(&self, p: Vec3) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y) && self.z.contains(p.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_orders_corners() {
        let aabb = Aabb::from_points(Vec3::new(2.0, -1.0, 5.0), Vec3::new(-1.0, 3.0, 0.0));
        assert_eq!(aabb.x.min, -1.0);
        assert_eq!(aabb.x.max, 2.0);
        assert_eq!(aabb.y.min, -1.0);
        assert_eq!(aabb.y.max, 3.0);
    }

    #[test]
    fn test_grow_extends_bounds() {
        let mut aabb = Aabb::from_points(Vec3::ZERO, Vec3::ONE);
        aabb.grow(Vec3::new(4.0, -2.0, 0.5));

        assert!(aabb.contains_point(Vec3::new(4.0, -2.0, 0.5)));
        assert!(aabb.contains_point(Vec3::ONE));
        assert!(!aabb.contains_point(Vec3::new(5.0, 0.0, 0.0)));
    }

    #[test]
    fn test_empty_contains_nothing() {
        let empty = Aabb::empty();
        assert!(!empty.contains_point(Vec3::ZERO));
    }

    #[test]
    fn test_center() {
        let aabb = Aabb::from_points(Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
    }
}
