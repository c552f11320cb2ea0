//! Ray-primitive intersection tests and nearest-hit resolution.
//!
//! Sphere tests solve the quadratic directly; triangles use the
//! Möller-Trumbore algorithm. `closest_hit` is a brute-force linear scan
//! over every primitive in the scene — O(primitives) per ray, the known
//! performance ceiling of this renderer.

use ember_core::{Scene, Triangle};
use ember_math::{Interval, Vec3};

use crate::hit::HitRecord;
use crate::ray::Ray;

/// Minimum accepted hit distance, also the determinant tolerance below
/// which a ray counts as parallel to a triangle's plane.
pub const HIT_EPSILON: f32 = 1e-5;

/// Test a ray against a sphere.
///
/// Only the smaller root of the quadratic is considered: a negative
/// discriminant, a negative nearest root (origin inside the sphere), or a
/// root outside `range` all report a miss. The returned record carries the
/// default material; `closest_hit` resolves the real one.
pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32, range: Interval) -> HitRecord {
    let oc = ray.origin - center;
    // Direction is unit length, so the quadratic's leading coefficient is 1
    let half_b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;

    let discriminant = half_b * half_b - c;
    if discriminant < 0.0 {
        return HitRecord::miss();
    }

    let t = -half_b - discriminant.sqrt();
    if t < 0.0 || !range.surrounds(t) {
        return HitRecord::miss();
    }

    let point = ray.at(t);
    HitRecord {
        hit: true,
        t,
        point,
        normal: (point - center) / radius,
        ..HitRecord::miss()
    }
}

/// Test a ray against a triangle (Möller-Trumbore).
///
/// Before the full test, the triangle is skipped if all three vertices lie
/// farther than `range.max` from the ray origin — a cheap, approximate,
/// non-conservative distance cull. With `cull_backfaces` set, a ray
/// approaching from behind the face (direction agreeing with the winding
/// normal) is rejected.
pub fn intersect_triangle(
    ray: &Ray,
    tri: &Triangle,
    range: Interval,
    cull_backfaces: bool,
) -> HitRecord {
    if range.max.is_finite() {
        let limit_sq = range.max * range.max;
        if ray.origin.distance_squared(tri.a) > limit_sq
            && ray.origin.distance_squared(tri.b) > limit_sq
            && ray.origin.distance_squared(tri.c) > limit_sq
        {
            return HitRecord::miss();
        }
    }

    let edge_ab = tri.b - tri.a;
    let edge_ac = tri.c - tri.a;

    let p = ray.direction.cross(edge_ac);
    // det = -direction . (ab x ac): negative when the ray faces the back
    let det = edge_ab.dot(p);

    if cull_backfaces && det < HIT_EPSILON {
        return HitRecord::miss();
    }
    // Near-zero determinant: ray parallel to the triangle plane
    if det.abs() < HIT_EPSILON {
        return HitRecord::miss();
    }

    let inv_det = 1.0 / det;
    let ao = ray.origin - tri.a;

    let u = ao.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return HitRecord::miss();
    }

    let q = ao.cross(edge_ab);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return HitRecord::miss();
    }

    let t = edge_ac.dot(q) * inv_det;
    if t <= HIT_EPSILON || !range.surrounds(t) {
        return HitRecord::miss();
    }

    HitRecord {
        hit: true,
        t,
        point: ray.at(t),
        normal: tri.face_normal().normalize(),
        ..HitRecord::miss()
    }
}

/// Find the nearest hit across every primitive in the scene.
///
/// Scans all spheres, then every mesh's triangle range, in declared order.
/// The strict `<` comparison keeps the first-encountered primitive on
/// exact distance ties, which the determinism tests rely on. No spatial
/// acceleration.
pub fn closest_hit(ray: &Ray, scene: &Scene, range: Interval, cull_backfaces: bool) -> HitRecord {
    let mut closest = HitRecord::miss();

    for sphere in &scene.spheres {
        let rec = intersect_sphere(ray, sphere.center, sphere.radius, range);
        if rec.hit && rec.t < closest.t {
            closest = rec;
            closest.material = sphere.material;
        }
    }

    for mesh in &scene.meshes {
        for tri in scene.mesh_triangles(mesh) {
            let rec = intersect_triangle(ray, tri, range, cull_backfaces);
            if rec.hit && rec.t < closest.t {
                closest = rec;
                closest.material = mesh.material;
            }
        }
    }

    closest
}
