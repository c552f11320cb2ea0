//! Scene primitives and assembly.
//!
//! A scene is three flat arrays: spheres, triangles, and mesh records that
//! slice the triangle array. Meshes own their material and a bounding box
//! (kept for a future acceleration pass; the renderer currently scans every
//! primitive).

use ember_math::{Aabb, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::material::Material;

/// Errors produced by scene validation.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("mesh {mesh} triangle range {first}..{end} exceeds triangle count {count}")]
    MeshRangeOutOfBounds {
        mesh: usize,
        first: usize,
        end: usize,
        count: usize,
    },

    #[error("sphere {0} has negative radius {1}")]
    NegativeRadius(usize, f32),

    #[error("sphere {0} has a non-finite center")]
    NonFiniteSphere(usize),

    #[error("triangle {0} has a non-finite vertex")]
    NonFiniteTriangle(usize),
}

/// A sphere primitive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    #[serde(default)]
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// A triangle primitive (vertex positions only).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Unnormalized face normal (right-handed winding).
    pub fn face_normal(&self) -> Vec3 {
        (self.b - self.a).cross(self.c - self.a)
    }
}

/// A mesh record: an index range into the scene's flat triangle array,
/// plus the material shared by every triangle in the range.
#[derive(Debug, Clone, Copy)]
pub struct Mesh {
    /// Index of the first triangle in the scene's triangle array
    pub first_triangle: usize,
    /// Number of triangles in this mesh
    pub triangle_count: usize,
    /// World-space bounds of the mesh's triangles
    pub bounds: Aabb,
    /// Material shared by all triangles
    pub material: Material,
}

/// Read-only scene data for one frame.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub triangles: Vec<Triangle>,
    pub meshes: Vec<Mesh>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere to the scene.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Add a mesh: appends the triangles to the flat array and records the
    /// index range, bounds, and material.
    pub fn add_mesh(&mut self, triangles: Vec<Triangle>, material: Material) {
        let first_triangle = self.triangles.len();
        let triangle_count = triangles.len();

        let mut bounds = Aabb::empty();
        for tri in &triangles {
            bounds.grow(tri.a);
            bounds.grow(tri.b);
            bounds.grow(tri.c);
        }

        self.triangles.extend(triangles);
        self.meshes.push(Mesh {
            first_triangle,
            triangle_count,
            bounds,
            material,
        });
    }

    /// The slice of triangles belonging to a mesh.
    ///
    /// Call `validate` after assembly; an out-of-range mesh record panics
    /// here.
    pub fn mesh_triangles(&self, mesh: &Mesh) -> &[Triangle] {
        &self.triangles[mesh.first_triangle..mesh.first_triangle + mesh.triangle_count]
    }

    /// Total primitive count (spheres + triangles).
    pub fn primitive_count(&self) -> usize {
        self.spheres.len() + self.triangles.len()
    }

    /// Check the scene for malformed data before handing it to the renderer.
    ///
    /// The render kernel itself never validates; a mesh range that exceeds
    /// the triangle array must be caught here.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (i, sphere) in self.spheres.iter().enumerate() {
            if !sphere.center.is_finite() || !sphere.radius.is_finite() {
                return Err(SceneError::NonFiniteSphere(i));
            }
            if sphere.radius < 0.0 {
                return Err(SceneError::NegativeRadius(i, sphere.radius));
            }
        }

        for (i, tri) in self.triangles.iter().enumerate() {
            if !tri.a.is_finite() || !tri.b.is_finite() || !tri.c.is_finite() {
                return Err(SceneError::NonFiniteTriangle(i));
            }
        }

        for (i, mesh) in self.meshes.iter().enumerate() {
            let end = mesh.first_triangle + mesh.triangle_count;
            if end > self.triangles.len() {
                return Err(SceneError::MeshRangeOutOfBounds {
                    mesh: i,
                    first: mesh.first_triangle,
                    end,
                    count: self.triangles.len(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Vec<Triangle> {
        vec![
            Triangle::new(
                Vec3::new(-1.0, 0.0, -1.0),
                Vec3::new(1.0, 0.0, -1.0),
                Vec3::new(1.0, 0.0, 1.0),
            ),
            Triangle::new(
                Vec3::new(-1.0, 0.0, -1.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(-1.0, 0.0, 1.0),
            ),
        ]
    }

    #[test]
    fn test_add_mesh_records_range_and_bounds() {
        let mut scene = Scene::new();
        scene.add_mesh(quad(), Material::default());
        scene.add_mesh(quad(), Material::default());

        assert_eq!(scene.triangles.len(), 4);
        assert_eq!(scene.meshes[0].first_triangle, 0);
        assert_eq!(scene.meshes[1].first_triangle, 2);
        assert_eq!(scene.mesh_triangles(&scene.meshes[1]).len(), 2);
        assert!(scene.meshes[0]
            .bounds
            .contains_point(Vec3::new(1.0, 0.0, 1.0)));
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_mesh_range() {
        let mut scene = Scene::new();
        scene.add_mesh(quad(), Material::default());
        scene.meshes[0].triangle_count = 10;

        assert!(matches!(
            scene.validate(),
            Err(SceneError::MeshRangeOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_radius() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, -1.0, Material::default()));

        assert!(matches!(
            scene.validate(),
            Err(SceneError::NegativeRadius(0, _))
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_vertex() {
        let mut scene = Scene::new();
        scene.add_mesh(
            vec![Triangle::new(
                Vec3::new(f32::NAN, 0.0, 0.0),
                Vec3::X,
                Vec3::Y,
            )],
            Material::default(),
        );

        assert!(matches!(
            scene.validate(),
            Err(SceneError::NonFiniteTriangle(0))
        ));
    }
}
