//! JSON scene file loading.
//!
//! A scene file lists spheres directly and meshes as explicit triangle
//! lists; loading flattens the mesh triangles into the scene's single
//! triangle array and validates the result.
//!
//! ```json
//! {
//!   "spheres": [
//!     { "center": [0.0, 1.0, 0.0], "radius": 1.0,
//!       "material": { "color": [0.8, 0.3, 0.3] } }
//!   ],
//!   "meshes": [
//!     { "triangles": [ { "a": [...], "b": [...], "c": [...] } ],
//!       "material": { "smoothness": 0.9 } }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::material::Material;
use crate::scene::{Scene, SceneError, Sphere, Triangle};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid scene: {0}")]
    Invalid(#[from] SceneError),
}

#[derive(Deserialize)]
struct MeshFile {
    triangles: Vec<Triangle>,
    #[serde(default)]
    material: Material,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SceneFile {
    spheres: Vec<Sphere>,
    meshes: Vec<MeshFile>,
}

/// Load and validate a scene from a JSON file.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let file: SceneFile = serde_json::from_str(&text)?;

    let mut scene = Scene::new();
    for sphere in file.spheres {
        scene.add_sphere(sphere);
    }
    for mesh in file.meshes {
        scene.add_mesh(mesh.triangles, mesh.material);
    }

    scene.validate()?;

    log::debug!(
        "loaded scene from {}: {} spheres, {} triangles in {} meshes",
        path.display(),
        scene.spheres.len(),
        scene.triangles.len(),
        scene.meshes.len()
    );

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_math::Vec3;

    fn parse(text: &str) -> Result<Scene, LoadError> {
        let file: SceneFile = serde_json::from_str(text)?;
        let mut scene = Scene::new();
        for sphere in file.spheres {
            scene.add_sphere(sphere);
        }
        for mesh in file.meshes {
            scene.add_mesh(mesh.triangles, mesh.material);
        }
        scene.validate()?;
        Ok(scene)
    }

    #[test]
    fn test_parse_minimal_scene() {
        let scene = parse(
            r#"{
                "spheres": [
                    { "center": [0.0, 1.0, 0.0], "radius": 1.0 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(scene.spheres.len(), 1);
        assert_eq!(scene.spheres[0].center, Vec3::new(0.0, 1.0, 0.0));
        // Omitted material falls back to the default grey
        assert_eq!(scene.spheres[0].material, Material::default());
    }

    #[test]
    fn test_parse_mesh_flattens_triangles() {
        let scene = parse(
            r#"{
                "meshes": [
                    {
                        "triangles": [
                            { "a": [-1.0, 0.0, -1.0],
                              "b": [ 1.0, 0.0, -1.0],
                              "c": [ 0.0, 0.0,  1.0] }
                        ],
                        "material": { "emission_color": [1.0, 1.0, 1.0],
                                      "emission_strength": 2.0 }
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(scene.triangles.len(), 1);
        assert_eq!(scene.meshes.len(), 1);
        assert!(scene.meshes[0].material.is_emissive());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(parse("{ not json"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_invalid_scene() {
        let result = parse(r#"{ "spheres": [ { "center": [0,0,0], "radius": -2.0 } ] }"#);
        assert!(matches!(result, Err(LoadError::Invalid(_))));
    }
}
