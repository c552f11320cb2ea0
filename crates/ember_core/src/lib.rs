//! Ember scene model.
//!
//! Read-only scene data consumed by the renderer: spheres, triangles
//! grouped into meshes, and the materials attached to them. The renderer
//! never mutates a scene during a frame; assembly and validation happen
//! here, before anything is traced.

mod loader;
mod material;
mod scene;

pub use loader::{load_scene, LoadError};
pub use material::{Color, Material};
pub use scene::{Mesh, Scene, SceneError, Sphere, Triangle};
