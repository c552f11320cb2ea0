//! Surface material definition.

use ember_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (linear RGB, values typically 0-1)
pub type Color = Vec3;

/// How a surface scatters and emits light.
///
/// One material is attached to each sphere and to each mesh (shared by all
/// of the mesh's triangles). Plain copyable data; the intersection engine
/// copies the struck primitive's material into the hit record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Diffuse/albedo color
    pub color: Color,
    /// Color tint applied to specular bounces
    pub specular_color: Color,
    /// Emitted light color
    pub emission_color: Color,
    /// Emitted light strength multiplier
    pub emission_strength: f32,
    /// 0 = fully diffuse, 1 = perfect mirror
    pub smoothness: f32,
    /// Probability that a bounce is specular rather than diffuse
    pub specular_probability: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::new(0.5, 0.5, 0.5),
            specular_color: Color::ONE,
            emission_color: Color::ZERO,
            emission_strength: 0.0,
            smoothness: 0.0,
            specular_probability: 0.0,
        }
    }
}

impl Material {
    /// Create a matte material with the given albedo.
    pub fn diffuse(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Create a light-emitting material.
    ///
    /// The albedo is left black so the surface contributes no scattered
    /// light of its own.
    pub fn emissive(emission_color: Color, emission_strength: f32) -> Self {
        Self {
            color: Color::ZERO,
            emission_color,
            emission_strength,
            ..Default::default()
        }
    }

    /// Create a glossy material.
    ///
    /// - `smoothness`: 0 = diffuse, 1 = mirror
    /// - `specular_probability`: chance a bounce reflects specularly
    pub fn glossy(color: Color, smoothness: f32, specular_probability: f32) -> Self {
        Self {
            color,
            smoothness: smoothness.clamp(0.0, 1.0),
            specular_probability: specular_probability.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    /// True if this material emits any light.
    pub fn is_emissive(&self) -> bool {
        self.emission_strength > 0.0 && self.emission_color != Color::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inert() {
        let mat = Material::default();
        assert!(!mat.is_emissive());
        assert_eq!(mat.smoothness, 0.0);
    }

    #[test]
    fn test_emissive_has_black_albedo() {
        let mat = Material::emissive(Color::ONE, 5.0);
        assert!(mat.is_emissive());
        assert_eq!(mat.color, Color::ZERO);
    }

    #[test]
    fn test_glossy_clamps_parameters() {
        let mat = Material::glossy(Color::ONE, 1.5, -0.2);
        assert_eq!(mat.smoothness, 1.0);
        assert_eq!(mat.specular_probability, 0.0);
    }
}
