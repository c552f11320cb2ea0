//! Render configuration.

use serde::{Deserialize, Serialize};

/// How emitted light is folded into a path's running total.
///
/// One tagged choice, branched once per bounce; the two modes never fork
/// separate code paths through the tracer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LightAccumulation {
    /// Emission times path throughput.
    #[default]
    Standard,
    /// Emission additionally scaled by the Rec.601 luminance of the
    /// current throughput, which is fed back into the ray's energy scalar.
    /// Kept for parity with the reference renderer; not radiometrically
    /// motivated.
    Energy,
}

/// Global render parameters, supplied once per frame by the host.
///
/// Omitted fields in a settings file fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Path samples per pixel per frame (must be >= 1)
    pub samples_per_pixel: u32,
    /// Maximum ray bounce count (a path runs at most max_bounces + 1 segments)
    pub max_bounces: u32,
    /// Intersections beyond this distance are discarded
    pub render_distance: f32,
    /// Reject triangle hits approached from behind the face
    pub cull_backfaces: bool,
    /// Evaluate the procedural sky when a path escapes
    pub environment_enabled: bool,
    /// Enable the shadow-ray utility
    pub shadows_enabled: bool,
    /// Write the normalized primary-hit depth buffer
    pub depth_enabled: bool,
    /// Emitted-light accumulation mode
    pub accumulation: LightAccumulation,
    /// Extra attenuation on sky light seen after at least one bounce
    pub indirect_sky_strength: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 4,
            max_bounces: 4,
            render_distance: 1000.0,
            cull_backfaces: false,
            environment_enabled: true,
            shadows_enabled: true,
            depth_enabled: false,
            accumulation: LightAccumulation::Standard,
            indirect_sky_strength: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: RenderConfig = serde_json::from_str(
            r#"{ "samples_per_pixel": 16, "accumulation": "Energy" }"#,
        )
        .unwrap();

        assert_eq!(config.samples_per_pixel, 16);
        assert_eq!(config.accumulation, LightAccumulation::Energy);
        // Unspecified fields keep the defaults
        assert_eq!(config.max_bounces, 4);
        assert_eq!(config.render_distance, 1000.0);
    }
}
