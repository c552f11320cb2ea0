//! Procedural sky, ground, and sun radiance.
//!
//! Evaluated whenever a path escapes the scene. The three contributions
//! (sky gradient, ground plane, sun disc) can be toggled independently;
//! colors are treated as RGB only.

use ember_core::Color;
use ember_math::{smoothstep, Vec3};
use serde::{Deserialize, Serialize};

/// Procedural environment parameters.
///
/// Omitted fields in a settings file fall back to the defaults below.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Sky {
    /// Sky color at the horizon
    pub horizon_color: Color,
    /// Sky color straight up
    pub zenith_color: Color,
    /// Color below the horizon
    pub ground_color: Color,
    /// Direction the sunlight travels (normalized; the sun sits at -direction)
    pub sun_direction: Vec3,
    /// Exponent shaping the sun disc falloff
    pub sun_focus: f32,
    /// Sun brightness multiplier
    pub sun_intensity: f32,
    /// Sun disc color
    pub sun_color: Color,
    /// Overall skybox intensity multiplier
    pub intensity: f32,
    /// Toggle for the horizon/zenith gradient
    pub sky_enabled: bool,
    /// Toggle for the ground plane color
    pub ground_enabled: bool,
    /// Toggle for the sun disc
    pub sun_enabled: bool,
}

impl Default for Sky {
    fn default() -> Self {
        Self {
            horizon_color: Color::new(1.0, 1.0, 1.0),
            zenith_color: Color::new(0.29, 0.58, 1.0),
            ground_color: Color::new(0.35, 0.3, 0.35),
            sun_direction: Vec3::new(0.0, -1.0, -0.4).normalize(),
            sun_focus: 500.0,
            sun_intensity: 10.0,
            sun_color: Color::ONE,
            intensity: 1.0,
            sky_enabled: true,
            ground_enabled: true,
            sun_enabled: true,
        }
    }
}

impl Sky {
    /// Radiance arriving from `direction` (unit vector) when a ray escapes
    /// the scene.
    ///
    /// The horizon-to-zenith blend is a smoothstepped, power-curved
    /// function of the direction's height; a second smoothstep blends to
    /// the ground color just below the horizon. The sun term is masked to
    /// directions fully above the horizon transition so it never bleeds
    /// into the ground.
    pub fn radiance(&self, direction: Vec3) -> Color {
        let sky_gradient_t = smoothstep(0.0, 0.4, direction.y).powf(0.35);
        let ground_to_sky_t = smoothstep(-0.01, 0.0, direction.y);

        let sky_gradient = if self.sky_enabled {
            self.horizon_color.lerp(self.zenith_color, sky_gradient_t)
        } else {
            Color::ZERO
        };
        let ground = if self.ground_enabled {
            self.ground_color
        } else {
            Color::ZERO
        };

        let mut radiance = ground.lerp(sky_gradient, ground_to_sky_t);

        if self.sun_enabled && ground_to_sky_t >= 1.0 {
            let sun = direction
                .dot(-self.sun_direction)
                .max(0.0)
                .powf(self.sun_focus)
                * self.sun_intensity;
            radiance += self.sun_color * sun;
        }

        radiance
    }
}
