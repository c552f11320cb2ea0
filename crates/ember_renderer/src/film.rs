//! Frame buffers for color and depth.

use ember_math::Vec3;

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to 8-bit RGBA.
pub fn color_to_rgba(color: Vec3) -> [u8; 4] {
    let r = (255.0 * linear_to_gamma(color.x).clamp(0.0, 1.0)) as u8;
    let g = (255.0 * linear_to_gamma(color.y).clamp(0.0, 1.0)) as u8;
    let b = (255.0 * linear_to_gamma(color.z).clamp(0.0, 1.0)) as u8;
    [r, g, b, 255]
}

/// Full-resolution buffer of linear RGB values.
///
/// The integrator writes one of these per frame (the raw buffer); the
/// temporal accumulator keeps a second one as history. They are never the
/// same allocation, so the two passes cannot alias.
#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec3>,
}

impl Film {
    /// Create a film filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Vec3) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Reset every pixel to black (history reset on camera/scene change).
    pub fn clear(&mut self) {
        self.pixels.fill(Vec3::ZERO);
    }

    /// Flat view of the pixel data as f32 triples, for host consumption.
    pub fn raw_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Convert to gamma-encoded RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }
}

/// Full-resolution buffer of normalized primary-hit depths.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthFilm {
    pub width: u32,
    pub height: u32,
    pub values: Vec<f32>,
}

impl DepthFilm {
    /// Create a depth film filled with the far value (1.0).
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            values: vec![1.0; (width * height) as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.values[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, depth: f32) {
        self.values[(y * self.width + x) as usize] = depth;
    }

    /// Convert to 8-bit grayscale (near = dark, far = bright).
    pub fn to_gray(&self) -> Vec<u8> {
        self.values
            .iter()
            .map(|d| (255.0 * d.clamp(0.0, 1.0)) as u8)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 1e-4);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 1e-4);
        assert_eq!(linear_to_gamma(-1.0), 0.0);
    }

    #[test]
    fn test_film_get_set() {
        let mut film = Film::new(4, 3);
        film.set(2, 1, Vec3::new(0.5, 0.25, 1.0));

        assert_eq!(film.get(2, 1), Vec3::new(0.5, 0.25, 1.0));
        assert_eq!(film.get(0, 0), Vec3::ZERO);
    }

    #[test]
    fn test_film_clear() {
        let mut film = Film::new(2, 2);
        film.set(1, 1, Vec3::ONE);
        film.clear();
        assert_eq!(film.get(1, 1), Vec3::ZERO);
    }

    #[test]
    fn test_raw_data_layout() {
        let mut film = Film::new(2, 1);
        film.set(1, 0, Vec3::new(1.0, 2.0, 3.0));

        let raw = film.raw_data();
        assert_eq!(raw.len(), 6);
        assert_eq!(&raw[3..6], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_to_rgba_saturates() {
        let mut film = Film::new(1, 1);
        film.set(0, 0, Vec3::new(4.0, 1.0, 0.0));

        let bytes = film.to_rgba();
        assert_eq!(bytes, vec![255, 255, 0, 255]);
    }

    #[test]
    fn test_depth_film_defaults_to_far() {
        let depth = DepthFilm::new(2, 2);
        assert_eq!(depth.get(1, 1), 1.0);
        assert_eq!(depth.to_gray(), vec![255; 4]);
    }
}
