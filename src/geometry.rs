//! 2D geometry primitives.
//!
//! Coordinates are screen pixels: origin at the top-left corner, x grows to
//! the right and **y grows downward**. Every sign and angle convention in the
//! pose generator depends on this, e.g. a positive angle rotates clockwise on
//! screen when fed through `cos`/`sin`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A point (or offset) on the canvas, in pixels.
pub type Point2D = DVec2;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized opaque RGBA, as consumed by the GPU vertex format
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// Unit vector for an angle given in degrees (y-down screen space)
#[inline]
pub fn direction_deg(angle_deg: f64) -> Point2D {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    DVec2::new(cos, sin)
}

/// Rotate `offset` by `angle_deg` counter-clockwise as seen on screen.
///
/// With y pointing down, visual counter-clockwise is a negative mathematical
/// angle.
#[inline]
pub fn rotate_ccw_on_screen(offset: Point2D, angle_deg: f64) -> Point2D {
    DVec2::from_angle(-angle_deg.to_radians()).rotate(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deg_axes() {
        assert!(direction_deg(0.0).distance(DVec2::X) < 1e-12);
        // 90 degrees points down the screen
        assert!(direction_deg(90.0).distance(DVec2::Y) < 1e-12);
    }

    #[test]
    fn test_rotate_ccw_on_screen_moves_right_vector_up() {
        let rotated = rotate_ccw_on_screen(DVec2::new(10.0, 0.0), 90.0);
        assert!(
            rotated.distance(DVec2::new(0.0, -10.0)) < 1e-9,
            "expected (0,-10), got {:?}",
            rotated
        );
    }

    #[test]
    fn test_rgb_to_rgba_f32() {
        assert_eq!(Rgb::WHITE.to_rgba_f32(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Rgb::BLACK.to_rgba_f32(), [0.0, 0.0, 0.0, 1.0]);
    }
}
