//! Disco lights behind the figure.
//!
//! Each light cycles through the hue wheel by running three sine waves a third
//! of a turn apart; the per-light phase keeps neighbours out of sync.

use crate::geometry::{Point2D, Rgb};
use crate::scene_constants::{DISCO_LIGHTS, LIGHT_FREQ};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Channel offsets for R, G, B
const CHANNEL_OFFSETS: [f64; 3] = [0.0, 2.0 * PI / 3.0, 4.0 * PI / 3.0];

/// A fixed light disc with its own color phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightSource {
    pub position: Point2D,
    #[serde(default)]
    pub phase: f64,
}

impl LightSource {
    pub const fn new(position: Point2D, phase: f64) -> Self {
        Self { position, phase }
    }

    pub fn color_at(&self, t: f64) -> Rgb {
        light_color(self.phase, t)
    }
}

fn channel(phase: f64, t: f64, offset: f64) -> u8 {
    let value = 127.0 * ((t * LIGHT_FREQ + phase + offset).sin() + 1.0);
    // Truncation toward zero; the clamp only matters for non-finite input
    value.clamp(0.0, 255.0) as u8
}

/// Color of a light with the given phase at time `t`
pub fn light_color(phase: f64, t: f64) -> Rgb {
    let [r, g, b] = CHANNEL_OFFSETS.map(|offset| channel(phase, t, offset));
    Rgb::new(r, g, b)
}

/// The five lights of the default scene
pub fn default_lights() -> Vec<LightSource> {
    DISCO_LIGHTS
        .iter()
        .map(|&(x, y, phase)| LightSource::new(DVec2::new(x, y), phase))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use wasm_bindgen_test::*;

    #[test]
    #[wasm_bindgen_test]
    fn test_color_at_time_zero() {
        // sin(0) = 0 → 127; sin(2pi/3) ~ 0.866 → 236; sin(4pi/3) ~ -0.866 → 17
        let color = light_color(0.0, 0.0);
        assert_eq!(color, Rgb::new(127, 236, 17));
    }

    #[test]
    fn test_channels_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let t = rng.random_range(-1.0e6..1.0e6);
            let phase = rng.random_range(-20.0..20.0);
            let color = light_color(phase, t);
            // 127 * 2 is the peak
            assert!(color.r <= 254 && color.g <= 254 && color.b <= 254);
        }
    }

    #[test]
    fn test_non_finite_time_is_clamped() {
        // NaN casts to zero
        assert_eq!(light_color(0.0, f64::NAN), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_phase_shifts_colors() {
        let lights = default_lights();
        let first = lights[0].color_at(1.0);
        let second = lights[1].color_at(1.0);
        assert_ne!(first, second);
        // Same phase and time yields the same color
        assert_eq!(lights[2].color_at(3.5), light_color(4.0, 3.5));
    }

    #[test]
    fn test_default_rig() {
        let lights = default_lights();
        assert_eq!(lights.len(), 5);
        assert_eq!(lights[2].position, DVec2::new(400.0, 100.0));
        assert_eq!(lights[4].phase, 8.0);
    }
}
