//! Scene description
//!
//! Everything that is constant for the lifetime of an animation: canvas size,
//! frame rate, foot anchors, leg lengths, the light rig and drawing style.
//! Every field falls back to the built-in disco scene, so a JSON document only
//! needs the keys it wants to change.

use crate::animation::FrameTiming;
use crate::error::ConfigError;
use crate::geometry::{Point2D, Rgb};
use crate::lights::{default_lights, LightSource};
use crate::pose::LimbSpec;
use crate::scene_constants::*;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Colors and sizes used when drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureStyle {
    pub figure_color: Rgb,
    pub background: Rgb,
    pub line_width: f64,
    pub head_radius: f64,
    pub light_radius: f64,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            figure_color: Rgb::WHITE,
            background: Rgb::BLACK,
            line_width: LINE_WIDTH,
            head_radius: HEAD_RADIUS,
            light_radius: LIGHT_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub left_foot: Point2D,
    pub right_foot: Point2D,
    pub limb: LimbSpec,
    pub lights: Vec<LightSource>,
    pub style: FigureStyle,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            fps: FPS,
            left_foot: DVec2::from_array(LEFT_FOOT),
            right_foot: DVec2::from_array(RIGHT_FOOT),
            limb: LimbSpec::default(),
            lights: default_lights(),
            style: FigureStyle::default(),
        }
    }
}

impl SceneConfig {
    /// Parse and validate a scene from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let scene: SceneConfig = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject scenes the animation cannot run with.
    ///
    /// Feet that are out of leg reach are *not* an error: the IK fallback
    /// handles them every frame.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let LimbSpec { upper, lower } = self.limb;
        // Written so that NaN fails too
        if !(upper > 0.0 && lower > 0.0) {
            return Err(ConfigError::InvalidLimb { upper, lower });
        }
        if self.fps == 0 {
            return Err(ConfigError::InvalidFps);
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if self.lights.is_empty() {
            return Err(ConfigError::NoLights);
        }
        Ok(())
    }

    pub fn timing(&self) -> FrameTiming {
        FrameTiming::new(self.fps)
    }
}
