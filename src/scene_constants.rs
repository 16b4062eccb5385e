//! Shared scene constants used by both build.rs and runtime code.
//!
//! This module is included by the build script (via `#[path]`) so that the
//! compile-time scene validation and the runtime animation agree on the
//! figure's proportions and motion envelope.
//!
//! All coordinates are screen pixels with the origin at the top-left corner
//! and y growing downward.

// Some constants are only used by build.rs for validation
#![allow(dead_code)]

/// Default canvas size in pixels
pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 600;

/// Target frame rate; the clock advances by `1 / FPS` per tick
pub const FPS: u32 = 60;

/// Fixed foot anchors
pub const LEFT_FOOT: [f64; 2] = [370.0, 450.0];
pub const RIGHT_FOOT: [f64; 2] = [430.0, 450.0];

/// Leg segment lengths
pub const UPPER_LEG: f64 = 60.0;
pub const LOWER_LEG: f64 = 60.0;

/// Rest position of the head center before sway/bounce
pub const ROOT_X: f64 = 400.0;
pub const ROOT_Y: f64 = 200.0;

/// Offsets below the head center
pub const NECK_OFFSET: f64 = 30.0;
pub const HIP_OFFSET: f64 = 150.0;

pub const ARM_LENGTH: f64 = 70.0;
/// Arm angle (degrees) when the swing is zero
pub const ARM_REST_DEG: f64 = 150.0;

// Oscillators: value = amplitude * wave(frequency * t)
pub const BOUNCE_FREQ: f64 = 4.0;
pub const BOUNCE_AMPLITUDE: f64 = 20.0;
pub const SWAY_FREQ: f64 = 3.0;
pub const SWAY_AMPLITUDE: f64 = 30.0;
pub const ARM_SWING_FREQ: f64 = 3.0;
pub const ARM_SWING_DEG: f64 = 60.0;
pub const HEAD_TILT_FREQ: f64 = 2.5;
pub const HEAD_TILT_DEG: f64 = 15.0;

/// Disco light color cycle frequency
pub const LIGHT_FREQ: f64 = 5.0;

/// Default light rig: (x, y, phase)
pub const DISCO_LIGHTS: [(f64, f64, f64); 5] = [
    (100.0, 100.0, 0.0),
    (700.0, 100.0, 2.0),
    (400.0, 100.0, 4.0),
    (100.0, 500.0, 6.0),
    (700.0, 500.0, 8.0),
];

pub const HEAD_RADIUS: f64 = 30.0;
pub const LIGHT_RADIUS: f64 = 50.0;
pub const LINE_WIDTH: f64 = 5.0;
