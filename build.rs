//! Build script for scene validation
//!
//! This script runs at compile time and validates all scene JSON files:
//! hard errors (non-positive legs, zero fps, no lights, lights off the scene)
//! fail the build, and feet that leave leg reach somewhere in the dance are
//! reported as warnings because the knee then falls back to the hip-foot
//! midpoint.

// Include the shared scene constants
#[path = "src/scene_constants.rs"]
mod scene_constants;

use glam::DVec2;
use serde::Deserialize;
use scene_constants::*;
use std::fs;
use std::path::Path;

/// Samples per second of animation when sweeping the motion envelope
const SAMPLE_RATE: f64 = 240.0;

/// The hip repeats after lcm of the sway (2pi/3) and bounce (2pi/4) periods
const HIP_PERIOD: f64 = 2.0 * std::f64::consts::PI;

#[derive(Debug, Deserialize)]
struct Limb {
    upper: f64,
    lower: f64,
}

#[derive(Debug, Deserialize)]
struct Light {
    position: DVec2,
}

/// Subset of the runtime scene needed for validation
#[derive(Debug, Deserialize)]
struct Scene {
    width: Option<u32>,
    height: Option<u32>,
    fps: Option<u32>,
    left_foot: Option<DVec2>,
    right_foot: Option<DVec2>,
    limb: Option<Limb>,
    lights: Option<Vec<Light>>,
}

/// Hip position at time t, mirroring the pose generator
fn hip_at(t: f64) -> DVec2 {
    let sway = (t * SWAY_FREQ).cos() * SWAY_AMPLITUDE;
    let bounce = -(t * BOUNCE_FREQ).sin() * BOUNCE_AMPLITUDE;
    DVec2::new(ROOT_X + sway, ROOT_Y + bounce + HIP_OFFSET)
}

/// Fraction of the dance during which `foot` is out of reach
fn unreachable_fraction(foot: DVec2, upper: f64, lower: f64) -> f64 {
    let samples = (HIP_PERIOD * SAMPLE_RATE) as usize;
    let misses = (0..samples)
        .map(|i| hip_at(i as f64 / SAMPLE_RATE).distance(foot))
        .filter(|&d| d == 0.0 || d > upper + lower || d < (upper - lower).abs())
        .count();
    misses as f64 / samples as f64
}

/// Validate a scene file
fn validate_scene_file(path: &Path) -> Result<(), String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let scene: Scene = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

    let mut errors = Vec::new();

    let (upper, lower) = scene
        .limb
        .map(|l| (l.upper, l.lower))
        .unwrap_or((UPPER_LEG, LOWER_LEG));
    if !(upper > 0.0 && lower > 0.0) {
        errors.push(format!(
            "  leg lengths must be positive (upper={}, lower={})",
            upper, lower
        ));
    }
    if scene.fps == Some(0) {
        errors.push("  fps must be nonzero".to_string());
    }
    if scene.lights.as_ref().is_some_and(|l| l.is_empty()) {
        errors.push("  light rig is empty".to_string());
    }
    let width = scene.width.unwrap_or(SCREEN_WIDTH) as f64;
    let height = scene.height.unwrap_or(SCREEN_HEIGHT) as f64;
    for (i, light) in scene.lights.iter().flatten().enumerate() {
        let p = light.position;
        if !(0.0..=width).contains(&p.x) || !(0.0..=height).contains(&p.y) {
            errors.push(format!(
                "  light {} at ({}, {}) is outside the {}x{} scene",
                i, p.x, p.y, width, height
            ));
        }
    }

    if !errors.is_empty() {
        return Err(format!(
            "Scene '{}' is invalid:\n{}",
            path.display(),
            errors.join("\n")
        ));
    }

    let feet = [
        ("left", scene.left_foot.unwrap_or(DVec2::from_array(LEFT_FOOT))),
        ("right", scene.right_foot.unwrap_or(DVec2::from_array(RIGHT_FOOT))),
    ];
    for (name, foot) in feet {
        let fraction = unreachable_fraction(foot, upper, lower);
        if fraction > 0.0 {
            println!(
                "cargo:warning={}: {} foot out of reach for {:.0}% of the dance (knee falls back to midpoint)",
                path.display(),
                name,
                fraction * 100.0
            );
        }
    }

    println!("cargo:warning=✓ {} validated", path.display());
    Ok(())
}

fn main() {
    let scene_dir = Path::new("assets/scenes");

    // Rerun if shared constants change
    println!("cargo:rerun-if-changed=src/scene_constants.rs");

    if !scene_dir.exists() {
        println!("cargo:warning=Scene directory not found, skipping validation");
        return;
    }

    let mut has_errors = false;

    if let Ok(entries) = fs::read_dir(scene_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                // Tell cargo to rerun if this file changes
                println!("cargo:rerun-if-changed={}", path.display());

                if let Err(e) = validate_scene_file(&path) {
                    println!("cargo:warning=VALIDATION ERROR: {}", e);
                    has_errors = true;
                }
            }
        }
    }

    if has_errors {
        panic!("Scene validation failed! Fix the scene files in assets/scenes.");
    }

    // Rerun if the scenes directory changes
    println!("cargo:rerun-if-changed={}", scene_dir.display());
}
