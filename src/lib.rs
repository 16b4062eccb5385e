//! Disco Stickman - Wasm Core
//!
//! A dancing stick figure with IK-solved legs in front of disco lights,
//! rendered from Rust using wgpu and wasm-bindgen.

pub mod animation;
pub mod bench;
pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
#[cfg(target_arch = "wasm32")]
pub mod gpu;
pub mod ik;
pub mod lights;
pub mod pose;
pub mod render;
mod scene_constants;
#[cfg(target_arch = "wasm32")]
pub mod state;

pub use animation::{AnimationClock, FrameTiming};
pub use config::{FigureStyle, SceneConfig};
pub use driver::FrameDriver;
pub use error::{ConfigError, RenderError};
pub use geometry::{Point2D, Rgb};
pub use ik::{classify_reach, knee_candidates, solve_knee, Reach, Side};
pub use lights::{default_lights, light_color, LightSource};
pub use pose::{generate_pose, generate_pose_for, LimbSpec, Motion, Pose, Segment};
pub use render::{draw_scene, DrawCommand, DrawList, Renderer};

// Re-exports for WASM API
#[cfg(target_arch = "wasm32")]
pub use bench::run_benchmarks;
#[cfg(target_arch = "wasm32")]
pub use gpu::GpuRenderer;
#[cfg(target_arch = "wasm32")]
pub use state::{start, App};

/// Route `log` output to the browser console and panics to `console.error`.
///
/// Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    wasm_bindgen_test_configure!(run_in_browser);

    // Default scene, t = 0: sway = 30, bounce = 0
    #[test]
    #[wasm_bindgen_test]
    fn test_default_scene_first_pose() {
        let scene = SceneConfig::default();
        assert_eq!(scene.limb, LimbSpec::new(60.0, 60.0));

        let pose = generate_pose_for(0.0, &scene);
        assert_eq!(pose.hip, Point2D::new(430.0, 350.0));

        assert!((pose.hip.distance(pose.left_knee) - 60.0).abs() < 1e-6);
        assert!((pose.left_knee.distance(scene.left_foot) - 60.0).abs() < 1e-6);
        // Left knee bends toward smaller x than the right one
        assert!(pose.left_knee.x < pose.right_knee.x);
    }
}
