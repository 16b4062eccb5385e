//! Fixed-step frame loop
//!
//! One frame = advance the clock by `1/fps`, build the pose, draw it and
//! present. The loop only stops at frame boundaries.

use crate::animation::{AnimationClock, FrameTiming};
use crate::config::SceneConfig;
use crate::error::{ConfigError, RenderError};
use crate::ik::classify_reach;
use crate::pose::{generate_pose_for, Pose};
use crate::render::{draw_scene, Renderer};
use std::time::Duration;

pub struct FrameDriver {
    scene: SceneConfig,
    timing: FrameTiming,
    clock: AnimationClock,
}

impl FrameDriver {
    /// Rejects scenes that fail [`SceneConfig::validate`]
    pub fn new(scene: SceneConfig) -> Result<Self, ConfigError> {
        scene.validate()?;
        let timing = scene.timing();
        Ok(Self {
            scene,
            timing,
            clock: AnimationClock::new(),
        })
    }

    pub fn scene(&self) -> &SceneConfig {
        &self.scene
    }

    pub fn timing(&self) -> FrameTiming {
        self.timing
    }

    /// Current animation time in seconds
    pub fn time(&self) -> f64 {
        self.clock.time
    }

    /// Swap in a new scene and restart the animation.
    ///
    /// An invalid scene leaves the current one running.
    pub fn set_scene(&mut self, scene: SceneConfig) -> Result<(), ConfigError> {
        scene.validate()?;
        self.timing = scene.timing();
        self.scene = scene;
        self.clock = AnimationClock::new();
        Ok(())
    }

    /// Advance one step and render the resulting frame
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<Pose, RenderError> {
        self.clock = self.clock.tick(self.timing);
        let t = self.clock.time;

        let pose = generate_pose_for(t, &self.scene);
        self.log_fallback(&pose, t);

        draw_scene(renderer, &pose, &self.scene.lights, t, &self.scene.style);
        renderer.present()?;
        Ok(pose)
    }

    /// Run frames until `should_quit` returns true.
    ///
    /// `should_quit` is polled before every frame; `pace` receives the frame
    /// budget after every frame (a sleep natively, a no-op when the host paces
    /// frames itself). Returns the number of frames rendered.
    pub fn run<R, Q, P>(
        &mut self,
        renderer: &mut R,
        mut should_quit: Q,
        mut pace: P,
    ) -> Result<u64, RenderError>
    where
        R: Renderer + ?Sized,
        Q: FnMut() -> bool,
        P: FnMut(Duration),
    {
        let frame_duration = self.timing.frame_duration();
        let mut frames = 0;

        while !should_quit() {
            self.tick(renderer)?;
            frames += 1;
            pace(frame_duration);
        }

        log::info!("Stopped after {} frames (t={:.3}s)", frames, self.time());
        Ok(frames)
    }

    fn log_fallback(&self, pose: &Pose, t: f64) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        let limb = self.scene.limb;
        for (name, foot) in [("left", pose.left_foot), ("right", pose.right_foot)] {
            let reach = classify_reach(pose.hip, foot, limb.upper, limb.lower);
            if !reach.is_reachable() {
                log::debug!("t={:.3}s: {} foot {:?}, knee at midpoint", t, name, reach);
            }
        }
    }
}
