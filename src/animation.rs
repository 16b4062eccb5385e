use crate::scene_constants::FPS;
use std::time::Duration;

/// Fixed per-tick timing derived from the target frame rate
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTiming {
    pub fps: u32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self { fps: FPS }
    }
}

impl FrameTiming {
    /// `fps` must be nonzero; scenes are validated before they get here
    pub const fn new(fps: u32) -> Self {
        Self { fps }
    }

    /// Animation time added per tick, in seconds
    pub fn step(&self) -> f64 {
        1.0 / self.fps as f64
    }

    /// Wall-clock budget of one frame, used for pacing
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(self.step())
    }
}

/// Animation clock - the only state that survives between frames
///
/// Immutable value type - replaced entirely each tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    /// Elapsed animation time in seconds, never decreasing
    pub time: f64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance time by delta; negative deltas are ignored
    pub fn advance(self, delta_seconds: f64) -> AnimationClock {
        AnimationClock {
            time: self.time + delta_seconds.max(0.0),
        }
    }

    /// Advance by exactly one fixed step
    pub fn tick(self, timing: FrameTiming) -> AnimationClock {
        self.advance(timing.step())
    }
}
