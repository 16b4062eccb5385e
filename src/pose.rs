//! Procedural stick-figure pose.
//!
//! A [`Pose`] is a pure function of the animation time `t`: four sine/cosine
//! oscillators move the upper body, and the legs are closed with the IK
//! solver against fixed foot anchors. Nothing is carried between frames.

use crate::config::SceneConfig;
use crate::geometry::{direction_deg, Point2D};
use crate::ik::{solve_knee, Side};
use crate::scene_constants::*;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Leg segment lengths, constant for the lifetime of a scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimbSpec {
    /// Hip → knee
    pub upper: f64,
    /// Knee → foot
    pub lower: f64,
}

impl Default for LimbSpec {
    fn default() -> Self {
        Self {
            upper: UPPER_LEG,
            lower: LOWER_LEG,
        }
    }
}

impl LimbSpec {
    pub const fn new(upper: f64, lower: f64) -> Self {
        Self { upper, lower }
    }

    /// Longest reachable hip-foot distance
    pub fn max_reach(&self) -> f64 {
        self.upper + self.lower
    }

    /// Shortest reachable hip-foot distance
    pub fn min_reach(&self) -> f64 {
        (self.upper - self.lower).abs()
    }
}

/// Oscillator values driving the upper body at a given time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Vertical offset; negative moves the body up the screen
    pub bounce: f64,
    /// Horizontal offset
    pub sway: f64,
    /// Arm swing in degrees
    pub arm_angle_deg: f64,
    /// Head rotation in degrees
    pub head_tilt_deg: f64,
}

impl Motion {
    pub fn at(t: f64) -> Self {
        Self {
            // y grows downward, so positive phase lifts the body
            bounce: -(t * BOUNCE_FREQ).sin() * BOUNCE_AMPLITUDE,
            sway: (t * SWAY_FREQ).cos() * SWAY_AMPLITUDE,
            arm_angle_deg: (t * ARM_SWING_FREQ).sin() * ARM_SWING_DEG,
            head_tilt_deg: (t * HEAD_TILT_FREQ).sin() * HEAD_TILT_DEG,
        }
    }

    /// Head center: the rest root shifted by sway and bounce
    pub fn base(&self) -> Point2D {
        DVec2::new(ROOT_X + self.sway, ROOT_Y + self.bounce)
    }
}

/// Drawable line segments of the figure, in draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Segment {
    Body = 0,
    LeftArm = 1,
    RightArm = 2,
    LeftThigh = 3,
    LeftShin = 4,
    RightThigh = 5,
    RightShin = 6,
}

impl Segment {
    pub const COUNT: usize = 7;

    pub const ALL: [Segment; Self::COUNT] = [
        Segment::Body,
        Segment::LeftArm,
        Segment::RightArm,
        Segment::LeftThigh,
        Segment::LeftShin,
        Segment::RightThigh,
        Segment::RightShin,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Snapshot of every drawable point of the figure for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub head: Point2D,
    pub head_tilt_deg: f64,
    /// Top of the body line; both arms hang from here
    pub neck: Point2D,
    /// Bottom of the body line; both thighs hang from here
    pub hip: Point2D,
    pub left_hand: Point2D,
    pub right_hand: Point2D,
    pub left_knee: Point2D,
    pub right_knee: Point2D,
    pub left_foot: Point2D,
    pub right_foot: Point2D,
}

impl Pose {
    /// Endpoints of one drawable segment
    pub fn segment(&self, segment: Segment) -> (Point2D, Point2D) {
        match segment {
            Segment::Body => (self.neck, self.hip),
            Segment::LeftArm => (self.neck, self.left_hand),
            Segment::RightArm => (self.neck, self.right_hand),
            Segment::LeftThigh => (self.hip, self.left_knee),
            Segment::LeftShin => (self.left_knee, self.left_foot),
            Segment::RightThigh => (self.hip, self.right_knee),
            Segment::RightShin => (self.right_knee, self.right_foot),
        }
    }

    pub fn is_finite(&self) -> bool {
        [
            self.head,
            self.neck,
            self.hip,
            self.left_hand,
            self.right_hand,
            self.left_knee,
            self.right_knee,
            self.left_foot,
            self.right_foot,
        ]
        .iter()
        .all(|p| p.is_finite())
            && self.head_tilt_deg.is_finite()
    }
}

/// Compute the full pose at time `t` (seconds).
pub fn generate_pose(t: f64, left_foot: Point2D, right_foot: Point2D, limb: LimbSpec) -> Pose {
    let motion = Motion::at(t);
    let base = motion.base();

    let neck = base + DVec2::new(0.0, NECK_OFFSET);
    let hip = base + DVec2::new(0.0, HIP_OFFSET);

    let left_hand = neck + direction_deg(motion.arm_angle_deg + ARM_REST_DEG) * ARM_LENGTH;
    let right_hand = neck + direction_deg(-motion.arm_angle_deg - ARM_REST_DEG) * ARM_LENGTH;

    let left_knee = solve_knee(hip, left_foot, limb.upper, limb.lower, Side::Left);
    let right_knee = solve_knee(hip, right_foot, limb.upper, limb.lower, Side::Right);

    Pose {
        head: base,
        head_tilt_deg: motion.head_tilt_deg,
        neck,
        hip,
        left_hand,
        right_hand,
        left_knee,
        right_knee,
        left_foot,
        right_foot,
    }
}

/// [`generate_pose`] with the feet and legs taken from a scene
pub fn generate_pose_for(t: f64, scene: &SceneConfig) -> Pose {
    generate_pose(t, scene.left_foot, scene.right_foot, scene.limb)
}
