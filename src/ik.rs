//! Closed-form two-bone IK for the legs.
//!
//! The hip and the foot are fixed; the knee is the apex of the triangle
//! `hip-knee-foot` whose sides are the hip-foot distance and the two segment
//! lengths. Two mirror-image apexes exist; a coordinate heuristic picks one.

use crate::geometry::Point2D;
use glam::DVec2;

/// Which of the two mirror-image knees to keep.
///
/// This is a screen-x heuristic, not a bend-direction solver: `Left` keeps the
/// candidate with the smaller x, `Right` the one with the larger x. For
/// unusual hip/foot geometry (e.g. a nearly horizontal leg) the choice can
/// flip between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Whether a triangle with the given hip-foot distance can be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    Reachable,
    /// Hip and foot are the same point
    Coincident,
    /// `d > l1 + l2`
    TooFar,
    /// `d < |l1 - l2|`
    TooClose,
}

impl Reach {
    pub fn is_reachable(self) -> bool {
        self == Reach::Reachable
    }
}

/// Classify the hip-foot distance against the limb lengths
pub fn classify_reach(hip: Point2D, foot: Point2D, l1: f64, l2: f64) -> Reach {
    let d = hip.distance(foot);
    if d == 0.0 {
        Reach::Coincident
    } else if d > l1 + l2 {
        Reach::TooFar
    } else if d < (l1 - l2).abs() {
        Reach::TooClose
    } else {
        Reach::Reachable
    }
}

/// Both knee positions satisfying `|hip-knee| = l1` and `|knee-foot| = l2`.
///
/// Returns `None` when the triangle cannot be built (see [`classify_reach`]).
/// The first candidate lies at `+h` along `(u.y, -u.x)`, the second at `+h`
/// along `(-u.y, u.x)`, where `u` is the unit hip→foot direction.
pub fn knee_candidates(hip: Point2D, foot: Point2D, l1: f64, l2: f64) -> Option<[Point2D; 2]> {
    if !classify_reach(hip, foot, l1, l2).is_reachable() {
        return None;
    }

    let delta = foot - hip;
    let d = delta.length();
    let u = delta / d;

    // Distance from hip to the altitude foot along hip→foot
    let a = (l1 * l1 - l2 * l2 + d * d) / (2.0 * d);
    // Rounding at d == l1 + l2 can push this a hair below zero
    let h = (l1 * l1 - a * a).max(0.0).sqrt();

    let p = hip + u * a;
    let normal = DVec2::new(u.y, -u.x) * h;

    Some([p + normal, p - normal])
}

/// Solve the knee position of a two-segment leg.
///
/// # Arguments
/// * `hip` - Fixed upper anchor
/// * `foot` - Fixed lower anchor
/// * `l1` - Upper segment length (hip → knee), must be positive
/// * `l2` - Lower segment length (knee → foot), must be positive
/// * `side` - Which of the two solutions to keep
///
/// # Returns
/// * The knee position, or the midpoint of hip and foot when the target is
///   out of reach (or hip and foot coincide). The fallback keeps the figure
///   drawable while the animation momentarily overstretches the leg.
pub fn solve_knee(hip: Point2D, foot: Point2D, l1: f64, l2: f64, side: Side) -> Point2D {
    let Some([first, second]) = knee_candidates(hip, foot, l1, l2) else {
        return hip + (foot - hip) / 2.0;
    };

    // Strict comparison: an x tie keeps the second candidate for both sides
    let keep_first = match side {
        Side::Left => first.x < second.x,
        Side::Right => first.x > second.x,
    };
    if keep_first {
        first
    } else {
        second
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const TOLERANCE: f64 = 1e-6;

    fn midpoint(a: Point2D, b: Point2D) -> Point2D {
        a + (b - a) / 2.0
    }

    #[test]
    fn test_knee_satisfies_both_lengths() {
        let hip = DVec2::new(430.0, 350.0);
        let foot = DVec2::new(370.0, 450.0);

        for side in [Side::Left, Side::Right] {
            let knee = solve_knee(hip, foot, 60.0, 60.0, side);
            assert!((hip.distance(knee) - 60.0).abs() < TOLERANCE);
            assert!((knee.distance(foot) - 60.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_random_reachable_targets() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..2_000 {
            let l1: f64 = rng.random_range(5.0..150.0);
            let l2: f64 = rng.random_range(5.0..150.0);
            let min = (l1 - l2).abs();
            let max = l1 + l2;
            // Stay strictly inside the open interval
            let d = rng.random_range((min + 1e-3).max(1e-3)..(max - 1e-3));
            let angle = rng.random_range(0.0..std::f64::consts::TAU);

            let hip = DVec2::new(rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0));
            let foot = hip + DVec2::from_angle(angle) * d;

            let side = if rng.random_bool(0.5) {
                Side::Left
            } else {
                Side::Right
            };
            let knee = solve_knee(hip, foot, l1, l2, side);

            assert!(
                (hip.distance(knee) - l1).abs() < TOLERANCE,
                "hip-knee {} != {} (hip {:?}, foot {:?})",
                hip.distance(knee),
                l1,
                hip,
                foot
            );
            assert!(
                (knee.distance(foot) - l2).abs() < TOLERANCE,
                "knee-foot {} != {} (hip {:?}, foot {:?})",
                knee.distance(foot),
                l2,
                hip,
                foot
            );
        }
    }

    #[test]
    fn test_coincident_returns_midpoint() {
        let hip = DVec2::new(12.5, -3.0);
        assert_eq!(classify_reach(hip, hip, 60.0, 60.0), Reach::Coincident);
        assert_eq!(solve_knee(hip, hip, 60.0, 60.0, Side::Left), hip);
    }

    #[test]
    fn test_too_far_returns_midpoint() {
        let hip = DVec2::new(430.0, 330.0);
        let foot = DVec2::new(370.0, 450.0);
        assert_eq!(classify_reach(hip, foot, 60.0, 60.0), Reach::TooFar);

        for side in [Side::Left, Side::Right] {
            assert_eq!(solve_knee(hip, foot, 60.0, 60.0, side), midpoint(hip, foot));
        }
    }

    #[test]
    fn test_too_close_returns_midpoint() {
        let hip = DVec2::new(0.0, 0.0);
        let foot = DVec2::new(10.0, 0.0);
        assert_eq!(classify_reach(hip, foot, 80.0, 20.0), Reach::TooClose);
        assert_eq!(
            solve_knee(hip, foot, 80.0, 20.0, Side::Right),
            midpoint(hip, foot)
        );
    }

    #[test]
    fn test_full_extension_is_reachable() {
        let hip = DVec2::new(0.0, 0.0);
        let foot = DVec2::new(0.0, 120.0);
        let knee = solve_knee(hip, foot, 60.0, 60.0, Side::Left);

        assert!(knee.distance(DVec2::new(0.0, 60.0)) < TOLERANCE);
        assert!(!knee.is_nan());
    }

    #[test]
    fn test_side_picks_lesser_and_greater_x() {
        let hip = DVec2::new(400.0, 350.0);
        let foot = DVec2::new(400.0, 450.0);
        let [a, b] = knee_candidates(hip, foot, 60.0, 60.0).unwrap();

        let left = solve_knee(hip, foot, 60.0, 60.0, Side::Left);
        let right = solve_knee(hip, foot, 60.0, 60.0, Side::Right);

        assert_eq!(left.x, a.x.min(b.x));
        assert_eq!(right.x, a.x.max(b.x));
        assert!(left.x < hip.x && right.x > hip.x);
    }

    #[test]
    fn test_side_choice_is_stable_across_calls() {
        let hip = DVec2::new(415.0, 342.0);
        let foot = DVec2::new(370.0, 450.0);
        let first = solve_knee(hip, foot, 60.0, 60.0, Side::Left);
        for _ in 0..10 {
            assert_eq!(solve_knee(hip, foot, 60.0, 60.0, Side::Left), first);
        }
    }

    #[test]
    fn test_x_tie_keeps_second_candidate() {
        // Horizontal leg: both candidates share the same x
        let hip = DVec2::new(0.0, 0.0);
        let foot = DVec2::new(100.0, 0.0);
        let [a, b] = knee_candidates(hip, foot, 60.0, 60.0).unwrap();
        assert!((a.x - b.x).abs() < 1e-12);

        assert_eq!(solve_knee(hip, foot, 60.0, 60.0, Side::Left), b);
        assert_eq!(solve_knee(hip, foot, 60.0, 60.0, Side::Right), b);
        // Second candidate hangs below the line on screen
        assert!(b.y > 0.0);
    }
}
