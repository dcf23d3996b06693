//! Easing curves
//!
//! Named curves follow the CSS definitions. Custom curves are cubic-bezier
//! control points `(x1, y1, x2, y2)` solved for `x` with Newton-Raphson,
//! falling back to bisection when the slope is too flat to converge.

use serde::{Deserialize, Serialize};

/// A timing curve mapping linear progress in [0, 1] to eased progress
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseOut
    }
}

impl Easing {
    /// Very fast start, long soft landing. Project cards.
    pub const EXPO_OUT: Easing = Easing::CubicBezier(0.19, 1.0, 0.22, 1.0);
    /// Timeline reveals.
    pub const QUINT_OUT: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);
    /// About cards.
    pub const SOFT_OUT: Easing = Easing::CubicBezier(0.23, 1.0, 0.32, 1.0);
    /// Overshoots past 1 before settling.
    pub const BACK_OUT: Easing = Easing::CubicBezier(0.34, 1.56, 0.64, 1.0);
    /// Contact blurb.
    pub const QUAD_OUT: Easing = Easing::CubicBezier(0.25, 0.46, 0.45, 0.94);

    /// Evaluate the curve at linear progress `t`. Input is clamped to [0, 1].
    ///
    /// The output may leave [0, 1] for overshooting curves such as
    /// [`Easing::BACK_OUT`].
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(t, 0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => cubic_bezier(t, 0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => cubic_bezier(t, 0.42, 0.0, 0.58, 1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_MIN_SLOPE: f32 = 1e-3;
const PRECISION: f32 = 1e-5;
const BISECTION_ITERATIONS: usize = 24;

fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    // Linear control points describe the identity curve
    if x1 == y1 && x2 == y2 {
        return t;
    }
    let u = solve_for_x(t, x1.clamp(0.0, 1.0), x2.clamp(0.0, 1.0));
    bezier_at(u, y1, y2)
}

fn solve_for_x(x: f32, x1: f32, x2: f32) -> f32 {
    let mut u = x;
    for _ in 0..NEWTON_ITERATIONS {
        let error = bezier_at(u, x1, x2) - x;
        if error.abs() < PRECISION {
            return u;
        }
        let slope = bezier_derivative(u, x1, x2);
        if slope.abs() < NEWTON_MIN_SLOPE {
            break;
        }
        u = (u - error / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    u = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier_at(u, x1, x2);
        if (value - x).abs() < PRECISION {
            break;
        }
        if value < x {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) * 0.5;
    }
    u
}

/// One coordinate of a cubic bezier with endpoints fixed at 0 and 1
fn bezier_at(t: f32, p1: f32, p2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

fn bezier_derivative(t: f32, p1: f32, p2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}
