// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing curves.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Newton iterations before falling back to bisection.
const NEWTON_ITERATIONS: usize = 8;
/// Bisection iterations; 2^-32 is far below anything visible.
const BISECTION_ITERATIONS: usize = 32;
const EPSILON: f64 = 1e-7;

/// A timing curve mapping linear progress in `[0, 1]` to eased progress.
///
/// All curves map `0 → 0` and `1 → 1`. Inputs outside `[0, 1]` are clamped.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start, cubic-bezier `(0.42, 0, 1, 1)`.
    EaseIn,
    /// Slow end, cubic-bezier `(0, 0, 0.58, 1)`.
    EaseOut,
    /// Slow start and end, cubic-bezier `(0.42, 0, 0.58, 1)`.
    #[default]
    EaseInOut,
    /// A CSS-style cubic-bezier timing function with control points
    /// `(x1, y1)` and `(x2, y2)`; the end points are fixed at `(0, 0)` and `(1, 1)`.
    ///
    /// `x1` and `x2` are clamped into `[0, 1]` so the curve stays a function of time.
    CubicBezier {
        /// First control point, X.
        x1: f64,
        /// First control point, Y.
        y1: f64,
        /// Second control point, X.
        x2: f64,
        /// Second control point, Y.
        y2: f64,
    },
}

impl Easing {
    /// Returns the eased progress for linear progress `t`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        if t.is_nan() {
            return 0.0;
        }
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                cubic_bezier(x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2, t)
            }
        }
    }
}

/// One coordinate of a cubic bezier with end points 0 and 1.
fn bezier_coord(p1: f64, p2: f64, s: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

fn bezier_coord_derivative(p1: f64, p2: f64, s: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    bezier_coord(y1, y2, solve_parameter(x1, x2, x))
}

/// Finds the curve parameter whose X coordinate equals `x`.
fn solve_parameter(x1: f64, x2: f64, x: f64) -> f64 {
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier_coord(x1, x2, s) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let slope = bezier_coord_derivative(x1, x2, s);
        if slope.abs() < EPSILON {
            break;
        }
        s -= err / slope;
    }

    // Newton stalled on a flat section; X is monotonic in s, so bisect.
    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier_coord(x1, x2, s);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    s
}
