//! Timing curves for the staggered reveal.
//!
//! Each row picks its own curve so the sequence does not feel mechanical:
//! the first stroke accelerates in, the middle ones run at constant speed and
//! the last one settles out.
//!
//! The non-linear curves are the standard CSS/UIKit cubic béziers through
//! `(0, 0)` and `(1, 1)`:
//!
//! | Curve       | P1           | P2           |
//! |-------------|--------------|--------------|
//! | `EaseIn`    | (0.42, 0.0)  | (1.0, 1.0)   |
//! | `EaseOut`   | (0.0, 0.0)   | (0.58, 1.0)  |
//! | `EaseInOut` | (0.42, 0.0)  | (0.58, 1.0)  |
//!
//! Solving `x(t) = progress` uses a few Newton-Raphson iterations, which
//! converge quickly because these curves are monotone in `x`.

/// A reveal timing curve.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Starts slow, ends at full speed.
    EaseIn,
    /// Starts at full speed, slows to a stop.
    EaseOut,
    /// Slow at both ends.
    EaseInOut,
}

impl Easing {
    /// Bézier control points `(p1, p2)` for the curve, `None` for linear.
    const fn control_points(self) -> Option<((f32, f32), (f32, f32))> {
        match self {
            Self::Linear => None,
            Self::EaseIn => Some(((0.42, 0.0), (1.0, 1.0))),
            Self::EaseOut => Some(((0.0, 0.0), (0.58, 1.0))),
            Self::EaseInOut => Some(((0.42, 0.0), (0.58, 1.0))),
        }
    }

    /// Map linear progress (0.0..=1.0, clamped) to eased progress.
    pub fn apply(
        self,
        progress: f32,
    ) -> f32 {
        if progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }
        match self.control_points() {
            None => progress,
            Some((p1, p2)) => solve_cubic_bezier(p1, p2, progress),
        }
    }
}

/// Evaluate a unit cubic bézier's `y` at the parameter whose `x` equals `x`.
fn solve_cubic_bezier(
    p1: (f32, f32),
    p2: (f32, f32),
    x: f32,
) -> f32 {
    let mut t = x;
    for _ in 0..8 {
        let one_minus_t = 1.0 - t;
        let x_est = 3.0 * one_minus_t * one_minus_t * t * p1.0 + 3.0 * one_minus_t * t * t * p2.0 + t * t * t;

        let err = x_est - x;
        if err.abs() < 1e-5 {
            break;
        }

        let dx_dt = 3.0 * one_minus_t * one_minus_t * p1.0
            + 6.0 * one_minus_t * t * (p2.0 - p1.0)
            + 3.0 * t * t * (1.0 - p2.0);
        if dx_dt.abs() < 1e-6 {
            break;
        }
        t = (t - err / dx_dt).clamp(0.0, 1.0);
    }

    let one_minus_t = 1.0 - t;
    3.0 * one_minus_t * one_minus_t * t * p1.1 + 3.0 * one_minus_t * t * t * p2.1 + t * t * t
}
