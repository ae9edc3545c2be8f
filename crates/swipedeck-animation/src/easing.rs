//! Easing curves for timed animations.

/// Easing applied to the linear progress of a timed animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Accelerate from rest.
    EaseIn,
    /// Decelerate into the target.
    EaseOut,
    /// Accelerate then decelerate. The default for timed animations.
    EaseInOut,
}

impl Easing {
    /// Map a linear fraction in [0, 1] through the curve.
    pub fn transform(self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
        }
    }
}

/// Evaluate a cubic bezier easing curve anchored at (0,0) and (1,1).
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let slope = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson for the parametric t matching the x fraction.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let error = sample(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            converged = true;
            break;
        }
        let derivative = slope(ax, bx, cx, t);
        if derivative.abs() < 1e-6 {
            break;
        }
        t = (t - error / derivative).clamp(0.0, 1.0);
    }

    if !converged {
        // Bisection fallback for flat stretches of the curve.
        let mut lo = 0.0f32;
        let mut hi = 1.0f32;
        t = fraction;
        for _ in 0..16 {
            let error = sample(ax, bx, cx, t) - fraction;
            if error.abs() < 1e-6 {
                break;
            }
            if error > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_is_identity() {
        assert_eq!(Easing::Linear.transform(0.0), 0.0);
        assert_eq!(Easing::Linear.transform(0.25), 0.25);
        assert_eq!(Easing::Linear.transform(1.0), 1.0);
    }

    #[test]
    fn curves_hit_their_endpoints() {
        let curves = [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ];
        for easing in curves {
            assert!(
                easing.transform(0.0).abs() < 0.01,
                "start should be ~0 for {:?}",
                easing
            );
            assert!(
                (easing.transform(1.0) - 1.0).abs() < 0.01,
                "end should be ~1 for {:?}",
                easing
            );
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in [Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            let mut previous = 0.0;
            for i in 0..=50 {
                let value = easing.transform(i as f32 / 50.0);
                assert!(
                    value >= previous - 1e-4,
                    "{:?} should not run backwards",
                    easing
                );
                previous = value;
            }
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        for i in 1..10 {
            let fraction = i as f32 / 10.0;
            let forward = Easing::EaseInOut.transform(fraction);
            let backward = Easing::EaseInOut.transform(1.0 - fraction);
            assert!(
                (forward + backward - 1.0).abs() < 1e-3,
                "ease-in-out should mirror around the midpoint"
            );
        }
    }

    #[test]
    fn ease_in_starts_slow() {
        assert!(Easing::EaseIn.transform(0.25) < 0.25);
        assert!(Easing::EaseOut.transform(0.25) > 0.25);
    }
}
