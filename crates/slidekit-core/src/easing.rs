//! Easing curves for open/close transitions.

/// Easing applied to the linear progress of a slide animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// The widget default: decelerating cubic `1 + (t - 1)^3`.
    Decelerate,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material-style standard curve.
    FastOutSlowIn,
    /// Material-style incoming curve.
    LinearOutSlowIn,
    /// Custom cubic bezier control points (x1, y1, x2, y2).
    CubicBezier(f32, f32, f32, f32),
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Decelerate
    }
}

impl Easing {
    /// Maps a linear fraction in [0, 1] onto the curve.
    pub fn transform(self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Decelerate => 1.0 + (t - 1.0).powi(3),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Easing::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

/// Evaluates a cubic bezier easing with endpoints (0,0) and (1,1).
///
/// `x(t)` is monotonic for control x-values in [0, 1], so a plain bisection
/// on the parameter is enough.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut t = fraction;
    for _ in 0..24 {
        let x = sample_axis(x1, x2, t);
        if (x - fraction).abs() < 1e-5 {
            break;
        }
        if x < fraction {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }

    sample_axis(y1, y2, t)
}

/// One bezier axis with implicit endpoints 0 and 1.
#[inline]
fn sample_axis(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 8] = [
        Easing::Linear,
        Easing::Decelerate,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
        Easing::LinearOutSlowIn,
        Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
    ];

    #[test]
    fn every_curve_hits_both_endpoints() {
        for curve in CURVES {
            assert_eq!(curve.transform(0.0), 0.0, "{curve:?} at 0");
            assert!(
                (curve.transform(1.0) - 1.0).abs() < 1e-4,
                "{curve:?} at 1"
            );
        }
    }

    #[test]
    fn every_curve_is_monotonic() {
        for curve in CURVES {
            let mut previous = 0.0f32;
            for step in 1..=100 {
                let value = curve.transform(step as f32 / 100.0);
                assert!(
                    value >= previous - 1e-4,
                    "{curve:?} decreased at step {step}"
                );
                previous = value;
            }
        }
    }

    #[test]
    fn decelerate_matches_the_cubic() {
        let eased = Easing::Decelerate.transform(0.5);
        assert!((eased - 0.875).abs() < 1e-6);
    }

    #[test]
    fn ease_in_out_is_roughly_symmetric() {
        let early = Easing::EaseInOut.transform(0.25);
        let late = Easing::EaseInOut.transform(0.75);
        assert!((early + late - 1.0).abs() < 0.02);
    }

    #[test]
    fn out_of_range_fractions_clamp() {
        assert_eq!(Easing::Decelerate.transform(-0.5), 0.0);
        assert_eq!(Easing::Decelerate.transform(1.5), 1.0);
    }
}
