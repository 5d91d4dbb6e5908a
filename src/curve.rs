//! Easing curves for fades
//!
//! A curve maps normalized fade progress `t` in `[0, 1]` to eased progress.
//! Every curve maps 0 to 0 and 1 to 1; overshooting kinds (`Back`, `Elastic`)
//! may leave `[0, 1]` in between.

use crate::error::FaderError;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum FadeCurve {
    #[default]
    Linear,
    /// Slow start, fast finish
    Exponential,
    /// Fast start, slow finish
    Logarithmic,
    /// Cosine ease in-out
    SCurve,
    /// Constant perceived loudness when two faders cross
    EqualPower,
    /// Holds the start value until the fade completes
    Stepped,
    /// Cubic bezier with fixed (0,0) and (1,1) endpoints
    Bezier(f32, f32),

    Elastic,
    Bounce,
    Back,
    Circular,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
}

impl FadeCurve {
    /// Curves that can be named in configuration without parameters
    pub const NAMED: [FadeCurve; 22] = [
        FadeCurve::Linear,
        FadeCurve::Exponential,
        FadeCurve::Logarithmic,
        FadeCurve::SCurve,
        FadeCurve::EqualPower,
        FadeCurve::Stepped,
        FadeCurve::Elastic,
        FadeCurve::Bounce,
        FadeCurve::Back,
        FadeCurve::Circular,
        FadeCurve::QuadIn,
        FadeCurve::QuadOut,
        FadeCurve::QuadInOut,
        FadeCurve::CubicIn,
        FadeCurve::CubicOut,
        FadeCurve::CubicInOut,
        FadeCurve::QuartIn,
        FadeCurve::QuartOut,
        FadeCurve::QuartInOut,
        FadeCurve::QuintIn,
        FadeCurve::QuintOut,
        FadeCurve::QuintInOut,
    ];

    /// Eased progress for normalized time `t` (clamped to `[0, 1]`).
    #[must_use]
    #[inline]
    pub fn ease(&self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match *self {
            FadeCurve::Linear => t,
            FadeCurve::Exponential | FadeCurve::QuadIn => power_in(t, 2),
            FadeCurve::Logarithmic => t.sqrt(),
            FadeCurve::SCurve => 0.5 * (1.0 - (PI * t).cos()),
            FadeCurve::EqualPower => (t * FRAC_PI_2).sin(),
            FadeCurve::Stepped => 0.0,
            FadeCurve::Bezier(cp1, cp2) => cubic_bezier(t, cp1, cp2),

            FadeCurve::Elastic => {
                let period = 0.3;
                let shift = period / 4.0;
                -(2.0_f32.powf(10.0 * (t - 1.0)))
                    * ((t - 1.0 - shift) * (2.0 * PI) / period).sin()
            }
            FadeCurve::Bounce => 1.0 - bounce_out(1.0 - t),
            FadeCurve::Back => {
                let overshoot = 1.70158;
                t * t * ((overshoot + 1.0) * t - overshoot)
            }
            FadeCurve::Circular => 1.0 - (1.0 - t * t).sqrt(),

            FadeCurve::QuadOut => power_out(t, 2),
            FadeCurve::QuadInOut => power_in_out(t, 2),
            FadeCurve::CubicIn => power_in(t, 3),
            FadeCurve::CubicOut => power_out(t, 3),
            FadeCurve::CubicInOut => power_in_out(t, 3),
            FadeCurve::QuartIn => power_in(t, 4),
            FadeCurve::QuartOut => power_out(t, 4),
            FadeCurve::QuartInOut => power_in_out(t, 4),
            FadeCurve::QuintIn => power_in(t, 5),
            FadeCurve::QuintOut => power_out(t, 5),
            FadeCurve::QuintInOut => power_in_out(t, 5),
        }
    }

    /// Value between `start` and `end` at normalized time `t`.
    ///
    /// The eased progress is clamped to `[0, 1]` first, so the result never
    /// leaves the range spanned by `start` and `end`, even for overshooting
    /// curves.
    #[must_use]
    #[inline]
    pub fn interpolate(&self, start: f32, end: f32, t: f32) -> f32 {
        let s = self.ease(t).clamp(0.0, 1.0);
        start + (end - start) * s
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            FadeCurve::Linear => "Linear",
            FadeCurve::Exponential => "Exponential",
            FadeCurve::Logarithmic => "Logarithmic",
            FadeCurve::SCurve => "S-Curve",
            FadeCurve::EqualPower => "Equal Power",
            FadeCurve::Stepped => "Stepped",
            FadeCurve::Bezier(_, _) => "Bezier",
            FadeCurve::Elastic => "Elastic",
            FadeCurve::Bounce => "Bounce",
            FadeCurve::Back => "Back",
            FadeCurve::Circular => "Circular",
            FadeCurve::QuadIn => "Quad In",
            FadeCurve::QuadOut => "Quad Out",
            FadeCurve::QuadInOut => "Quad In-Out",
            FadeCurve::CubicIn => "Cubic In",
            FadeCurve::CubicOut => "Cubic Out",
            FadeCurve::CubicInOut => "Cubic In-Out",
            FadeCurve::QuartIn => "Quart In",
            FadeCurve::QuartOut => "Quart Out",
            FadeCurve::QuartInOut => "Quart In-Out",
            FadeCurve::QuintIn => "Quint In",
            FadeCurve::QuintOut => "Quint Out",
            FadeCurve::QuintInOut => "Quint In-Out",
        }
    }

    /// Whether eased progress can leave `[0, 1]` mid-fade
    #[must_use]
    pub fn overshoots(&self) -> bool {
        match *self {
            FadeCurve::Back | FadeCurve::Elastic => true,
            FadeCurve::Bezier(cp1, cp2) => {
                !(0.0..=1.0).contains(&cp1) || !(0.0..=1.0).contains(&cp2)
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for FadeCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase with spaces, dashes and underscores removed
pub(crate) fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for FadeCurve {
    type Err = FaderError;

    /// Parses display names and variant names alike ("Quad In-Out",
    /// "QuadInOut", "quad_in_out").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        FadeCurve::NAMED
            .iter()
            .copied()
            .find(|curve| normalize_name(curve.name()) == wanted)
            .ok_or_else(|| FaderError::UnknownCurve(s.to_string()))
    }
}

#[inline]
fn power_in(t: f32, n: i32) -> f32 {
    t.powi(n)
}

#[inline]
fn power_out(t: f32, n: i32) -> f32 {
    1.0 - (1.0 - t).powi(n)
}

#[inline]
fn power_in_out(t: f32, n: i32) -> f32 {
    if t < 0.5 {
        2.0_f32.powi(n - 1) * t.powi(n)
    } else {
        1.0 - (2.0 - 2.0 * t).powi(n) / 2.0
    }
}

fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;

    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984_375
    }
}

/// B(t) = 3(1-t)²t·cp1 + 3(1-t)t²·cp2 + t³
#[inline]
fn cubic_bezier(t: f32, cp1: f32, cp2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * cp1 + 3.0 * mt * t * t * cp2 + t * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_linear_ease() {
        let curve = FadeCurve::Linear;
        assert_eq!(curve.ease(0.0), 0.0);
        assert_eq!(curve.ease(0.25), 0.25);
        assert_eq!(curve.ease(1.0), 1.0);
    }

    #[test]
    fn test_endpoints_are_fixed() {
        let mut curves = FadeCurve::NAMED.to_vec();
        curves.push(FadeCurve::Bezier(0.1, 0.9));
        curves.push(FadeCurve::Bezier(-0.5, 1.5));

        for curve in curves {
            assert_eq!(curve.ease(0.0), 0.0, "{curve} at 0");
            assert_eq!(curve.ease(1.0), 1.0, "{curve} at 1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        let curve = FadeCurve::CubicOut;
        assert_eq!(curve.ease(-3.0), 0.0);
        assert_eq!(curve.ease(7.0), 1.0);
        assert_eq!(curve.ease(f32::NAN), 0.0);
    }

    #[test]
    fn test_exponential_and_logarithmic_bracket_linear() {
        assert!(FadeCurve::Exponential.ease(0.5) < 0.5);
        assert!(FadeCurve::Logarithmic.ease(0.5) > 0.5);
    }

    #[test]
    fn test_in_out_curves_hit_midpoint() {
        for curve in [
            FadeCurve::SCurve,
            FadeCurve::QuadInOut,
            FadeCurve::CubicInOut,
            FadeCurve::QuartInOut,
            FadeCurve::QuintInOut,
        ] {
            assert!((curve.ease(0.5) - 0.5).abs() < EPS, "{curve}");
        }
    }

    #[test]
    fn test_equal_power_midpoint() {
        let mid = FadeCurve::EqualPower.ease(0.5);
        assert!((mid - std::f32::consts::FRAC_1_SQRT_2).abs() < EPS);
    }

    #[test]
    fn test_stepped_holds_until_end() {
        let curve = FadeCurve::Stepped;
        assert_eq!(curve.ease(0.99), 0.0);
        assert_eq!(curve.ease(1.0), 1.0);
    }

    #[test]
    fn test_bezier_linear_controls() {
        // Control points at thirds reproduce the straight line
        let curve = FadeCurve::Bezier(1.0 / 3.0, 2.0 / 3.0);
        assert!((curve.ease(0.5) - 0.5).abs() < EPS);
        assert!((curve.ease(0.2) - 0.2).abs() < EPS);
    }

    #[test]
    fn test_back_overshoots_but_interpolate_stays_in_range() {
        let curve = FadeCurve::Back;
        assert!(curve.overshoots());
        assert!(curve.ease(0.2) < 0.0);

        let value = curve.interpolate(0.2, 0.8, 0.2);
        assert_eq!(value, 0.2);
    }

    #[test]
    fn test_interpolate_reversed_range() {
        let curve = FadeCurve::Linear;
        assert!((curve.interpolate(1.0, 0.0, 0.25) - 0.75).abs() < EPS);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Linear".parse::<FadeCurve>().unwrap(), FadeCurve::Linear);
        assert_eq!("quad_in_out".parse::<FadeCurve>().unwrap(), FadeCurve::QuadInOut);
        assert_eq!("Quad In-Out".parse::<FadeCurve>().unwrap(), FadeCurve::QuadInOut);
        assert_eq!("s-curve".parse::<FadeCurve>().unwrap(), FadeCurve::SCurve);
        assert!(matches!(
            "wobble".parse::<FadeCurve>(),
            Err(FaderError::UnknownCurve(name)) if name == "wobble"
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(FadeCurve::CubicInOut.to_string(), "Cubic In-Out");
        assert_eq!(FadeCurve::default(), FadeCurve::Linear);
    }
}
