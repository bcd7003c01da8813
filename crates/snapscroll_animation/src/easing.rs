//! CSS-style timing functions
//!
//! The widget configuration names its curve the way CSS does (`"ease"`,
//! `"ease-in-out"`, ...). The declarative strategy passes the name straight
//! through to the platform; the tween fallback evaluates the same curve
//! numerically via [`Easing::apply`].

/// A timing function, named or explicit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    /// CSS `ease`, cubic-bezier(0.25, 0.1, 0.25, 1).
    #[default]
    Ease,
    Linear,
    /// CSS `ease-in`, cubic-bezier(0.42, 0, 1, 1).
    EaseIn,
    /// CSS `ease-out`, cubic-bezier(0, 0, 0.58, 1).
    EaseOut,
    /// CSS `ease-in-out`, cubic-bezier(0.42, 0, 0.58, 1).
    EaseInOut,
    /// Explicit control points (x1, y1, x2, y2).
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Parse a CSS timing-function name. `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ease" => Some(Easing::Ease),
            "linear" => Some(Easing::Linear),
            "ease-in" => Some(Easing::EaseIn),
            "ease-out" => Some(Easing::EaseOut),
            "ease-in-out" => Some(Easing::EaseInOut),
            _ => None,
        }
    }

    /// The CSS spelling, as written into a `transition` property.
    pub fn css_name(&self) -> String {
        match self {
            Easing::Ease => "ease".to_string(),
            Easing::Linear => "linear".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }

    fn control_points(&self) -> Option<(f32, f32, f32, f32)> {
        match self {
            Easing::Linear => None,
            Easing::Ease => Some((0.25, 0.1, 0.25, 1.0)),
            Easing::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Easing::CubicBezier(x1, y1, x2, y2) => Some((*x1, *y1, *x2, *y2)),
        }
    }

    /// Map a linear progress value in `[0, 1]` through the curve.
    pub fn apply(&self, t: f32) -> f32 {
        match self.control_points() {
            None => t,
            Some((x1, y1, x2, y2)) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

/// Evaluate the CSS cubic-bezier curve at progress `t`.
///
/// Solves bezier_x(p) == t for the parameter with Newton-Raphson, falling
/// back to bisection when the slope flattens out, then samples the y
/// polynomial. Internally f64 so repeated per-frame evaluation stays stable.
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = t as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut p = x;
    for _ in 0..8 {
        let err = sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return sample(p, y1, y2) as f32;
        }
        let slope = derivative(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = x;
    for _ in 0..24 {
        let val = sample(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    sample(p, y1, y2) as f32
}

/// One-dimensional cubic bezier with endpoints pinned at 0 and 1, in Horner
/// form.
#[inline]
fn sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn derivative(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_css_names() {
        assert_eq!(Easing::from_name("ease"), Some(Easing::Ease));
        assert_eq!(Easing::from_name("linear"), Some(Easing::Linear));
        assert_eq!(Easing::from_name("ease-in-out"), Some(Easing::EaseInOut));
        assert_eq!(Easing::from_name("bouncy"), None);
    }

    #[test]
    fn css_name_round_trips_named_curves() {
        for name in ["ease", "linear", "ease-in", "ease-out", "ease-in-out"] {
            let easing = Easing::from_name(name).unwrap();
            assert_eq!(easing.css_name(), name);
        }
        assert_eq!(
            Easing::CubicBezier(0.1, 0.2, 0.3, 0.4).css_name(),
            "cubic-bezier(0.1, 0.2, 0.3, 0.4)"
        );
    }

    #[test]
    fn endpoints_are_exact() {
        for easing in [
            Easing::Ease,
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CubicBezier(0.3, -0.2, 0.7, 1.4),
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn linear_is_identity() {
        assert!((Easing::Linear.apply(0.37) - 0.37).abs() < 1e-6);
    }

    #[test]
    fn ease_in_starts_slow_ease_out_starts_fast() {
        assert!(Easing::EaseIn.apply(0.25) < 0.25);
        assert!(Easing::EaseOut.apply(0.25) > 0.25);
    }

    #[test]
    fn symmetric_curve_hits_midpoint() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-4);
    }
}
