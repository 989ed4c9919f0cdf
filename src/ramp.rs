//! Scalar-to-color ramp.
//!
//! A [`ColorRamp`] is an ordered list of stops, each pairing a position
//! in [0, 1] with a color and an interpolation mode. Lookups clamp the
//! query position and interpolate between the two bracketing stops; the
//! segment between two stops uses the lower stop's interpolation mode.

use crate::color::Rgb;
use crate::error::CurvatureError;

/// How a ramp segment interpolates toward the next stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RampInterpolation {
    /// Hold the stop's color until the next stop.
    Step,
    /// Linear blend.
    #[default]
    Linear,
    /// Smoothstep blend (eased at both ends).
    Smooth,
}

/// One ramp stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampStop {
    /// Position in [0, 1].
    pub position: f32,
    /// Color at this position.
    pub color: Rgb,
    /// Interpolation toward the next stop.
    pub interpolation: RampInterpolation,
}

impl RampStop {
    /// Create a linear stop.
    pub const fn new(position: f32, color: Rgb) -> Self {
        Self {
            position,
            color,
            interpolation: RampInterpolation::Linear,
        }
    }

    /// Set the interpolation mode.
    #[must_use]
    pub const fn with_interpolation(mut self, interpolation: RampInterpolation) -> Self {
        self.interpolation = interpolation;
        self
    }
}

/// An ordered scalar-to-color interpolation table.
///
/// Holds at least one stop; stops are kept sorted by position.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<RampStop>,
}

impl ColorRamp {
    /// Create a ramp from a stop list.
    ///
    /// Stops are sorted by position. An empty list is rejected with
    /// [`CurvatureError::EmptyRamp`].
    pub fn new(mut stops: Vec<RampStop>) -> Result<Self, CurvatureError> {
        if stops.is_empty() {
            return Err(CurvatureError::EmptyRamp);
        }
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Ok(Self { stops })
    }

    /// The stops, sorted by position.
    pub fn stops(&self) -> &[RampStop] {
        &self.stops
    }

    /// Look up the interpolated color at `position`.
    ///
    /// The position is clamped to [0, 1]. Positions outside the first and
    /// last stop take that stop's color; a single-stop ramp is constant.
    pub fn color_at(&self, position: f32) -> Rgb {
        let p = position.clamp(0.0, 1.0);

        let first = self.stops[0];
        if p <= first.position {
            return first.color;
        }
        let last = self.stops[self.stops.len() - 1];
        if p >= last.position {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if p <= b.position {
                let span = b.position - a.position;
                if span <= 0.0 {
                    return b.color;
                }
                let t = (p - a.position) / span;
                return match a.interpolation {
                    RampInterpolation::Step => a.color,
                    RampInterpolation::Linear => a.color.lerp(b.color, t),
                    RampInterpolation::Smooth => a.color.lerp(b.color, t * t * (3.0 - 2.0 * t)),
                };
            }
        }
        last.color
    }
}

/// The factory map: blue through green to red, all linear.
impl Default for ColorRamp {
    fn default() -> Self {
        Self {
            stops: vec![
                RampStop::new(0.0, Rgb::new(0.0, 0.0, 1.0)),
                RampStop::new(0.5, Rgb::new(0.0, 1.0, 0.0)),
                RampStop::new(1.0, Rgb::new(1.0, 0.0, 0.0)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, Rgb::new(0.0, 0.0, 1.0))]
    #[case(0.25, Rgb::new(0.0, 0.5, 0.5))]
    #[case(0.5, Rgb::new(0.0, 1.0, 0.0))]
    #[case(0.75, Rgb::new(0.5, 0.5, 0.0))]
    #[case(1.0, Rgb::new(1.0, 0.0, 0.0))]
    fn default_ramp_interpolates(#[case] position: f32, #[case] expected: Rgb) {
        let ramp = ColorRamp::default();
        let color = ramp.color_at(position);
        assert!((color.r - expected.r).abs() < 1e-6);
        assert!((color.g - expected.g).abs() < 1e-6);
        assert!((color.b - expected.b).abs() < 1e-6);
    }

    #[test]
    fn empty_ramp_is_rejected() {
        assert_eq!(ColorRamp::new(vec![]), Err(CurvatureError::EmptyRamp));
    }

    #[test]
    fn single_stop_is_constant() {
        let ramp = ColorRamp::new(vec![RampStop::new(0.3, Rgb::new(0.2, 0.4, 0.6))]).unwrap();
        assert_eq!(ramp.color_at(0.0), Rgb::new(0.2, 0.4, 0.6));
        assert_eq!(ramp.color_at(0.3), Rgb::new(0.2, 0.4, 0.6));
        assert_eq!(ramp.color_at(1.0), Rgb::new(0.2, 0.4, 0.6));
    }

    #[test]
    fn lookup_clamps_out_of_range_positions() {
        let ramp = ColorRamp::default();
        assert_eq!(ramp.color_at(-2.0), Rgb::new(0.0, 0.0, 1.0));
        assert_eq!(ramp.color_at(3.0), Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn stops_are_sorted_on_construction() {
        let ramp = ColorRamp::new(vec![
            RampStop::new(1.0, Rgb::new(1.0, 0.0, 0.0)),
            RampStop::new(0.0, Rgb::new(0.0, 0.0, 1.0)),
        ])
        .unwrap();
        assert_eq!(ramp.stops()[0].position, 0.0);
        assert_eq!(ramp.color_at(0.0), Rgb::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn step_segment_holds_lower_stop() {
        let ramp = ColorRamp::new(vec![
            RampStop::new(0.0, Rgb::new(0.0, 0.0, 1.0)).with_interpolation(RampInterpolation::Step),
            RampStop::new(1.0, Rgb::new(1.0, 0.0, 0.0)),
        ])
        .unwrap();
        assert_eq!(ramp.color_at(0.99), Rgb::new(0.0, 0.0, 1.0));
        assert_eq!(ramp.color_at(1.0), Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn smooth_segment_eases_toward_ends() {
        let ramp = ColorRamp::new(vec![
            RampStop::new(0.0, Rgb::new(0.0, 0.0, 0.0))
                .with_interpolation(RampInterpolation::Smooth),
            RampStop::new(1.0, Rgb::new(1.0, 1.0, 1.0)),
        ])
        .unwrap();
        // smoothstep(0.25) = 0.15625, below the linear 0.25
        let color = ramp.color_at(0.25);
        assert!((color.r - 0.15625).abs() < 1e-6);
        assert!(color.r < 0.25);
    }

    #[test]
    fn coincident_stops_do_not_divide_by_zero() {
        let ramp = ColorRamp::new(vec![
            RampStop::new(0.0, Rgb::new(0.0, 0.0, 1.0)),
            RampStop::new(0.5, Rgb::new(0.0, 1.0, 0.0)),
            RampStop::new(0.5, Rgb::new(1.0, 1.0, 0.0)),
            RampStop::new(1.0, Rgb::new(1.0, 0.0, 0.0)),
        ])
        .unwrap();
        // The first segment ending at 0.5 wins; t = 1 lands on its upper stop.
        assert_eq!(ramp.color_at(0.5), Rgb::new(0.0, 1.0, 0.0));
        let above = ramp.color_at(0.6);
        assert!(above.r.is_finite() && above.g.is_finite() && above.b.is_finite());
    }
}
