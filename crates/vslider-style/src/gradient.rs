#![forbid(unsafe_code)]

//! Linear gradients.
//!
//! A [`LinearGradient`] runs from `start` to `end`, both in unit space of the
//! shape it fills (`(0, 0)` top-leading, `(1, 1)` bottom-trailing). Stops are
//! kept sorted by offset; [`sample`](LinearGradient::sample) interpolates
//! between neighbors for renderers that rasterize the fill themselves.

use std::fmt;

use crate::color::Color;

/// Error returned when a gradient cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientError {
    /// No stops were given.
    Empty,
    /// A stop offset is outside `[0, 1]` or not finite.
    OffsetOutOfRange { offset: f32 },
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "gradient needs at least one stop"),
            Self::OffsetOutOfRange { offset } => {
                write!(f, "gradient stop offset {offset} outside 0..=1")
            }
        }
    }
}

impl std::error::Error for GradientError {}

/// A point in unit space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitPoint {
    pub x: f32,
    pub y: f32,
}

impl UnitPoint {
    pub const LEADING: Self = Self::new(0.0, 0.5);
    pub const TRAILING: Self = Self::new(1.0, 0.5);
    pub const TOP: Self = Self::new(0.5, 0.0);
    pub const BOTTOM: Self = Self::new(0.5, 1.0);

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One color stop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    pub color: Color,
    pub offset: f32,
}

impl GradientStop {
    #[must_use]
    pub const fn new(color: Color, offset: f32) -> Self {
        Self { color, offset }
    }
}

/// A multi-stop linear gradient.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearGradient {
    stops: Vec<GradientStop>,
    start: UnitPoint,
    end: UnitPoint,
}

impl LinearGradient {
    /// Create a gradient from explicit stops. Stops are sorted by offset.
    pub fn new(
        stops: impl IntoIterator<Item = GradientStop>,
        start: UnitPoint,
        end: UnitPoint,
    ) -> Result<Self, GradientError> {
        let mut stops: Vec<GradientStop> = stops.into_iter().collect();
        if stops.is_empty() {
            return Err(GradientError::Empty);
        }
        if let Some(bad) = stops
            .iter()
            .find(|s| !s.offset.is_finite() || !(0.0..=1.0).contains(&s.offset))
        {
            return Err(GradientError::OffsetOutOfRange { offset: bad.offset });
        }
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Ok(Self { stops, start, end })
    }

    /// Spread colors evenly from offset 0 to 1.
    pub fn evenly(
        colors: impl IntoIterator<Item = Color>,
        start: UnitPoint,
        end: UnitPoint,
    ) -> Result<Self, GradientError> {
        let colors: Vec<Color> = colors.into_iter().collect();
        let last = colors.len().saturating_sub(1).max(1) as f32;
        Self::new(
            colors
                .into_iter()
                .enumerate()
                .map(|(i, c)| GradientStop::new(c, i as f32 / last)),
            start,
            end,
        )
    }

    /// Leading-to-trailing gradient between two colors.
    #[must_use]
    pub fn horizontal(from: Color, to: Color) -> Self {
        Self {
            stops: vec![GradientStop::new(from, 0.0), GradientStop::new(to, 1.0)],
            start: UnitPoint::LEADING,
            end: UnitPoint::TRAILING,
        }
    }

    #[must_use]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    #[must_use]
    pub fn start(&self) -> UnitPoint {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> UnitPoint {
        self.end
    }

    /// Sample the gradient at position `t` (0.0 to 1.0) along its axis.
    #[must_use]
    pub fn sample(&self, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Color::TRANSPARENT,
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t >= a.offset && t <= b.offset {
                let span = b.offset - a.offset;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return a.color.lerp(b.color, f64::from((t - a.offset) / span));
            }
        }
        last.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rejected() {
        let err = LinearGradient::new([], UnitPoint::LEADING, UnitPoint::TRAILING).unwrap_err();
        assert_eq!(err, GradientError::Empty);
        assert_eq!(err.to_string(), "gradient needs at least one stop");
        assert_eq!(
            LinearGradient::evenly([], UnitPoint::TOP, UnitPoint::BOTTOM),
            Err(GradientError::Empty)
        );
    }

    #[test]
    fn out_of_range_offset_rejected() {
        let err = LinearGradient::new(
            [GradientStop::new(Color::WHITE, 1.5)],
            UnitPoint::LEADING,
            UnitPoint::TRAILING,
        )
        .unwrap_err();
        assert_eq!(err, GradientError::OffsetOutOfRange { offset: 1.5 });

        assert!(
            LinearGradient::new(
                [GradientStop::new(Color::WHITE, f32::NAN)],
                UnitPoint::LEADING,
                UnitPoint::TRAILING,
            )
            .is_err()
        );
    }

    #[test]
    fn stops_are_sorted() {
        let g = LinearGradient::new(
            [
                GradientStop::new(Color::WHITE, 1.0),
                GradientStop::new(Color::BLACK, 0.0),
            ],
            UnitPoint::LEADING,
            UnitPoint::TRAILING,
        )
        .unwrap();
        assert_eq!(g.stops()[0].color, Color::BLACK);
        assert_eq!(g.stops()[1].color, Color::WHITE);
    }

    #[test]
    fn evenly_spaces_offsets() {
        let g = LinearGradient::evenly(
            [Color::ORANGE, Color::PURPLE, Color::GRAY],
            UnitPoint::TOP,
            UnitPoint::BOTTOM,
        )
        .unwrap();
        let offsets: Vec<f32> = g.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
        assert_eq!(g.start(), UnitPoint::TOP);
        assert_eq!(g.end(), UnitPoint::BOTTOM);
    }

    #[test]
    fn single_color_evenly_sits_at_zero() {
        let g = LinearGradient::evenly([Color::ORANGE], UnitPoint::TOP, UnitPoint::BOTTOM).unwrap();
        assert_eq!(g.stops()[0].offset, 0.0);
        assert_eq!(g.sample(0.7), Color::ORANGE);
    }

    #[test]
    fn sample_interpolates_and_clamps() {
        let g = LinearGradient::horizontal(Color::rgb(0, 0, 0), Color::rgb(100, 200, 50));
        assert_eq!(g.sample(0.0), Color::rgb(0, 0, 0));
        assert_eq!(g.sample(1.0), Color::rgb(100, 200, 50));
        assert_eq!(g.sample(0.5), Color::rgb(50, 100, 25));
        assert_eq!(g.sample(-3.0), Color::rgb(0, 0, 0));
        assert_eq!(g.sample(9.0), Color::rgb(100, 200, 50));
    }

    #[test]
    fn sample_between_inner_stops() {
        let g = LinearGradient::new(
            [
                GradientStop::new(Color::rgb(0, 0, 0), 0.2),
                GradientStop::new(Color::rgb(100, 100, 100), 0.6),
            ],
            UnitPoint::LEADING,
            UnitPoint::TRAILING,
        )
        .unwrap();
        assert_eq!(g.sample(0.1), Color::rgb(0, 0, 0));
        assert_eq!(g.sample(0.4), Color::rgb(50, 50, 50));
        assert_eq!(g.sample(0.8), Color::rgb(100, 100, 100));
    }
}
