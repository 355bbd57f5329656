#![forbid(unsafe_code)]

//! Geometric primitives and track geometry.
//!
//! Coordinates are logical points along the track's own frame: `x = 0` is the
//! leading edge of the track, `y = 0` its top.

/// Default thumb diameter in points.
pub const DEFAULT_THUMB_DIAMETER: f64 = 60.0;

/// A 2D point in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if the rectangle has zero or negative area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether `x` lies within `[left, right)`.
    #[inline]
    #[must_use]
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.x && x < self.right()
    }
}

/// Track width and thumb diameter for one layout pass.
///
/// The thumb travels from `x = 0` to `x = track_width - thumb_diameter`.
/// Widths at or below the thumb diameter are degenerate: travel is zero and
/// every ratio maps to the leading edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    track_width: f64,
    thumb_diameter: f64,
}

impl TrackGeometry {
    /// Create a geometry. Negative or non-finite inputs collapse to zero.
    #[must_use]
    pub fn new(track_width: f64, thumb_diameter: f64) -> Self {
        Self {
            track_width: sanitize(track_width),
            thumb_diameter: sanitize(thumb_diameter),
        }
    }

    /// Measured width of the track.
    #[inline]
    #[must_use]
    pub const fn track_width(&self) -> f64 {
        self.track_width
    }

    /// Thumb diameter ("length").
    #[inline]
    #[must_use]
    pub const fn thumb_diameter(&self) -> f64 {
        self.thumb_diameter
    }

    /// Usable travel: `track_width - thumb_diameter`. May be zero or negative.
    #[inline]
    #[must_use]
    pub fn travel(&self) -> f64 {
        self.track_width - self.thumb_diameter
    }

    /// Whether the thumb cannot move (`travel <= 0`).
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.travel() <= 0.0
    }

    /// Leading edge of the thumb for a given ratio.
    #[must_use]
    pub fn thumb_offset(&self, ratio: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        self.travel() * ratio
    }

    /// Width of the filled (active) part of the track: the thumb plus
    /// everything to its left.
    #[must_use]
    pub fn active_width(&self, ratio: f64) -> f64 {
        self.thumb_offset(ratio) + self.thumb_diameter
    }

    /// Bounding square of the thumb for a given ratio.
    #[must_use]
    pub fn thumb_rect(&self, ratio: f64) -> Rect {
        Rect::new(
            self.thumb_offset(ratio),
            0.0,
            self.thumb_diameter,
            self.thumb_diameter,
        )
    }

    /// Whole track bounds; the control is one thumb diameter tall.
    #[must_use]
    pub fn track_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.track_width, self.thumb_diameter)
    }
}

impl Default for TrackGeometry {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_THUMB_DIAMETER)
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}
