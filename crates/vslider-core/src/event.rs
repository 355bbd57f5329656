#![forbid(unsafe_code)]

//! Events consumed by the slider.
//!
//! The host's gesture system recognizes two overlapping regions: the thumb
//! and the whole track. Both report drag changes and drag ends tagged with
//! their [`GestureRegion`]; layout and visibility arrive as their own events.
//!
//! Coordinates are horizontal positions in track space (see
//! [`geometry`](crate::geometry)).

/// Which gesture recognizer produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureRegion {
    /// The thumb's own drag gesture. Only establishes the grab anchor.
    Thumb,
    /// The full-track drag gesture. Moves the value.
    Track,
}

/// A drag-changed report from one gesture region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    /// Region that recognized the drag.
    pub region: GestureRegion,
    /// Where the pointer went down.
    pub start_x: f64,
    /// Where the pointer is now.
    pub location_x: f64,
}

impl DragEvent {
    /// Create a drag event.
    #[must_use]
    pub const fn new(region: GestureRegion, start_x: f64, location_x: f64) -> Self {
        Self {
            region,
            start_x,
            location_x,
        }
    }

    /// Thumb-region drag.
    #[must_use]
    pub const fn thumb(start_x: f64, location_x: f64) -> Self {
        Self::new(GestureRegion::Thumb, start_x, location_x)
    }

    /// Track-region drag.
    #[must_use]
    pub const fn track(start_x: f64, location_x: f64) -> Self {
        Self::new(GestureRegion::Track, start_x, location_x)
    }

    /// Horizontal distance moved since the press.
    #[inline]
    #[must_use]
    pub fn translation(&self) -> f64 {
        self.location_x - self.start_x
    }

    /// Whether both coordinates are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.start_x.is_finite() && self.location_x.is_finite()
    }
}

/// Everything the slider reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// The control became visible.
    Appeared,
    /// The control left the view hierarchy.
    Disappeared,
    /// Layout measured a new track width.
    Resized { width: f64 },
    /// A gesture region reported movement.
    DragChanged(DragEvent),
    /// A gesture region reported release.
    DragEnded { region: GestureRegion },
}

impl From<DragEvent> for SliderEvent {
    fn from(event: DragEvent) -> Self {
        Self::DragChanged(event)
    }
}
