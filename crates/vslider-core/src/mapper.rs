#![forbid(unsafe_code)]

//! Gesture-to-value mapping: turns drag events into a clamped, quantized
//! ratio and writes the matching domain value to the host binding.
//!
//! [`GestureValueMapper`] is a small stateful processor. Feed it
//! [`SliderEvent`]s through [`handle`](GestureValueMapper::handle), or call the
//! individual transitions directly.
//!
//! # State Machine
//!
//! One drag session moves through two phases:
//!
//! - **Idle**: no anchor.
//! - **ThumbGrabbed**: an anchor records where inside the thumb the pointer
//!   went down, so the grabbed point stays under the pointer while dragging.
//!
//! The thumb region only establishes the anchor; it never moves the value.
//! The track region moves the value. A track drag that arrives while idle
//! adopts its own start location as the anchor, which is what makes
//! tap-to-seek work anywhere on the track.
//!
//! # Invariants
//!
//! 1. `0 <= ratio <= 1` after every transition.
//! 2. The anchor, when present, is finite. Drag end from either region clears
//!    it, so it never survives into the next session.
//! 3. Replaying the same drag update is a no-op for ratio and value.
//! 4. A degenerate track (`width <= thumb diameter`) or an empty bounds span
//!    yields ratio 0 and writes `lower`; nothing divides by zero.
//!
//! # Failure Modes
//!
//! - Non-finite coordinates are dropped ([`MapperResponse::Ignored`]) without
//!   touching state.
//! - Drag end does not roll back values already written.

use crate::binding::ValueBinding;
use crate::bounds::{Bounds, Step};
use crate::event::{DragEvent, GestureRegion, SliderEvent};
use crate::geometry::{DEFAULT_THUMB_DIAMETER, TrackGeometry};
use crate::numeric::SliderFloat;

/// Relative tolerance used when snapping to step multiples.
///
/// `1.0 % 0.1` is `0.0999..95` in binary floating point; without a tolerance
/// the maximum would snap down a whole step.
const SNAP_TOLERANCE: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Layout constants for the mapper.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    /// Diameter of the circular thumb (default: 60).
    pub thumb_diameter: f64,
}

impl SliderConfig {
    /// Set the thumb diameter.
    #[must_use]
    pub fn thumb_diameter(mut self, diameter: f64) -> Self {
        self.thumb_diameter = diameter;
        self
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            thumb_diameter: DEFAULT_THUMB_DIAMETER,
        }
    }
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Drag session phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    Idle,
    ThumbGrabbed { anchor: f64 },
}

/// What a processed event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapperResponse<V> {
    /// Nothing changed.
    Ignored,
    /// The ratio was initialized from the bound value.
    Initialized { ratio: f64 },
    /// The appearance lifecycle was re-armed.
    Disappeared,
    /// The track width changed.
    Resized { width: f64 },
    /// A thumb grab set the anchor.
    Anchored { anchor: f64 },
    /// A track drag moved the thumb and wrote `value`.
    ValueChanged { ratio: f64, value: V },
    /// A drag ended and the anchor was cleared.
    Released,
}

// ---------------------------------------------------------------------------
// GestureValueMapper
// ---------------------------------------------------------------------------

/// Stateful mapper from drag gestures to a bounded value.
pub struct GestureValueMapper<V> {
    config: SliderConfig,
    bounds: Bounds<V>,
    step: Step<V>,
    track_width: f64,
    ratio: f64,
    anchor: Option<f64>,
    appeared: bool,
}

impl<V: SliderFloat> std::fmt::Debug for GestureValueMapper<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureValueMapper")
            .field("ratio", &self.ratio)
            .field("anchor", &self.anchor)
            .field("track_width", &self.track_width)
            .finish()
    }
}

impl<V: SliderFloat> GestureValueMapper<V> {
    /// Create a mapper over `bounds` with the given step.
    #[must_use]
    pub fn new(bounds: Bounds<V>, step: Step<V>) -> Self {
        Self::with_config(bounds, step, SliderConfig::default())
    }

    /// Create a mapper with explicit layout configuration.
    #[must_use]
    pub fn with_config(bounds: Bounds<V>, step: Step<V>, config: SliderConfig) -> Self {
        Self {
            config,
            bounds,
            step,
            track_width: 0.0,
            ratio: 0.0,
            anchor: None,
            appeared: false,
        }
    }

    /// Process one event against the host binding.
    pub fn handle<B: ValueBinding<V>>(
        &mut self,
        event: &SliderEvent,
        binding: &mut B,
    ) -> MapperResponse<V> {
        match *event {
            SliderEvent::Appeared => {
                if self.appear(&*binding) {
                    MapperResponse::Initialized { ratio: self.ratio }
                } else {
                    MapperResponse::Ignored
                }
            }
            SliderEvent::Disappeared => {
                self.disappear();
                MapperResponse::Disappeared
            }
            SliderEvent::Resized { width } => {
                self.set_track_width(width);
                MapperResponse::Resized {
                    width: self.track_width,
                }
            }
            SliderEvent::DragChanged(drag) => self.drag_changed(&drag, binding),
            SliderEvent::DragEnded { .. } => {
                self.end_drag();
                MapperResponse::Released
            }
        }
    }

    /// Route a drag-changed report by region.
    pub fn drag_changed<B: ValueBinding<V>>(
        &mut self,
        drag: &DragEvent,
        binding: &mut B,
    ) -> MapperResponse<V> {
        if !drag.is_finite() {
            return MapperResponse::Ignored;
        }
        match drag.region {
            GestureRegion::Thumb => match self.begin_thumb_grab(drag.start_x) {
                Some(anchor) => MapperResponse::Anchored { anchor },
                None => MapperResponse::Ignored,
            },
            GestureRegion::Track => {
                let anchor = self.anchor.unwrap_or(drag.start_x);
                let value = self.drag_to(anchor, drag.location_x, binding);
                MapperResponse::ValueChanged {
                    ratio: self.ratio,
                    value,
                }
            }
        }
    }

    /// Initialize the ratio from the bound value.
    ///
    /// Runs once per appearance; returns `false` if the control was already
    /// initialized and [`disappear`](Self::disappear) has not been called.
    pub fn appear<B: ValueBinding<V>>(&mut self, binding: &B) -> bool {
        if self.appeared {
            return false;
        }
        let value = binding.get();
        self.ratio = self.bounds.ratio_of(value);
        self.appeared = true;
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "slider.appear", value = ?value, ratio = self.ratio);
        true
    }

    /// Mark the control as gone so the next appearance re-reads the value.
    pub fn disappear(&mut self) {
        self.appeared = false;
        self.anchor = None;
    }

    /// Idle → ThumbGrabbed.
    ///
    /// Returns the new anchor, or `None` if a drag is already anchored.
    pub fn begin_thumb_grab(&mut self, press_x: f64) -> Option<f64> {
        if self.anchor.is_some() || !press_x.is_finite() {
            return None;
        }
        let geometry = self.geometry();
        let delta = press_x - geometry.thumb_offset(self.ratio);
        let anchor = if press_x > geometry.thumb_diameter() && delta > 0.0 {
            delta
        } else {
            press_x
        };
        self.anchor = Some(anchor);
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "slider.grab", press_x, anchor);
        Some(anchor)
    }

    /// Move the grabbed point to `location_x` and write the value.
    ///
    /// With no anchor, `location_x` doubles as the anchor, the same way an
    /// unanchored track drag adopts its start location.
    pub fn drag_update<B: ValueBinding<V>>(&mut self, location_x: f64, binding: &mut B) -> V {
        let anchor = self.anchor.unwrap_or(location_x);
        self.drag_to(anchor, location_x, binding)
    }

    /// ThumbGrabbed → Idle.
    pub fn end_drag(&mut self) {
        #[cfg(feature = "tracing")]
        if let Some(anchor) = self.anchor {
            tracing::debug!(message = "slider.release", anchor, ratio = self.ratio);
        }
        self.anchor = None;
    }

    /// Drop all session state and return to idle at ratio 0.
    pub fn reset(&mut self) {
        self.ratio = 0.0;
        self.anchor = None;
        self.appeared = false;
    }

    /// Record the measured track width.
    pub fn set_track_width(&mut self, width: f64) {
        self.track_width = TrackGeometry::new(width, self.config.thumb_diameter).track_width();
    }

    /// Current geometry.
    #[must_use]
    pub fn geometry(&self) -> TrackGeometry {
        TrackGeometry::new(self.track_width, self.config.thumb_diameter)
    }

    /// Normalized thumb position.
    #[inline]
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Domain value corresponding to the current ratio.
    #[must_use]
    pub fn value(&self) -> V {
        self.bounds.value_at(self.ratio)
    }

    /// Current drag anchor.
    #[inline]
    #[must_use]
    pub fn anchor(&self) -> Option<f64> {
        self.anchor
    }

    /// Current phase of the drag session.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match self.anchor {
            Some(anchor) => DragPhase::ThumbGrabbed { anchor },
            None => DragPhase::Idle,
        }
    }

    /// Whether a drag session is in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Whether the ratio has been initialized for the current appearance.
    #[inline]
    #[must_use]
    pub fn has_appeared(&self) -> bool {
        self.appeared
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> &Bounds<V> {
        &self.bounds
    }

    #[inline]
    #[must_use]
    pub fn step(&self) -> Step<V> {
        self.step
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }
}

// ---------------------------------------------------------------------------
// Update algorithm
// ---------------------------------------------------------------------------

impl<V: SliderFloat> GestureValueMapper<V> {
    fn drag_to<B: ValueBinding<V>>(&mut self, anchor: f64, location_x: f64, binding: &mut B) -> V {
        let geometry = self.geometry();
        let length = geometry.thumb_diameter();
        let x = anchor.max(0.0).min(length);
        self.anchor = Some(x);

        let mut point = location_x - x;
        let delta = geometry.travel();

        // Pin at either end and re-anchor so reversing direction responds
        // immediately.
        if point < 0.0 {
            self.anchor = Some(location_x);
            point = 0.0;
        } else if point > delta {
            self.anchor = Some(location_x - delta);
            point = delta;
        }

        let mut ratio = if delta > 0.0 { point / delta } else { 0.0 };
        if let Some(unit) = self.step.ratio_unit(&self.bounds) {
            ratio = snap_toward_zero(ratio, unit);
        }
        self.ratio = ratio.clamp(0.0, 1.0);

        let value = self.bounds.value_at(self.ratio);
        binding.set(value);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "slider.drag",
            location_x,
            anchor = ?self.anchor,
            ratio = self.ratio
        );
        value
    }
}

/// Subtract `ratio mod unit` (sign of dividend), snapping toward zero.
///
/// A remainder within [`SNAP_TOLERANCE`] of a whole unit counts as an exact
/// multiple.
#[must_use]
pub fn snap_toward_zero(ratio: f64, unit: f64) -> f64 {
    if unit.is_nan() || unit <= 0.0 || !ratio.is_finite() {
        return ratio;
    }
    let remainder = ratio % unit;
    if remainder == 0.0 {
        return ratio;
    }
    let snapped = ratio - remainder;
    if unit - remainder.abs() <= unit * SNAP_TOLERANCE {
        snapped + unit.copysign(ratio)
    } else {
        snapped
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
