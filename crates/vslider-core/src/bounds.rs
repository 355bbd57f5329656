#![forbid(unsafe_code)]

//! Value domain: closed bounds and quantization step.
//!
//! # Invariants
//!
//! 1. `lower <= upper` and both ends are finite ([`Bounds::new`] rejects the rest).
//! 2. A [`Step`] is finite and strictly positive.
//! 3. A step equal to one domain unit (`1`) requests no quantization.

use std::fmt;

use crate::numeric::SliderFloat;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error returned when a bounds range cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundsError {
    /// `lower` is greater than `upper`.
    Inverted { lower: f64, upper: f64 },
    /// One of the ends is NaN or infinite.
    NonFinite,
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted { lower, upper } => {
                write!(f, "inverted bounds: lower {lower} exceeds upper {upper}")
            }
            Self::NonFinite => write!(f, "bounds must be finite"),
        }
    }
}

impl std::error::Error for BoundsError {}

/// Error returned when a quantization step is invalid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepError {
    /// Step is zero or negative.
    NonPositive { step: f64 },
    /// Step is NaN or infinite.
    NonFinite,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { step } => write!(f, "step must be positive, got {step}"),
            Self::NonFinite => write!(f, "step must be finite"),
        }
    }
}

impl std::error::Error for StepError {}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A closed range `[lower, upper]` of slider values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<V> {
    lower: V,
    upper: V,
}

impl<V: SliderFloat> Bounds<V> {
    /// Create a validated range.
    pub fn new(lower: V, upper: V) -> Result<Self, BoundsError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(BoundsError::NonFinite);
        }
        if lower > upper {
            return Err(BoundsError::Inverted {
                lower: lower.to_f64(),
                upper: upper.to_f64(),
            });
        }
        Ok(Self { lower, upper })
    }

    /// The `0..=1` range.
    #[must_use]
    pub fn unit() -> Self {
        Self {
            lower: V::ZERO,
            upper: V::ONE,
        }
    }

    /// Lower end (inclusive).
    #[inline]
    #[must_use]
    pub fn lower(&self) -> V {
        self.lower
    }

    /// Upper end (inclusive).
    #[inline]
    #[must_use]
    pub fn upper(&self) -> V {
        self.upper
    }

    /// `upper - lower` in the internal ratio space.
    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.upper.to_f64() - self.lower.to_f64()
    }

    /// Project a domain value onto `[0, 1]`.
    ///
    /// An empty span (`lower == upper`) and non-finite values project to 0.
    #[must_use]
    pub fn ratio_of(&self, value: V) -> f64 {
        let span = self.span();
        if span <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        let ratio = (value.to_f64() - self.lower.to_f64()) / span;
        if ratio.is_nan() {
            return 0.0;
        }
        ratio.clamp(0.0, 1.0)
    }

    /// Map a ratio back into the domain: `lower + span * ratio`.
    ///
    /// An empty span maps every ratio to `lower`. The result is clamped to the
    /// bounds, so rounding never lands a hair outside them.
    #[must_use]
    pub fn value_at(&self, ratio: f64) -> V {
        let span = self.span();
        if span <= 0.0 || !ratio.is_finite() {
            return self.lower;
        }
        let (lower, upper) = (self.lower.to_f64(), self.upper.to_f64());
        let mut value = lower + span * ratio;
        if !value.is_finite() {
            // Span overflowed f64; interpolate the ends directly.
            value = lower * (1.0 - ratio) + upper * ratio;
        }
        V::from_f64(value.clamp(lower, upper))
    }
}

impl<V: SliderFloat> Default for Bounds<V> {
    fn default() -> Self {
        Self::unit()
    }
}

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// Quantization unit in the bound's own scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<V>(V);

impl<V: SliderFloat> Step<V> {
    /// Create a validated step.
    pub fn new(step: V) -> Result<Self, StepError> {
        if !step.is_finite() {
            return Err(StepError::NonFinite);
        }
        if step <= V::ZERO {
            return Err(StepError::NonPositive {
                step: step.to_f64(),
            });
        }
        Ok(Self(step))
    }

    /// The raw step.
    #[inline]
    #[must_use]
    pub fn get(self) -> V {
        self.0
    }

    /// Whether this step asks for quantization (anything but `1`).
    #[inline]
    #[must_use]
    pub fn quantizes(self) -> bool {
        self.0 != V::ONE
    }

    /// Step size as a fraction of the bounds span.
    ///
    /// Returns `None` when no quantization applies: the step is `1`, or the
    /// span is empty.
    #[must_use]
    pub fn ratio_unit(self, bounds: &Bounds<V>) -> Option<f64> {
        if !self.quantizes() {
            return None;
        }
        let span = bounds.span();
        if span <= 0.0 {
            return None;
        }
        let unit = self.0.to_f64() / span;
        (unit.is_finite() && unit > 0.0).then_some(unit)
    }
}

impl<V: SliderFloat> Default for Step<V> {
    fn default() -> Self {
        Self(V::ONE)
    }
}
