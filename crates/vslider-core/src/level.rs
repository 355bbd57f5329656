#![forbid(unsafe_code)]

//! Volume level classification for the thumb icon.
//!
//! The level is a pure function of the bound value. Thresholds are absolute
//! (`0.33`, `0.66`), not fractions of the upper bound: a `0..=100` slider
//! reads `High` from `0.66` upward.

use crate::numeric::SliderFloat;

/// Lower edge of the `Medium` band.
pub const MEDIUM_THRESHOLD: f64 = 0.33;
/// Lower edge of the `High` band.
pub const HIGH_THRESHOLD: f64 = 0.66;

/// Coarse loudness bucket shown on the thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeLevel {
    Muted,
    Low,
    Medium,
    High,
}

impl VolumeLevel {
    /// Classify a value.
    ///
    /// Exactly zero is `Muted`. Positive values below `0.33` are `Low`,
    /// below `0.66` are `Medium`. Everything else is `High`, including
    /// negative readings from bounds that extend below zero, and NaN.
    #[must_use]
    pub fn from_value<V: SliderFloat>(value: V) -> Self {
        let v = value.to_f64();
        if v == 0.0 {
            Self::Muted
        } else if v > 0.0 && v < MEDIUM_THRESHOLD {
            Self::Low
        } else if v < HIGH_THRESHOLD {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Symbol name for the icon.
    #[must_use]
    pub const fn icon_name(self) -> &'static str {
        match self {
            Self::Muted => "speaker.slash.fill",
            Self::Low => "speaker.wave.1.fill",
            Self::Medium => "speaker.wave.2.fill",
            Self::High => "speaker.wave.3.fill",
        }
    }

    /// Whether this is the muted icon.
    #[inline]
    #[must_use]
    pub const fn is_muted(self) -> bool {
        matches!(self, Self::Muted)
    }
}
