#![forbid(unsafe_code)]

//! Real-number abstraction for slider values.
//!
//! The host binds a value of its own floating-point type. Internally every
//! ratio and pixel computation runs in `f64`; [`SliderFloat`] marks the two
//! conversion points between the domain value and that internal space.

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A floating-point type usable as a slider value.
///
/// Implemented for `f32` and `f64`. Sealed: the mapper relies on IEEE-754
/// semantics for its NaN and infinity guards.
pub trait SliderFloat: sealed::Sealed + Copy + PartialOrd + std::fmt::Debug + 'static {
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity; also the "no quantization" step sentinel.
    const ONE: Self;

    /// Widen into the internal ratio space.
    fn to_f64(self) -> f64;

    /// Narrow from the internal ratio space.
    ///
    /// `f32` narrowing rounds to nearest, so a value written back may differ
    /// from the `f64` product in the last ulp of `f32`.
    fn from_f64(value: f64) -> Self;

    /// Whether the value is neither NaN nor infinite.
    fn is_finite(self) -> bool;
}

impl SliderFloat for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl SliderFloat for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}
