#![forbid(unsafe_code)]

//! Packed RGBA colors and the slider's named palette.

/// An 8-bit-per-channel RGBA color packed into a `u32` (`0xRRGGBBAA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(142, 142, 147);
    pub const ORANGE: Self = Self::rgb(255, 149, 0);
    pub const PURPLE: Self = Self::rgb(175, 82, 222);

    /// Opaque color from channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Color from channels with alpha.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    #[must_use]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Raw `0xRRGGBBAA` value.
    #[inline]
    #[must_use]
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Replace alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self((self.0 & 0xFFFF_FF00) | a as u32)
    }

    /// Scale alpha by `opacity` (clamped to `[0, 1]`).
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        let a = (f32::from(self.a()) * opacity).round() as u8;
        self.with_alpha(a)
    }

    /// Linear per-channel interpolation; `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Self::rgba(
            mix(self.r(), other.r()),
            mix(self.g(), other.g()),
            mix(self.b(), other.b()),
            mix(self.a(), other.a()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_round_trip() {
        let c = Color::rgba(12, 34, 56, 78);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (12, 34, 56, 78));
        assert_eq!(c.packed(), 0x0C22_384E);
    }

    #[test]
    fn rgb_defaults_to_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).a(), 255);
    }

    #[test]
    fn with_opacity_scales_alpha() {
        let c = Color::BLACK.with_opacity(0.9);
        assert_eq!(c.a(), 230);
        assert_eq!(c.r(), 0);
        assert_eq!(Color::WHITE.with_opacity(0.0).a(), 0);
        assert_eq!(Color::WHITE.with_opacity(4.0).a(), 255);
        assert_eq!(Color::WHITE.with_opacity(f32::NAN).a(), 0);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(200, 100, 50);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Color::rgb(100, 50, 25));
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn palette_is_opaque() {
        for c in [Color::GRAY, Color::ORANGE, Color::PURPLE, Color::WHITE] {
            assert_eq!(c.a(), 255);
        }
        assert_eq!(Color::TRANSPARENT.a(), 0);
    }
}
