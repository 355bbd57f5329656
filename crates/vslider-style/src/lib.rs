#![forbid(unsafe_code)]

//! Style types for the vslider volume slider.
//!
//! # Role in vslider
//! `vslider-style` is the shared vocabulary for colors and paint. The widget
//! crate reads a [`SliderStyle`] and resolves each part to a [`Fill`] when it
//! builds a scene, without pulling in any rendering backend.
//!
//! # This crate provides
//! - [`Color`] with the default slider palette.
//! - [`LinearGradient`] with validated, ordered stops.
//! - [`Fill`] and its color > gradient > default resolution.
//! - [`SliderStyle`] and [`OffLabelStyle`] builders.

/// Packed RGBA colors.
pub mod color;
/// Solid and gradient paint.
pub mod fill;
/// Linear gradients.
pub mod gradient;
/// Slider style configuration.
pub mod style;

pub use color::Color;
pub use fill::Fill;
pub use gradient::{GradientError, GradientStop, LinearGradient, UnitPoint};
pub use style::{
    DEFAULT_ACTIVE_COLOR, DEFAULT_PASSIVE_COLOR, DEFAULT_THUMB_COLOR, FontWeight, OffLabelStyle,
    Shadow, SliderStyle,
};
