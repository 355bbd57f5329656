#![forbid(unsafe_code)]

//! Slider styling: per-part paint overrides and the "Off" overlay label.
//!
//! Every part (active track, passive track, thumb) takes an optional color
//! and an optional gradient. Nothing is resolved until render time, where
//! [`Fill::resolve`] applies color, then gradient, then the part's default.
//!
//! # Example
//!
//! ```
//! use vslider_style::{Color, Fill, LinearGradient, SliderStyle};
//!
//! let style = SliderStyle::new(Color::WHITE)
//!     .active_gradient(LinearGradient::horizontal(Color::ORANGE, Color::PURPLE))
//!     .thumb_color(Color::WHITE);
//!
//! assert!(style.active_fill().is_gradient());
//! assert_eq!(style.passive_fill(), Fill::Solid(Color::GRAY));
//! ```

use crate::color::Color;
use crate::fill::Fill;
use crate::gradient::LinearGradient;

/// Active track fill when neither color nor gradient is set.
pub const DEFAULT_ACTIVE_COLOR: Color = Color::ORANGE;
/// Passive track fill when neither color nor gradient is set.
pub const DEFAULT_PASSIVE_COLOR: Color = Color::GRAY;
/// Thumb fill when neither color nor gradient is set.
pub const DEFAULT_THUMB_COLOR: Color = Color::PURPLE;

/// Font weight for overlay text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    Regular,
    #[default]
    Medium,
    Semibold,
    Bold,
}

/// Drop shadow behind text.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    pub color: Color,
    pub radius: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Color::BLACK.with_opacity(0.9),
            radius: 2.0,
            offset_x: 1.0,
            offset_y: 1.0,
        }
    }
}

/// The label shown over the track when the value is at or below zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffLabelStyle {
    pub text: String,
    pub color: Color,
    pub shadow: Shadow,
    pub font_size: f64,
    pub font_weight: FontWeight,
    /// Horizontal padding from the track's leading edge.
    pub padding: f64,
}

impl OffLabelStyle {
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }

    #[must_use]
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }
}

impl Default for OffLabelStyle {
    fn default() -> Self {
        Self {
            text: "Off".to_owned(),
            color: Color::WHITE,
            shadow: Shadow::default(),
            font_size: 18.0,
            font_weight: FontWeight::Medium,
            padding: 30.0,
        }
    }
}

/// Visual configuration for a volume slider.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderStyle {
    pub active_color: Option<Color>,
    pub active_gradient: Option<LinearGradient>,
    pub passive_color: Option<Color>,
    pub passive_gradient: Option<LinearGradient>,
    pub thumb_color: Option<Color>,
    pub thumb_gradient: Option<LinearGradient>,
    /// Icon color.
    pub text_color: Color,
    pub off_label: OffLabelStyle,
}

impl SliderStyle {
    /// Style with the default palette; `text_color` is always required.
    #[must_use]
    pub fn new(text_color: Color) -> Self {
        Self {
            active_color: None,
            active_gradient: None,
            passive_color: None,
            passive_gradient: None,
            thumb_color: None,
            thumb_gradient: None,
            text_color,
            off_label: OffLabelStyle::default(),
        }
    }

    #[must_use]
    pub fn active_color(mut self, color: Color) -> Self {
        self.active_color = Some(color);
        self
    }

    #[must_use]
    pub fn active_gradient(mut self, gradient: LinearGradient) -> Self {
        self.active_gradient = Some(gradient);
        self
    }

    #[must_use]
    pub fn passive_color(mut self, color: Color) -> Self {
        self.passive_color = Some(color);
        self
    }

    #[must_use]
    pub fn passive_gradient(mut self, gradient: LinearGradient) -> Self {
        self.passive_gradient = Some(gradient);
        self
    }

    #[must_use]
    pub fn thumb_color(mut self, color: Color) -> Self {
        self.thumb_color = Some(color);
        self
    }

    #[must_use]
    pub fn thumb_gradient(mut self, gradient: LinearGradient) -> Self {
        self.thumb_gradient = Some(gradient);
        self
    }

    #[must_use]
    pub fn off_label(mut self, label: OffLabelStyle) -> Self {
        self.off_label = label;
        self
    }

    #[must_use]
    pub fn active_fill(&self) -> Fill {
        Fill::resolve(
            self.active_color,
            self.active_gradient.as_ref(),
            DEFAULT_ACTIVE_COLOR,
        )
    }

    #[must_use]
    pub fn passive_fill(&self) -> Fill {
        Fill::resolve(
            self.passive_color,
            self.passive_gradient.as_ref(),
            DEFAULT_PASSIVE_COLOR,
        )
    }

    #[must_use]
    pub fn thumb_fill(&self) -> Fill {
        Fill::resolve(
            self.thumb_color,
            self.thumb_gradient.as_ref(),
            DEFAULT_THUMB_COLOR,
        )
    }
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}
