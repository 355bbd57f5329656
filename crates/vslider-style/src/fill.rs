#![forbid(unsafe_code)]

//! Paint for one slider part: a solid color or a linear gradient.

use crate::color::Color;
use crate::gradient::LinearGradient;

/// Resolved paint for a shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fill {
    Solid(Color),
    Linear(LinearGradient),
}

impl Fill {
    /// Pick the paint for a part: explicit color, then gradient, then
    /// `default`.
    #[must_use]
    pub fn resolve(
        color: Option<Color>,
        gradient: Option<&LinearGradient>,
        default: Color,
    ) -> Self {
        match (color, gradient) {
            (Some(c), _) => Self::Solid(c),
            (None, Some(g)) => Self::Linear(g.clone()),
            (None, None) => {
                tracing::trace!(
                    message = "fill.default",
                    color = format_args!("{:#010x}", default.packed())
                );
                Self::Solid(default)
            }
        }
    }

    /// Color at position `t` along the fill's axis.
    #[must_use]
    pub fn color_at(&self, t: f32) -> Color {
        match self {
            Self::Solid(c) => *c,
            Self::Linear(g) => g.sample(t),
        }
    }

    #[must_use]
    pub fn is_gradient(&self) -> bool {
        matches!(self, Self::Linear(_))
    }
}

impl From<Color> for Fill {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<LinearGradient> for Fill {
    fn from(gradient: LinearGradient) -> Self {
        Self::Linear(gradient)
    }
}
