#![forbid(unsafe_code)]

//! vslider public facade crate.
//!
//! This crate provides the stable surface area for hosts. It re-exports the
//! common types from the internal crates and offers a prelude for day-to-day
//! usage.
//!
//! # Example
//!
//! ```
//! use vslider::prelude::*;
//!
//! # fn main() -> vslider::Result<()> {
//! let volume = ValueCell::new(40.0_f64);
//! let mut slider = VolumeSlider::new(volume.clone(), Bounds::new(0.0, 100.0)?, Step::new(5.0)?)
//!     .style(SliderStyle::new(Color::WHITE).thumb_color(Color::ORANGE));
//!
//! slider.resize(300.0);
//! slider.appear();
//! slider.pointer_moved(200.0, 250.0);
//! slider.pointer_released();
//!
//! // The track tap lands near 79.2 and snaps down to the 5-unit grid.
//! assert!((volume.get() - 75.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use vslider_core::binding::{FnBinding, ValueBinding, ValueCell};
pub use vslider_core::bounds::{Bounds, BoundsError, Step, StepError};
pub use vslider_core::event::{DragEvent, GestureRegion, SliderEvent};
pub use vslider_core::geometry::{DEFAULT_THUMB_DIAMETER, Point, Rect, TrackGeometry};
pub use vslider_core::level::VolumeLevel;
pub use vslider_core::mapper::{DragPhase, GestureValueMapper, MapperResponse, SliderConfig};
pub use vslider_core::numeric::SliderFloat;

#[cfg(feature = "tracing-json")]
pub use vslider_core::logging::init_json_logging;

// --- Style re-exports ------------------------------------------------------

pub use vslider_style::{
    Color, Fill, FontWeight, GradientError, GradientStop, LinearGradient, OffLabelStyle, Shadow,
    SliderStyle, UnitPoint,
};

// --- Widget re-exports -----------------------------------------------------

pub use vslider_widgets::{Canvas, SliderScene, VolumeSlider};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for slider configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid value bounds.
    Bounds(BoundsError),
    /// Invalid step.
    Step(StepError),
    /// Invalid gradient.
    Gradient(GradientError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounds(err) => write!(f, "{err}"),
            Self::Step(err) => write!(f, "{err}"),
            Self::Gradient(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bounds(err) => Some(err),
            Self::Step(err) => Some(err),
            Self::Gradient(err) => Some(err),
        }
    }
}

impl From<BoundsError> for Error {
    fn from(err: BoundsError) -> Self {
        Self::Bounds(err)
    }
}

impl From<StepError> for Error {
    fn from(err: StepError) -> Self {
        Self::Step(err)
    }
}

impl From<GradientError> for Error {
    fn from(err: GradientError) -> Self {
        Self::Gradient(err)
    }
}

/// Standard result type for vslider APIs.
pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::{
        Bounds, Canvas, Color, DragEvent, Error, Fill, GestureRegion, LinearGradient, Result,
        SliderEvent, SliderScene, SliderStyle, Step, ValueBinding, ValueCell, VolumeLevel,
        VolumeSlider,
    };

    pub use crate::{core, style, widgets};
}

pub use vslider_core as core;
pub use vslider_style as style;
pub use vslider_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn config_errors_convert() {
        fn build() -> Result<VolumeSlider<f64, ValueCell<f64>>> {
            let bounds = Bounds::new(1.0, 0.0)?;
            Ok(VolumeSlider::new(ValueCell::new(0.0), bounds, Step::default()))
        }
        let err = build().unwrap_err();
        assert!(matches!(err, Error::Bounds(BoundsError::Inverted { .. })));
        assert!(err.source().is_some());
    }

    #[test]
    fn step_and_gradient_errors_convert() {
        let err: Error = Step::<f64>::new(0.0).unwrap_err().into();
        assert!(matches!(err, Error::Step(StepError::NonPositive { .. })));

        let err: Error = LinearGradient::evenly([], UnitPoint::LEADING, UnitPoint::TRAILING)
            .unwrap_err()
            .into();
        assert_eq!(err, Error::Gradient(GradientError::Empty));
        assert_eq!(err.to_string(), "gradient needs at least one stop");
    }

    #[test]
    fn prelude_builds_a_slider() {
        use crate::prelude::*;
        let volume = ValueCell::new(0.0_f64);
        let mut slider = VolumeSlider::new(volume.clone(), Bounds::<f64>::unit(), Step::default());
        slider.resize(300.0);
        slider.appear();
        slider.pointer_moved(280.0, 330.0);
        assert_eq!(volume.get(), 1.0);
        assert_eq!(slider.level(), VolumeLevel::High);
    }
}
