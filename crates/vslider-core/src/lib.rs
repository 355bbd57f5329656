#![forbid(unsafe_code)]

//! Core: gesture-to-value mapping for a horizontal volume slider.
//!
//! # Role in vslider
//! `vslider-core` is the input layer. It turns pointer drags into a clamped,
//! optionally quantized ratio and keeps that ratio consistent with a value the
//! host owns. It draws nothing and knows nothing about the UI toolkit.
//!
//! # Primary responsibilities
//! - **GestureValueMapper**: the drag state machine and update algorithm.
//! - **Bounds / Step**: the value domain and its quantization.
//! - **ValueBinding**: read/write access to the host-owned value.
//! - **SliderEvent**: drag, layout, and visibility events from the host.
//! - **VolumeLevel**: icon classification of the current value.
//!
//! # How it fits in the system
//! `vslider-widgets` owns a mapper per slider, forwards host events to it,
//! and builds a backend-independent scene from the resulting ratio. Styling
//! lives in `vslider-style`, so this crate stays dependency-free unless
//! logging is enabled.

pub mod binding;
pub mod bounds;
pub mod event;
pub mod geometry;
pub mod level;
pub mod logging;
pub mod mapper;
pub mod numeric;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
