#![forbid(unsafe_code)]

//! Structured logging support.
//!
//! With the `tracing` feature, the `tracing` macros are re-exported at the
//! crate root so downstream crates can log through `vslider_core::debug!`
//! without naming `tracing` themselves. Message keys are dotted
//! (`slider.grab`, `slider.drag`, `slider.release`, `slider.appear`).
//!
//! The `tracing-json` feature adds [`init_json_logging`], a one-call
//! subscriber setup for production hosts that want JSON lines on stderr,
//! filtered by `RUST_LOG`.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Default filter when `RUST_LOG` is unset.
#[cfg(feature = "tracing-json")]
pub const DEFAULT_FILTER: &str = "vslider_core=info,vslider_widgets=info";

/// Install a global JSON subscriber.
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
