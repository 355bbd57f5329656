#![forbid(unsafe_code)]

//! Volume slider widget.
//!
//! [`VolumeSlider`] owns a [`GestureValueMapper`], the host binding, and a
//! [`SliderStyle`]. Hosts either forward pre-classified [`SliderEvent`]s
//! through [`handle_event`](VolumeSlider::handle_event), or report raw
//! pointer drags over the whole control with
//! [`pointer_moved`](VolumeSlider::pointer_moved) and let the widget
//! hit-test the thumb.
//!
//! # Example
//!
//! ```
//! use vslider_core::binding::ValueCell;
//! use vslider_core::bounds::{Bounds, Step};
//! use vslider_widgets::VolumeSlider;
//!
//! let volume = ValueCell::new(0.5_f64);
//! let mut slider = VolumeSlider::new(volume.clone(), Bounds::<f64>::unit(), Step::default());
//! slider.resize(300.0);
//! slider.appear();
//!
//! // Grab the thumb at its center and drag right by 60 points.
//! slider.pointer_moved(150.0, 150.0);
//! slider.pointer_moved(150.0, 210.0);
//! slider.pointer_released();
//!
//! assert_eq!(volume.get(), 0.75);
//! assert_eq!(slider.scene().icon.name, "speaker.wave.3.fill");
//! ```

use vslider_core::binding::ValueBinding;
use vslider_core::bounds::{Bounds, Step};
use vslider_core::event::{DragEvent, GestureRegion, SliderEvent};
use vslider_core::geometry::Rect;
use vslider_core::level::VolumeLevel;
use vslider_core::mapper::{GestureValueMapper, MapperResponse, SliderConfig};
use vslider_core::numeric::SliderFloat;
use vslider_style::SliderStyle;

use crate::scene::{Circle, ClipShape, Icon, Label, OFF_LABEL_Z_INDEX, RoundedRect, SliderScene};

/// Pointer press latched for the duration of one raw drag.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PointerPress {
    start_x: f64,
    on_thumb: bool,
}

/// A horizontal volume slider bound to a host value.
pub struct VolumeSlider<V, B> {
    mapper: GestureValueMapper<V>,
    binding: B,
    style: SliderStyle,
    press: Option<PointerPress>,
}

impl<V: SliderFloat, B: ValueBinding<V>> std::fmt::Debug for VolumeSlider<V, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VolumeSlider")
            .field("mapper", &self.mapper)
            .field("value", &self.binding.get())
            .field("press", &self.press)
            .finish()
    }
}

impl<V: SliderFloat, B: ValueBinding<V>> VolumeSlider<V, B> {
    /// Create a slider with the default style and thumb size.
    #[must_use]
    pub fn new(binding: B, bounds: Bounds<V>, step: Step<V>) -> Self {
        Self::with_config(binding, bounds, step, SliderConfig::default())
    }

    /// Create a slider with explicit layout configuration.
    #[must_use]
    pub fn with_config(binding: B, bounds: Bounds<V>, step: Step<V>, config: SliderConfig) -> Self {
        Self {
            mapper: GestureValueMapper::with_config(bounds, step, config),
            binding,
            style: SliderStyle::default(),
            press: None,
        }
    }

    /// Set the style.
    #[must_use]
    pub fn style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the style in place.
    pub fn set_style(&mut self, style: SliderStyle) {
        self.style = style;
    }

    /// Forward a host event to the mapper.
    pub fn handle_event(&mut self, event: &SliderEvent) -> MapperResponse<V> {
        if matches!(event, SliderEvent::Disappeared) {
            self.press = None;
        }
        self.mapper.handle(event, &mut self.binding)
    }

    pub fn appear(&mut self) -> MapperResponse<V> {
        self.handle_event(&SliderEvent::Appeared)
    }

    pub fn disappear(&mut self) -> MapperResponse<V> {
        self.handle_event(&SliderEvent::Disappeared)
    }

    /// Report the measured track width.
    pub fn resize(&mut self, width: f64) -> MapperResponse<V> {
        self.handle_event(&SliderEvent::Resized { width })
    }

    /// Report a raw pointer drag over the control, in track coordinates.
    ///
    /// The first report of a drag decides whether the press landed on the
    /// thumb. If it did, the thumb event is delivered before the track event
    /// so the grab offset is in place when the value moves. Returns the
    /// track event's response.
    ///
    /// Reports sharing a `start_x` belong to the same press until
    /// [`pointer_released`](Self::pointer_released) or
    /// [`disappear`](Self::disappear). Hosts must report every release,
    /// including cancelled drags: a later press starting at the same `x`
    /// would otherwise reuse the stale hit test.
    pub fn pointer_moved(&mut self, start_x: f64, location_x: f64) -> MapperResponse<V> {
        let press = match self.press {
            Some(press) if press.start_x == start_x => press,
            _ => {
                let on_thumb = self.thumb_hit(start_x);
                let press = PointerPress { start_x, on_thumb };
                self.press = Some(press);
                #[cfg(feature = "tracing")]
                tracing::debug!(message = "volume_slider.press", start_x, on_thumb);
                press
            }
        };
        if press.on_thumb {
            self.handle_event(&DragEvent::thumb(start_x, location_x).into());
        }
        self.handle_event(&DragEvent::track(start_x, location_x).into())
    }

    /// Report the end of a raw pointer drag.
    pub fn pointer_released(&mut self) -> MapperResponse<V> {
        let region = match self.press.take() {
            Some(PointerPress { on_thumb: true, .. }) => GestureRegion::Thumb,
            _ => GestureRegion::Track,
        };
        self.handle_event(&SliderEvent::DragEnded { region })
    }

    /// Whether `x` falls inside the thumb's horizontal span.
    #[must_use]
    pub fn thumb_hit(&self, x: f64) -> bool {
        self.mapper.geometry().thumb_rect(self.mapper.ratio()).contains_x(x)
    }

    /// Current bound value.
    #[must_use]
    pub fn value(&self) -> V {
        self.binding.get()
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.mapper.ratio()
    }

    #[must_use]
    pub fn level(&self) -> VolumeLevel {
        VolumeLevel::from_value(self.binding.get())
    }

    #[must_use]
    pub fn icon_name(&self) -> &'static str {
        self.level().icon_name()
    }

    /// Control height: one thumb diameter.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.mapper.geometry().thumb_diameter()
    }

    #[must_use]
    pub fn mapper(&self) -> &GestureValueMapper<V> {
        &self.mapper
    }

    #[must_use]
    pub fn binding(&self) -> &B {
        &self.binding
    }

    pub fn binding_mut(&mut self) -> &mut B {
        &mut self.binding
    }

    #[must_use]
    pub fn into_binding(self) -> B {
        self.binding
    }

    #[must_use]
    pub fn current_style(&self) -> &SliderStyle {
        &self.style
    }

    /// Build the display list for the current state.
    #[must_use]
    pub fn scene(&self) -> SliderScene {
        #[cfg(feature = "tracing")]
        let build_start = web_time::Instant::now();
        #[cfg(feature = "tracing")]
        let scene_span = tracing::debug_span!(
            "volume_slider.scene",
            width = self.mapper.geometry().track_width(),
            ratio = self.mapper.ratio(),
            level = self.level().icon_name(),
            build_duration_us = tracing::field::Empty,
        );
        #[cfg(feature = "tracing")]
        let _scene_guard = scene_span.enter();

        let geometry = self.mapper.geometry();
        let ratio = self.mapper.ratio();
        let length = geometry.thumb_diameter();
        let width = geometry.track_width();
        let value = self.binding.get();

        let active_width = geometry.active_width(ratio);
        let passive_x = active_width - length / 2.0;
        let thumb = geometry.thumb_rect(ratio);
        let thumb_center = thumb.center();
        let label = &self.style.off_label;

        let scene = SliderScene {
            size: geometry.track_rect(),
            clip: ClipShape {
                rect: geometry.track_rect(),
                corner_radius: length,
            },
            active_track: RoundedRect {
                rect: Rect::new(0.0, 0.0, active_width, length),
                corner_radius: length / 2.0,
                fill: self.style.active_fill(),
            },
            passive_track: RoundedRect {
                rect: Rect::new(passive_x, 0.0, (width - passive_x).max(0.0), length),
                corner_radius: 0.0,
                fill: self.style.passive_fill(),
            },
            thumb: Circle {
                center: thumb_center,
                diameter: length,
                fill: self.style.thumb_fill(),
            },
            icon: Icon {
                name: VolumeLevel::from_value(value).icon_name(),
                center: thumb_center,
                color: self.style.text_color,
            },
            off_label: Label {
                text: label.text.clone(),
                frame: Rect::new(
                    label.padding,
                    0.0,
                    (width - 2.0 * label.padding).max(0.0),
                    length,
                ),
                color: label.color,
                shadow: label.shadow,
                font_size: label.font_size,
                font_weight: label.font_weight,
                opacity: if value.to_f64() <= 0.0 { 1.0 } else { 0.0 },
                z_index: OFF_LABEL_Z_INDEX,
            },
        };

        #[cfg(feature = "tracing")]
        scene_span.record(
            "build_duration_us",
            build_start.elapsed().as_micros() as u64,
        );
        scene
    }
}
