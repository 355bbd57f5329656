#![forbid(unsafe_code)]

//! Volume slider widget for vslider.
//!
//! # Role in vslider
//! `vslider-widgets` is the presentation adapter. It routes host events into
//! the `vslider-core` mapper, hit-tests raw pointer drags against the thumb,
//! and turns the resulting ratio and value into a [`SliderScene`] styled by
//! `vslider-style`.
//!
//! # How it fits in the system
//! The host toolkit measures the track, forwards pointer and visibility
//! events, and paints the scene through a [`Canvas`] implementation of its
//! own. No drawing backend is linked here.

pub mod scene;
pub mod volume_slider;

pub use scene::{
    Circle, ClipShape, Icon, Label, OFF_LABEL_Z_INDEX, Primitive, RoundedRect, SliderScene,
};
pub use volume_slider::VolumeSlider;

/// A drawing surface supplied by the host toolkit.
///
/// [`SliderScene::paint`] calls these in paint order. Clip calls are always
/// balanced.
pub trait Canvas {
    /// Clip subsequent drawing to a rounded rect until [`pop_clip`](Self::pop_clip).
    fn push_clip(&mut self, clip: &ClipShape);
    fn pop_clip(&mut self);
    fn rounded_rect(&mut self, shape: &RoundedRect);
    fn circle(&mut self, shape: &Circle);
    fn icon(&mut self, icon: &Icon);
    fn label(&mut self, label: &Label);
}
