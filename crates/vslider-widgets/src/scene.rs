#![forbid(unsafe_code)]

//! Backend-independent display list for one slider frame.
//!
//! A [`SliderScene`] holds resolved shapes in track coordinates. Hosts walk
//! [`SliderScene::primitives`] in paint order and draw each item with their
//! own toolkit; everything except the off label is clipped to
//! [`SliderScene::clip`].

use vslider_core::geometry::{Point, Rect};
use vslider_style::{Color, Fill, FontWeight, Shadow};

use crate::Canvas;

/// Z-index of the off label; the track content sits at 0.
pub const OFF_LABEL_Z_INDEX: i32 = 5;

/// A filled rectangle with uniform corner radius.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub corner_radius: f64,
    pub fill: Fill,
}

/// A filled circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub diameter: f64,
    pub fill: Fill,
}

impl Circle {
    /// Bounding square.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let r = self.diameter / 2.0;
        Rect::new(self.center.x - r, self.center.y - r, self.diameter, self.diameter)
    }
}

/// A symbolic icon drawn centered on a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icon {
    /// Symbol name, e.g. `speaker.wave.2.fill`.
    pub name: &'static str,
    pub center: Point,
    pub color: Color,
}

/// Text centered inside `frame`.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub frame: Rect,
    pub color: Color,
    pub shadow: Shadow,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub opacity: f64,
    pub z_index: i32,
}

impl Label {
    /// Whether the label contributes any pixels.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && !self.text.is_empty()
    }
}

/// Clip region for the track content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipShape {
    pub rect: Rect,
    pub corner_radius: f64,
}

/// One drawable item, borrowed from a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
    RoundedRect(&'a RoundedRect),
    Circle(&'a Circle),
    Icon(&'a Icon),
    Label(&'a Label),
}

impl Primitive<'_> {
    #[must_use]
    pub fn z_index(&self) -> i32 {
        match self {
            Self::Label(label) => label.z_index,
            _ => 0,
        }
    }

    /// Whether the item is subject to the scene's clip shape.
    #[must_use]
    pub fn is_clipped(&self) -> bool {
        !matches!(self, Self::Label(_))
    }
}

/// Everything needed to draw the slider once.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderScene {
    /// Control size: track width by thumb diameter.
    pub size: Rect,
    pub clip: ClipShape,
    pub active_track: RoundedRect,
    pub passive_track: RoundedRect,
    pub thumb: Circle,
    pub icon: Icon,
    pub off_label: Label,
}

impl SliderScene {
    /// Items in paint order, lowest first.
    pub fn primitives(&self) -> impl Iterator<Item = Primitive<'_>> {
        [
            Primitive::RoundedRect(&self.active_track),
            Primitive::RoundedRect(&self.passive_track),
            Primitive::Circle(&self.thumb),
            Primitive::Icon(&self.icon),
            Primitive::Label(&self.off_label),
        ]
        .into_iter()
    }

    /// Control height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Draw the scene onto a host canvas.
    ///
    /// Clipped items are bracketed by one `push_clip`/`pop_clip` pair. The
    /// off label is skipped while invisible.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        if self.size.is_empty() {
            return;
        }
        canvas.push_clip(&self.clip);
        for primitive in self.primitives().filter(|p| p.is_clipped()) {
            draw(canvas, primitive);
        }
        canvas.pop_clip();
        for primitive in self.primitives().filter(|p| !p.is_clipped()) {
            draw(canvas, primitive);
        }
    }
}

fn draw<C: Canvas + ?Sized>(canvas: &mut C, primitive: Primitive<'_>) {
    match primitive {
        Primitive::RoundedRect(shape) => canvas.rounded_rect(shape),
        Primitive::Circle(shape) => canvas.circle(shape),
        Primitive::Icon(icon) => canvas.icon(icon),
        Primitive::Label(label) => {
            if label.is_visible() {
                canvas.label(label);
            }
        }
    }
}
