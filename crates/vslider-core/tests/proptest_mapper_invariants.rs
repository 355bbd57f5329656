//! Property-based invariant tests for the gesture-to-value mapper.
//!
//! These tests verify:
//!
//! 1. Initialization projects the bound value onto `[0, 1]`
//! 2. The ratio stays within `[0, 1]` for any event sequence
//! 3. The written value stays within bounds
//! 4. Replaying a drag update is idempotent
//! 5. Drag end always clears the anchor
//! 6. Quantized ratios sit on step multiples
//! 7. Degenerate tracks never produce NaN

use proptest::prelude::*;
use vslider_core::binding::ValueCell;
use vslider_core::bounds::{Bounds, Step};
use vslider_core::event::{DragEvent, GestureRegion, SliderEvent};
use vslider_core::mapper::{DragPhase, GestureValueMapper};

// ── Strategies ──────────────────────────────────────────────────────────

fn coord() -> impl Strategy<Value = f64> {
    -500.0f64..1500.0
}

fn region() -> impl Strategy<Value = GestureRegion> {
    prop_oneof![Just(GestureRegion::Thumb), Just(GestureRegion::Track)]
}

fn event_strategy() -> impl Strategy<Value = SliderEvent> {
    prop_oneof![
        4 => (region(), coord(), coord())
            .prop_map(|(r, s, l)| SliderEvent::DragChanged(DragEvent::new(r, s, l))),
        1 => region().prop_map(|region| SliderEvent::DragEnded { region }),
        1 => (0.0f64..1200.0).prop_map(|width| SliderEvent::Resized { width }),
        1 => Just(SliderEvent::Appeared),
    ]
}

fn mapper(width: f64, upper: f64, step: f64) -> GestureValueMapper<f64> {
    let mut m = GestureValueMapper::new(
        Bounds::new(0.0, upper).expect("valid bounds"),
        Step::new(step).expect("valid step"),
    );
    m.set_track_width(width);
    m
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Initialization
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn appear_projects_value(upper in 0.01f64..1000.0, frac in 0.0f64..=1.0) {
        let value = upper * frac;
        let cell = ValueCell::new(value);
        let mut m = mapper(300.0, upper, 1.0);
        m.appear(&cell);
        let expected = (value / upper).clamp(0.0, 1.0);
        prop_assert!((m.ratio() - expected).abs() < 1e-12);
    }

    #[test]
    fn appear_clamps_out_of_range(upper in 0.01f64..100.0, value in -1000.0f64..1000.0) {
        let mut m = mapper(300.0, upper, 1.0);
        m.appear(&ValueCell::new(value));
        prop_assert!((0.0..=1.0).contains(&m.ratio()));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2–3. Ratio and value stay bounded
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ratio_and_value_bounded(
        width in 0.0f64..1200.0,
        upper in 0.0f64..100.0,
        events in proptest::collection::vec(event_strategy(), 1..64),
    ) {
        let mut m = mapper(width, upper, 1.0);
        let mut cell = ValueCell::new(0.0);
        for ev in &events {
            m.handle(ev, &mut cell);
            prop_assert!((0.0..=1.0).contains(&m.ratio()), "ratio {} after {:?}", m.ratio(), ev);
            let v = cell.get();
            prop_assert!(!v.is_nan());
            prop_assert!((0.0..=upper).contains(&v), "value {} outside 0..={}", v, upper);
        }
    }

    #[test]
    fn quantized_ratio_bounded(
        width in 61.0f64..1200.0,
        step in 0.01f64..0.9,
        events in proptest::collection::vec(event_strategy(), 1..64),
    ) {
        let mut m = mapper(width, 1.0, step);
        let mut cell = ValueCell::new(0.0);
        for ev in &events {
            m.handle(ev, &mut cell);
            prop_assert!((0.0..=1.0).contains(&m.ratio()));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Idempotence
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn replayed_update_is_noop(
        width in 0.0f64..1200.0,
        press in coord(),
        loc in coord(),
        step in prop_oneof![Just(1.0f64), 0.01f64..0.5],
    ) {
        let mut m = mapper(width, 1.0, step);
        let mut cell = ValueCell::new(0.0);
        m.begin_thumb_grab(press);
        m.drag_update(loc, &mut cell);
        let (ratio, value) = (m.ratio(), cell.get());
        m.drag_update(loc, &mut cell);
        prop_assert_eq!(m.ratio(), ratio);
        prop_assert_eq!(cell.get(), value);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Anchor lifecycle
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn drag_end_clears_anchor(
        events in proptest::collection::vec(event_strategy(), 0..32),
        end_region in region(),
    ) {
        let mut m = mapper(300.0, 1.0, 1.0);
        let mut cell = ValueCell::new(0.0);
        for ev in &events {
            m.handle(ev, &mut cell);
        }
        m.handle(&SliderEvent::DragEnded { region: end_region }, &mut cell);
        prop_assert_eq!(m.phase(), DragPhase::Idle);
    }

    #[test]
    fn anchor_is_finite_while_dragging(
        events in proptest::collection::vec(event_strategy(), 1..64),
    ) {
        let mut m = mapper(300.0, 1.0, 1.0);
        let mut cell = ValueCell::new(0.0);
        for ev in &events {
            m.handle(ev, &mut cell);
            if let Some(anchor) = m.anchor() {
                prop_assert!(anchor.is_finite());
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. Quantization lands on multiples
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn quantized_ratio_is_step_multiple(
        divisions in 2u32..20,
        loc in coord(),
    ) {
        let step = 1.0 / f64::from(divisions);
        let mut m = mapper(300.0, 1.0, step);
        let mut cell = ValueCell::new(0.0);
        m.begin_thumb_grab(30.0);
        m.drag_update(loc, &mut cell);
        let steps = m.ratio() / step;
        prop_assert!((steps - steps.round()).abs() < 1e-6, "ratio {} not a multiple of {}", m.ratio(), step);
    }

    #[test]
    fn quantization_never_rounds_up(loc in 30.0f64..270.0, step in 0.01f64..0.5) {
        let mut raw = mapper(300.0, 1.0, 1.0);
        let mut stepped = mapper(300.0, 1.0, step);
        let mut a = ValueCell::new(0.0);
        let mut b = ValueCell::new(0.0);
        raw.begin_thumb_grab(30.0);
        stepped.begin_thumb_grab(30.0);
        raw.drag_update(loc, &mut a);
        stepped.drag_update(loc, &mut b);
        prop_assert!(stepped.ratio() <= raw.ratio() + 1e-9);
        prop_assert!(raw.ratio() - stepped.ratio() < step + 1e-9);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 7. Degenerate geometry
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn narrow_track_pins_ratio_to_zero(
        width in 0.0f64..=60.0,
        events in proptest::collection::vec(event_strategy().prop_filter(
            "keep width fixed",
            |e| !matches!(e, SliderEvent::Resized { .. } | SliderEvent::Appeared),
        ), 1..32),
    ) {
        let mut m = mapper(width, 1.0, 1.0);
        let mut cell = ValueCell::new(0.0);
        for ev in &events {
            m.handle(ev, &mut cell);
            prop_assert_eq!(m.ratio(), 0.0);
            prop_assert_eq!(cell.get(), 0.0);
        }
    }
}
