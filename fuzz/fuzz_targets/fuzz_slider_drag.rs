#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vslider_core::binding::ValueCell;
use vslider_core::bounds::{Bounds, Step};
use vslider_core::event::{DragEvent, GestureRegion, SliderEvent};
use vslider_core::mapper::{GestureValueMapper, SliderConfig};

#[derive(Debug, Arbitrary)]
enum Op {
    Appear,
    Disappear,
    Resize(f64),
    Thumb { start: f64, location: f64 },
    Track { start: f64, location: f64 },
    EndThumb,
    EndTrack,
}

#[derive(Debug, Arbitrary)]
struct Input {
    lower: f64,
    upper: f64,
    step: f64,
    diameter: f64,
    initial: f64,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let Ok(bounds) = Bounds::new(input.lower, input.upper) else {
        return;
    };
    let step = Step::new(input.step).unwrap_or_default();
    // Thumb sizes beyond any real display only exercise float overflow.
    let diameter = if input.diameter.is_finite() {
        input.diameter.abs().min(1.0e6)
    } else {
        60.0
    };
    let config = SliderConfig::default().thumb_diameter(diameter);
    let mut mapper = GestureValueMapper::with_config(bounds, step, config);
    let mut cell = ValueCell::new(input.initial);

    for op in input.ops.iter().take(256) {
        let event = match *op {
            Op::Appear => SliderEvent::Appeared,
            Op::Disappear => SliderEvent::Disappeared,
            Op::Resize(width) => SliderEvent::Resized { width },
            Op::Thumb { start, location } => DragEvent::thumb(start, location).into(),
            Op::Track { start, location } => DragEvent::track(start, location).into(),
            Op::EndThumb => SliderEvent::DragEnded {
                region: GestureRegion::Thumb,
            },
            Op::EndTrack => SliderEvent::DragEnded {
                region: GestureRegion::Track,
            },
        };
        mapper.handle(&event, &mut cell);

        // Post-conditions that must always hold:
        let ratio = mapper.ratio();
        assert!((0.0..=1.0).contains(&ratio), "ratio {ratio} out of range");
        if let Some(anchor) = mapper.anchor() {
            assert!(anchor.is_finite(), "non-finite anchor");
        }
        match event {
            SliderEvent::DragChanged(drag)
                if drag.region == GestureRegion::Track && drag.is_finite() =>
            {
                let v = cell.get();
                assert!(
                    v >= bounds.lower() && v <= bounds.upper(),
                    "value {v} outside bounds"
                );
                assert_eq!(v, mapper.value(), "binding out of sync with ratio");
            }
            SliderEvent::DragEnded { .. } => {
                assert!(mapper.anchor().is_none(), "anchor survived drag end");
            }
            _ => {}
        }
    }
});
