use std::sync::Arc;

use engine_core::{FixedMetricsProvider, Painter, Viewport};
use lattice_input::{LatticeInput, LatticeStyle, MeasureSpec, Size, Widget};
use proptest::prelude::*;

fn input_with(item_count: usize, density: f32) -> LatticeInput {
    let style = LatticeStyle {
        item_count,
        density,
        ..LatticeStyle::default()
    };
    LatticeInput::new(style, Arc::new(FixedMetricsProvider::default())).unwrap()
}

fn spec_strategy() -> impl Strategy<Value = MeasureSpec> {
    prop_oneof![
        (1u32..4000).prop_map(MeasureSpec::Exactly),
        (1u32..4000).prop_map(MeasureSpec::AtMost),
        Just(MeasureSpec::Unspecified),
    ]
}

#[test]
fn exact_box_matching_natural_aspect_keeps_scale_one() {
    let mut w = input_with(6, 1.0);
    let size = w.measure(MeasureSpec::Exactly(300), MeasureSpec::Exactly(70));
    assert_eq!(w.scale(), 1.0);
    assert_eq!(size, Size::new(300, 70));
}

#[test]
fn wider_box_scales_by_height() {
    let mut w = input_with(6, 1.0);
    let size = w.measure(MeasureSpec::Exactly(600), MeasureSpec::Exactly(70));
    assert_eq!(w.scale(), 1.0);
    assert_eq!(size, Size::new(300, 70));
}

#[test]
fn aspect_ratios_compare_as_fractions() {
    // 330/70 is wider than 300/70 even though both truncate to 4.
    let mut w = input_with(6, 1.0);
    let size = w.measure(MeasureSpec::Exactly(330), MeasureSpec::Exactly(70));
    assert_eq!(w.scale(), 1.0);
    assert_eq!(size, Size::new(300, 70));
    assert!(size.height <= 70);
}

#[test]
fn taller_box_scales_by_width() {
    let mut w = input_with(6, 1.0);
    let size = w.measure(MeasureSpec::Exactly(150), MeasureSpec::Exactly(400));
    assert_eq!(w.scale(), 0.5);
    assert_eq!(size, Size::new(150, 35));
    assert_eq!(w.metrics().item_width, 25.0);
    assert_eq!(w.metrics().text_size, 18.0);
}

#[test]
fn height_only_drives_width() {
    let mut w = input_with(6, 1.0);
    let size = w.measure(MeasureSpec::AtMost(1000), MeasureSpec::Exactly(140));
    assert_eq!(w.scale(), 2.0);
    assert_eq!(size, Size::new(600, 140));
}

#[test]
fn unconstrained_reports_natural_size_on_dense_screens() {
    let mut w = input_with(6, 3.0);
    let size = w.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
    assert_eq!(w.scale(), 1.0);
    assert_eq!(size, Size::new(900, 210));
}

#[test]
fn unconstrained_keeps_previous_scale() {
    let mut w = input_with(6, 1.0);
    w.measure(MeasureSpec::Exactly(600), MeasureSpec::Unspecified);
    let size = w.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
    assert_eq!(w.scale(), 2.0);
    assert_eq!(size, Size::new(300, 70));
}

#[test]
fn two_characters_fill_two_text_slots() {
    let mut w = input_with(6, 1.0);
    w.measure(MeasureSpec::Exactly(300), MeasureSpec::Exactly(70));
    w.on_content_changed("12");
    let filled: Vec<bool> = w.text_positions().iter().map(Option::is_some).collect();
    assert_eq!(filled, vec![true, true, false, false, false, false]);
    assert_eq!(w.underline_positions().len(), 6);
}

#[test]
fn measure_refreshes_glyph_positions() {
    let mut w = input_with(6, 1.0);
    w.on_content_changed("1");
    let before = w.text_positions()[0];
    w.measure(MeasureSpec::Exactly(600), MeasureSpec::Unspecified);
    let after = w.text_positions()[0];
    assert_ne!(before, after);
    // 100px cells, 36px ink -> 32px inset; ascent 57.6 -> 57, plus 60
    assert_eq!(after, Some([32.0, 117.0]));
}

#[test]
fn full_frame_records_expected_commands() {
    let mut w = input_with(4, 1.0);
    w.on_focus_changed(true);
    let size = w.measure(MeasureSpec::Exactly(200), MeasureSpec::Exactly(70));
    w.on_content_changed("4821");
    let mut painter = Painter::begin_frame(Viewport {
        width: size.width,
        height: size.height,
    });
    w.draw(&mut painter, 10);
    let list = painter.finish();
    assert_eq!(list.text_runs().count(), 4);
    assert_eq!(list.strokes().count(), 4);
    let xs: Vec<f32> = list.text_runs().map(|(r, _)| r.pos[0]).collect();
    assert_eq!(xs, vec![16.0, 66.0, 116.0, 166.0]);
}

proptest! {
    #[test]
    fn short_content_round_trips(text in "[0-9a-zA-Z]{0,6}") {
        let mut w = input_with(6, 1.0);
        w.set_text(&text);
        prop_assert_eq!(w.text(), text.as_str());
    }

    #[test]
    fn content_never_exceeds_item_count(text in ".{0,24}", count in 1usize..10) {
        let mut w = input_with(count, 1.0);
        w.on_content_changed(&text);
        let stored = w.text().chars().count();
        prop_assert!(stored <= count);
        prop_assert_eq!(stored, text.chars().count().min(count));
        let filled = w.text_positions().iter().filter(|p| p.is_some()).count();
        prop_assert_eq!(filled, stored);
    }

    #[test]
    fn tables_always_span_every_slot(
        text in ".{0,12}",
        count in 1usize..12,
        density in 0.5f32..4.0,
    ) {
        let mut w = input_with(count, density);
        w.on_content_changed(&text);
        w.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        prop_assert_eq!(w.underline_positions().len(), count);
        prop_assert_eq!(w.text_positions().len(), count);
    }

    #[test]
    fn scale_stays_positive(width in spec_strategy(), height in spec_strategy()) {
        let mut w = input_with(6, 1.0);
        w.measure(width, height);
        prop_assert!(w.scale() > 0.0);
        prop_assert!(w.scale().is_finite());
    }

    #[test]
    fn measure_is_idempotent(width in spec_strategy(), height in spec_strategy()) {
        let mut w = input_with(6, 2.0);
        let first = w.measure(width, height);
        let scale = w.scale();
        let second = w.measure(width, height);
        prop_assert_eq!(first, second);
        prop_assert_eq!(scale, w.scale());
    }
}
