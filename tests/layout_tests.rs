// Host-side tests for responsive layout and trigger bounds.

use roadmap_core::{card_top, Layout, LayoutInput, ScaleFactor, TriggerBounds, Viewport};

fn input(svg_width: f64) -> LayoutInput {
    LayoutInput {
        viewport: Viewport {
            width: 1280.0,
            height: 800.0,
        },
        svg_width,
        section_top: 1000.0,
        trailing_height: None,
    }
}

#[test]
fn full_width_places_cards_on_the_authored_grid() {
    let layout = Layout::compute(4, &input(500.0));
    assert_eq!(layout.scale, ScaleFactor::IDENTITY);
    assert_eq!(layout.card_tops, vec![100.0, 700.0, 1300.0, 1900.0]);
    assert_eq!(layout.section_height, 3200.0);
}

#[test]
fn half_width_halves_every_offset() {
    let full = Layout::compute(4, &input(500.0));
    let half = Layout::compute(4, &input(250.0));
    assert_eq!(half.scale.get(), 0.5);
    assert_eq!(half.card_tops, vec![50.0, 350.0, 650.0, 950.0]);
    for (h, f) in half.card_tops.iter().zip(&full.card_tops) {
        assert_eq!(*h, f * 0.5);
    }
    assert_eq!(half.section_height, 1600.0);
    // a shorter section ends the timeline earlier
    assert_eq!(half.triggers.start, full.triggers.start);
    assert!(half.triggers.end < full.triggers.end);
}

#[test]
fn bad_measurements_fall_back_to_identity() {
    assert_eq!(ScaleFactor::from_widths(0.0, 500.0), ScaleFactor::IDENTITY);
    assert_eq!(ScaleFactor::from_widths(-10.0, 500.0), ScaleFactor::IDENTITY);
    assert_eq!(ScaleFactor::from_widths(f64::NAN, 500.0), ScaleFactor::IDENTITY);
    assert_eq!(ScaleFactor::from_widths(400.0, 0.0), ScaleFactor::IDENTITY);
}

#[test]
fn card_top_is_linear_in_index_and_scale() {
    let s = ScaleFactor::from_widths(375.0, 500.0);
    assert_eq!(card_top(0, s), 75.0);
    assert_eq!(card_top(2, s), 975.0);
}

#[test]
fn triggers_run_center_to_center() {
    let t = TriggerBounds::center_to_center(
        1000.0,
        3200.0,
        Viewport {
            width: 1280.0,
            height: 800.0,
        },
    );
    assert_eq!(t.start, 600.0);
    assert_eq!(t.end, 3800.0);
    assert_eq!(t.progress(600.0), 0.0);
    assert_eq!(t.progress(2200.0), 0.5);
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.progress(10_000.0), 1.0);
    assert!(t.raw_progress(0.0) < 0.0);
    assert_eq!(t.scroll_for(0.25), 1400.0);
}

#[test]
fn zero_span_triggers_report_no_progress() {
    let t = TriggerBounds {
        start: 500.0,
        end: 500.0,
    };
    assert_eq!(t.raw_progress(800.0), 0.0);
}

#[test]
fn max_scroll_follows_the_section_height() {
    let tail = LayoutInput {
        trailing_height: Some(300.0),
        ..input(500.0)
    };
    let full = Layout::compute(4, &tail);
    // 1000 + 3200 + 300 - 800
    assert_eq!(full.max_scroll, Some(3700.0));
    assert_eq!(full.clamp_scroll(3800.0), 3700.0);
    assert_eq!(full.clamp_scroll(-5.0), 0.0);

    let half = Layout::compute(4, &LayoutInput { svg_width: 250.0, ..tail });
    assert_eq!(half.max_scroll, Some(2100.0));
}

#[test]
fn unknown_document_height_leaves_scroll_uncapped() {
    let layout = Layout::compute(4, &input(500.0));
    assert_eq!(layout.max_scroll, None);
    assert_eq!(layout.clamp_scroll(1.0e6), 1.0e6);
}
