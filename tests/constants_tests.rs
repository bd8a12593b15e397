// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its constants are included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use roadmap_core::constants::*;
use roadmap_core::constants::DOT_GLOW_RADIUS_PX as CORE_DOT_GLOW_RADIUS_PX;
use web_constants::MAX_FRAME_DT_SEC;

#[test]
#[allow(clippy::assertions_on_constants)]
fn durations_are_positive() {
    assert!(SCRUB_TAU_SEC > 0.0);
    assert!(SNAP_DELAY_SEC > 0.0);
    assert!(ACTIVATE_DURATION_SEC > 0.0);
    assert!(DEACTIVATE_DURATION_SEC > 0.0);
    assert!(DOT_DURATION_SEC > 0.0);
    assert!(FLOW_LOOP_SEC > 0.0);
    assert!(GLOW_HALF_PERIOD_SEC > 0.0);
    assert!(GRADIENT_HALF_PERIOD_SEC > 0.0);
    assert!(GRID_DRIFT_LOOP_SEC > 0.0);
    assert!(MAX_FRAME_DT_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn snap_bounds_are_ordered() {
    assert!(SNAP_DURATION_MIN_SEC > 0.0);
    assert!(SNAP_DURATION_MIN_SEC <= SNAP_DURATION_MAX_SEC);
    assert!(SNAP_SELF_SCROLL_TOLERANCE_PX >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn card_visuals_stay_in_range() {
    assert!((0.0..=1.0).contains(&BASELINE_CARD_OPACITY));
    assert!((0.0..=1.0).contains(&INACTIVE_CARD_OPACITY));
    assert!(INACTIVE_CARD_SCALE > 0.0 && INACTIVE_CARD_SCALE <= 1.0);
    assert!(DOT_ACTIVE_SCALE > 1.0);
    assert!(ACTIVATE_OVERSHOOT > 0.0);
    assert!(GLOW_STD_DEV_MIN < GLOW_STD_DEV_MAX);
}

#[test]
fn waypoints_fit_inside_the_authored_path() {
    // last card top must not pass the path's end at y = 1900
    let last = WAYPOINT_BASE_OFFSET + 3.0 * WAYPOINT_SPACING;
    assert!(last <= INTRINSIC_HEIGHT);
    assert!(ROADMAP_MIN_HEIGHT > last);
}

#[test]
fn dot_glow_radius_matches_core() {
    assert_eq!(web_constants::DOT_GLOW_RADIUS_PX, CORE_DOT_GLOW_RADIUS_PX);
}

#[test]
fn gradient_palettes_parse() {
    for hex in GRADIENT_BASE_STOPS.iter().chain(GRADIENT_CYCLE_STOPS.iter()) {
        assert!(roadmap_core::Rgba::parse_hex(hex).is_some(), "{hex}");
    }
    for hex in [DOT_IDLE_COLOR, DOT_ACTIVE_BORDER, DOT_IDLE_BORDER] {
        assert!(roadmap_core::Rgba::parse_hex(hex).is_some(), "{hex}");
    }
}
