// Host-side tests for the generated markup.

use roadmap_core::card::{
    escape_html, phase_label, render_card_slot, render_level_card, render_roadmap,
    render_roadmap_svg,
};
use roadmap_core::shell::render_page_shell;
use roadmap_core::{LevelRecord, ScaleFactor, COURSE_LEVELS, SVG_PATH};

const UNKNOWN_ICON: LevelRecord = LevelRecord {
    id: 99,
    title: "MYSTERY <LEVEL>",
    subtitle: "Untracked",
    description: "Tom & Jerry",
    icon: "DoesNotExist",
    color: "#123456",
    tags: &["One", "Two"],
};

#[test]
fn phase_labels_count_from_one() {
    assert_eq!(phase_label(0), "Phase_01");
    assert_eq!(phase_label(3), "Phase_04");
}

#[test]
fn card_shows_every_field() {
    let level = &COURSE_LEVELS[0];
    let html = render_level_card(level, 0);
    assert!(html.contains(level.title));
    assert!(html.contains(level.subtitle));
    assert!(html.contains("Phase_01"));
    for tag in level.tags {
        assert!(html.contains(tag));
    }
    assert!(html.contains(r#"data-level-index="0""#));
    assert!(html.contains(r#"class="card-index">1<"#));
}

#[test]
fn cards_alternate_sides() {
    assert!(render_level_card(&COURSE_LEVELS[0], 0).contains("card-origin-left"));
    assert!(render_level_card(&COURSE_LEVELS[1], 1).contains("card-origin-right"));
    assert!(render_card_slot(&COURSE_LEVELS[0], 0, ScaleFactor::IDENTITY).contains("slot-row\""));
    assert!(render_card_slot(&COURSE_LEVELS[1], 1, ScaleFactor::IDENTITY)
        .contains("slot-row-reverse"));
}

#[test]
fn unknown_icon_still_renders_a_card() {
    let html = render_level_card(&UNKNOWN_ICON, 4);
    assert!(html.contains("Phase_05"));
    assert!(html.contains(r#"<div class="card-icon""#));
    assert!(html.contains("MYSTERY &lt;LEVEL&gt;"));
    assert!(html.contains("Tom &amp; Jerry"));
}

#[test]
fn escaping_covers_attribute_quotes() {
    assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#39;c");
}

#[test]
fn slots_are_positioned_by_scale() {
    let html = render_card_slot(&COURSE_LEVELS[2], 2, ScaleFactor::from_widths(250.0, 500.0));
    assert!(html.contains("top:650.00px"));
    assert!(html.contains(r#"data-dot-index="2""#));
}

#[test]
fn svg_has_every_animated_hook() {
    let svg = render_roadmap_svg(SVG_PATH);
    for hook in [
        "roadmap-svg",
        "guide-path",
        "data-flow-path",
        "roadmap-path",
        "roadmap-gradient",
        "path-glow-blur",
        "roadmap-marker",
    ] {
        assert!(svg.contains(hook), "missing {hook}");
    }
    assert!(svg.contains(r#"viewBox="0 0 500 2000""#));
    assert!(svg.contains(r#"stroke-dasharray="15 60""#));
    assert_eq!(svg.matches("<stop ").count(), 3);
}

#[test]
fn roadmap_renders_one_slot_per_level() {
    let html = render_roadmap(COURSE_LEVELS, SVG_PATH);
    assert_eq!(html.matches("data-slot-index=").count(), COURSE_LEVELS.len());
    assert_eq!(html.matches("data-level-index=").count(), COURSE_LEVELS.len());
    assert_eq!(html.matches("data-dot-index=").count(), COURSE_LEVELS.len());
}

#[test]
fn page_shell_hosts_the_roadmap() {
    let html = render_page_shell();
    for hook in [
        "grid-bg",
        "hero-tag",
        "hero-title",
        "hero-subtitle",
        r#"id="roadmap-root""#,
        "<footer",
    ] {
        assert!(html.contains(hook), "missing {hook}");
    }
}

#[test]
fn course_copy_is_rendered_verbatim() {
    let level = &COURSE_LEVELS[2];
    assert!(level
        .description
        .ends_with("living, breathing entities using GSAP and Framer techniques."));
    assert!(render_level_card(level, 2).contains(level.description));
}
