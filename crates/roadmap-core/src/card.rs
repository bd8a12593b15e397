//! Markup for level cards and the roadmap section that hosts them.

use crate::constants::{FLOW_DASH, FLOW_GAP, GRADIENT_BASE_STOPS, INTRINSIC_HEIGHT, INTRINSIC_WIDTH};
use crate::icons;
use crate::layout::{card_top, ScaleFactor};
use crate::levels::LevelRecord;

/// Minimal escaping for text placed in element content or attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Label shown in the card's top-right corner.
pub fn phase_label(index: usize) -> String {
    format!("Phase_0{}", index + 1)
}

/// Render one level as a card panel.
///
/// The initial classes carry the pre-animation look: dimmed, shrunk and
/// pushed left (even index) or right (odd index).
pub fn render_level_card(level: &LevelRecord, index: usize) -> String {
    let color = escape_html(level.color);
    let origin = if index % 2 == 0 { "card-origin-left" } else { "card-origin-right" };
    let tags: String = level
        .tags
        .iter()
        .map(|tag| {
            format!(
                r#"<div class="tag-chip"><div class="tag-dot" style="background-color:{color}"></div><span>{}</span></div>"#,
                escape_html(tag)
            )
        })
        .collect();
    format!(
        concat!(
            r#"<div class="level-card {origin}" data-level-index="{index}">"#,
            r#"<div class="card-accent-glow" style="background-color:{color}"></div>"#,
            r#"<div class="card-accent-bar" style="background-color:{color}"></div>"#,
            r#"<div class="card-body">"#,
            r#"<div class="card-header">"#,
            r#"<div class="card-icon" style="background-color:{color}15;color:{color};border:1px solid {color}30;box-shadow:0 0 20px {color}20">{icon}</div>"#,
            r#"<span class="card-phase">{phase}</span>"#,
            r#"</div>"#,
            r#"<h3 class="card-title">{title}</h3>"#,
            r#"<p class="card-subtitle" style="color:{color}">{subtitle}</p>"#,
            r#"<p class="card-description">{description}</p>"#,
            r#"<div class="card-tags">{tags}</div>"#,
            r#"</div>"#,
            r#"<span class="card-index">{number}</span>"#,
            r#"</div>"#
        ),
        origin = origin,
        index = index,
        color = color,
        icon = icons::glyph(level.icon, "icon-lg"),
        phase = phase_label(index),
        title = escape_html(level.title),
        subtitle = escape_html(level.subtitle),
        description = escape_html(level.description),
        tags = tags,
        number = index + 1,
    )
}

/// Absolutely positioned row holding a card and its waypoint dot.
pub fn render_card_slot(level: &LevelRecord, index: usize, scale: ScaleFactor) -> String {
    let row = if index % 2 == 0 { "slot-row" } else { "slot-row-reverse" };
    format!(
        concat!(
            r#"<div class="card-slot {row}" data-slot-index="{index}" style="top:{top:.2}px">"#,
            r#"<div class="card-column">{card}</div>"#,
            r#"<div class="waypoint"><div class="waypoint-dot" data-dot-index="{index}"></div></div>"#,
            r#"<div class="card-spacer"></div>"#,
            r#"</div>"#
        ),
        row = row,
        index = index,
        top = card_top(index, scale),
        card = render_level_card(level, index),
    )
}

/// The roadmap SVG: guide, flow and drawn paths, gradient and glow filters,
/// and the marker group.
pub fn render_roadmap_svg(path_d: &str) -> String {
    let d = escape_html(path_d);
    let stops: String = GRADIENT_BASE_STOPS
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let offset = i * 100 / (GRADIENT_BASE_STOPS.len() - 1).max(1);
            format!(r#"<stop offset="{offset}%" stop-color="{c}"/>"#)
        })
        .collect();
    format!(
        concat!(
            r#"<svg class="roadmap-svg" viewBox="0 0 {w} {h}" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r##"<path class="guide-path" d="{d}" stroke="#111" stroke-width="8" stroke-linecap="round"/>"##,
            r#"<path class="data-flow-path" d="{d}" stroke="rgba(255,255,255,0.1)" stroke-width="2" stroke-dasharray="{dash} {gap}" stroke-linecap="round"/>"#,
            r#"<path class="roadmap-path" d="{d}" stroke="url(#roadmap-gradient)" stroke-width="5" stroke-linecap="round" filter="url(#path-glow)"/>"#,
            r#"<defs>"#,
            r#"<linearGradient id="roadmap-gradient" x1="0%" y1="0%" x2="0%" y2="100%">{stops}</linearGradient>"#,
            r#"<filter id="path-glow" x="-20%" y="-20%" width="140%" height="140%"><feGaussianBlur class="path-glow-blur" stdDeviation="3" result="coloredBlur"/><feMerge><feMergeNode in="coloredBlur"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"#,
            r#"<filter id="marker-glow" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="5" result="coloredBlur"/><feMerge><feMergeNode in="coloredBlur"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"#,
            r#"</defs>"#,
            r#"<g class="roadmap-marker">"#,
            r#"<circle r="10" fill="white" filter="url(#marker-glow)"/>"#,
            r#"<circle r="20" fill="white" fill-opacity="0.05" stroke="white" stroke-width="0.5" stroke-dasharray="3 2"/>"#,
            r#"<path d="M -25 0 L 25 0 M 0 -25 L 0 25" stroke="white" stroke-width="0.5" opacity="0.15"/>"#,
            r#"</g>"#,
            r#"</svg>"#
        ),
        w = INTRINSIC_WIDTH,
        h = INTRINSIC_HEIGHT,
        d = d,
        dash = FLOW_DASH,
        gap = FLOW_GAP,
        stops = stops,
    )
}

/// Full roadmap body: SVG layer plus the card layer.
pub fn render_roadmap(levels: &[LevelRecord], path_d: &str) -> String {
    let slots: String = levels
        .iter()
        .enumerate()
        .map(|(i, level)| render_card_slot(level, i, ScaleFactor::IDENTITY))
        .collect();
    format!(
        r#"<div class="roadmap-svg-layer">{}</div><div class="roadmap-card-layer">{}</div>"#,
        render_roadmap_svg(path_d),
        slots
    )
}
