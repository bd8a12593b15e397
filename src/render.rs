//! Stages: apply scene frames to owned element handles and put everything
//! back on teardown.

use crate::constants::DOT_GLOW_RADIUS_PX;
use crate::dom::{set_attr, set_style};
use roadmap_core::shell::{HeroStyle, ShellFrame};
use roadmap_core::{CardVisual, DotVisual, SceneFrame, Stage};
use web_sys as web;

/// Inline state of one element as it was before any animation touched it.
struct Snapshot {
    element: web::Element,
    style: Option<String>,
    attrs: Vec<(&'static str, Option<String>)>,
}

impl Snapshot {
    fn take(element: &web::Element, attrs: &[&'static str]) -> Self {
        Self {
            element: element.clone(),
            style: element.get_attribute("style"),
            attrs: attrs
                .iter()
                .map(|name| (*name, element.get_attribute(name)))
                .collect(),
        }
    }

    fn restore(&self) {
        restore_attr(&self.element, "style", self.style.as_deref());
        for (name, value) in &self.attrs {
            restore_attr(&self.element, name, value.as_deref());
        }
    }
}

fn restore_attr(el: &web::Element, name: &str, value: Option<&str>) {
    match value {
        Some(v) => {
            _ = el.set_attribute(name, v);
        }
        None => {
            _ = el.remove_attribute(name);
        }
    }
}

/// Element handles for the roadmap, indexed by level where it applies.
pub struct RoadmapHandles {
    pub section: web::HtmlElement,
    pub svg: web::Element,
    pub path: web::Element,
    pub flow_path: web::Element,
    pub glow_blur: web::Element,
    pub gradient_stops: Vec<web::Element>,
    pub marker: web::Element,
    pub slots: Vec<web::HtmlElement>,
    pub cards: Vec<web::HtmlElement>,
    pub dots: Vec<web::HtmlElement>,
}

pub struct RoadmapStage {
    handles: RoadmapHandles,
    baseline: Vec<Snapshot>,
}

impl RoadmapStage {
    pub fn new(handles: RoadmapHandles) -> Self {
        let mut baseline = vec![
            Snapshot::take(&handles.section, &[]),
            Snapshot::take(&handles.path, &["stroke-dasharray", "stroke-dashoffset"]),
            Snapshot::take(&handles.flow_path, &["stroke-dashoffset"]),
            Snapshot::take(&handles.glow_blur, &["stdDeviation"]),
            Snapshot::take(&handles.marker, &["transform"]),
        ];
        baseline.extend(
            handles
                .gradient_stops
                .iter()
                .map(|s| Snapshot::take(s, &["stop-color"])),
        );
        for el in handles.slots.iter().chain(&handles.cards).chain(&handles.dots) {
            baseline.push(Snapshot::take(el, &[]));
        }
        Self { handles, baseline }
    }

    fn apply_card(el: &web::HtmlElement, v: &CardVisual) {
        set_style(el, "opacity", &format!("{:.4}", v.opacity));
        set_style(
            el,
            "transform",
            &format!("translate3d({:.2}px, 0, 0) scale({:.4})", v.offset_x, v.scale),
        );
        set_style(el, "filter", &format!("blur({:.2}px)", v.blur_px));
    }

    fn apply_dot(el: &web::HtmlElement, v: &DotVisual) {
        set_style(el, "background-color", &v.background.to_css());
        set_style(el, "transform", &format!("scale({:.4})", v.scale));
        set_style(
            el,
            "box-shadow",
            &format!("0 0 {}px {}", DOT_GLOW_RADIUS_PX, v.glow.to_css()),
        );
        set_style(el, "border-color", &v.border.to_css());
    }
}

impl Stage<SceneFrame> for RoadmapStage {
    fn apply(&mut self, frame: &SceneFrame) {
        let h = &self.handles;

        if let Some(layout) = &frame.layout {
            set_style(&h.section, "min-height", &format!("{:.2}px", layout.section_height));
            for (slot, top) in h.slots.iter().zip(&layout.card_tops) {
                set_style(slot, "top", &format!("{:.2}px", top));
            }
            set_attr(&h.path, "stroke-dasharray", &format!("{:.3}", layout.path_length));
        }

        // marker and stroke come from the same PathFrame
        let m = frame.path.marker;
        set_attr(
            &h.marker,
            "transform",
            &format!(
                "translate({:.3} {:.3}) rotate({:.3})",
                m.point.x, m.point.y, m.angle_deg
            ),
        );
        set_attr(&h.path, "stroke-dashoffset", &format!("{:.3}", frame.path.dash_offset));

        for (el, v) in h.cards.iter().zip(&frame.cards) {
            Self::apply_card(el, v);
        }
        for (el, v) in h.dots.iter().zip(&frame.dots) {
            Self::apply_dot(el, v);
        }

        let a = &frame.ambient;
        set_attr(&h.flow_path, "stroke-dashoffset", &format!("{:.3}", a.flow_dash_offset));
        set_attr(&h.glow_blur, "stdDeviation", &format!("{:.3}", a.glow_std_dev));
        for (stop, color) in h.gradient_stops.iter().zip(&a.gradient_stops) {
            set_attr(stop, "stop-color", &color.to_css());
        }

        if let Some(y) = frame.scroll_to {
            if let Some(w) = web::window() {
                w.scroll_to_with_x_and_y(0.0, y);
            }
        }
    }

    fn revert(&mut self) {
        for s in &self.baseline {
            s.restore();
        }
        log::info!("[roadmap] reverted {} elements", self.baseline.len());
    }
}

/// Hero entrance targets and the drifting background grid.
pub struct ShellStage {
    hero: Vec<web::HtmlElement>,
    grid: web::HtmlElement,
    baseline: Vec<Snapshot>,
}

impl ShellStage {
    pub fn new(hero: Vec<web::HtmlElement>, grid: web::HtmlElement) -> Self {
        let baseline = hero
            .iter()
            .chain(std::iter::once(&grid))
            .map(|el| Snapshot::take(el, &[]))
            .collect();
        Self {
            hero,
            grid,
            baseline,
        }
    }

    fn apply_hero(el: &web::HtmlElement, s: &HeroStyle) {
        set_style(el, "opacity", &format!("{:.4}", s.opacity));
        set_style(
            el,
            "transform",
            &format!("translate({:.2}px, {:.2}px) scale({:.4})", s.x, s.y, s.scale),
        );
    }
}

impl Stage<ShellFrame> for ShellStage {
    fn apply(&mut self, frame: &ShellFrame) {
        if let Some(styles) = &frame.hero {
            for (el, s) in self.hero.iter().zip(styles) {
                Self::apply_hero(el, s);
            }
        }
        set_style(
            &self.grid,
            "background-position",
            &format!("0 {:.2}px", frame.grid_offset_y),
        );
    }

    fn revert(&mut self) {
        for s in &self.baseline {
            s.restore();
        }
        log::info!("[shell] reverted");
    }
}
