//! Responsive layout: scale factor, card offsets and scroll trigger bounds.

use crate::constants::{
    INTRINSIC_WIDTH, ROADMAP_MIN_HEIGHT, SCALE_EPSILON, WAYPOINT_BASE_OFFSET, WAYPOINT_SPACING,
};

/// Rendered path width over its authored width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub const IDENTITY: ScaleFactor = ScaleFactor(1.0);

    /// Unusable measurements (zero, negative, NaN) fall back to identity.
    pub fn from_widths(rendered: f64, intrinsic: f64) -> Self {
        let s = rendered / intrinsic;
        if s.is_finite() && s > 0.0 {
            Self(s)
        } else {
            Self::IDENTITY
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn differs_from(self, other: ScaleFactor) -> bool {
        (self.0 - other.0).abs() > SCALE_EPSILON
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Vertical offset of card `index` inside the roadmap section.
#[inline]
pub fn card_top(index: usize, scale: ScaleFactor) -> f64 {
    (WAYPOINT_BASE_OFFSET + index as f64 * WAYPOINT_SPACING) * scale.get()
}

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Measurements taken from the page on mount and on every resize.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutInput {
    pub viewport: Viewport,
    /// Rendered width of the roadmap SVG.
    pub svg_width: f64,
    /// Document-space y of the roadmap section's top edge.
    pub section_top: f64,
    /// Document height below the roadmap section. `None` when unknown, in
    /// which case scroll targets are not capped.
    pub trailing_height: Option<f64>,
}

/// Scroll positions where the roadmap timeline starts and ends.
///
/// Start is "section top at viewport center", end is "section bottom at
/// viewport center".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerBounds {
    pub start: f64,
    pub end: f64,
}

impl TriggerBounds {
    pub fn center_to_center(section_top: f64, section_height: f64, viewport: Viewport) -> Self {
        let half = viewport.height / 2.0;
        Self {
            start: section_top - half,
            end: section_top + section_height - half,
        }
    }

    /// Unclamped progress; negative before the section, above 1 after it.
    pub fn raw_progress(&self, scroll_y: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return 0.0;
        }
        (scroll_y - self.start) / span
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        self.raw_progress(scroll_y).clamp(0.0, 1.0)
    }

    /// Scroll position at which the timeline sits at `progress`.
    pub fn scroll_for(&self, progress: f64) -> f64 {
        self.start + (self.end - self.start) * progress
    }
}

/// Derived layout for one viewport configuration. Always computed whole.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub scale: ScaleFactor,
    pub card_tops: Vec<f64>,
    pub section_height: f64,
    pub triggers: TriggerBounds,
    /// Largest scroll position the document allows once the section has
    /// this layout's height.
    pub max_scroll: Option<f64>,
}

impl Layout {
    pub fn compute(level_count: usize, input: &LayoutInput) -> Self {
        let scale = ScaleFactor::from_widths(input.svg_width, INTRINSIC_WIDTH);
        let card_tops = (0..level_count).map(|i| card_top(i, scale)).collect();
        let section_height = ROADMAP_MIN_HEIGHT * scale.get();
        let triggers =
            TriggerBounds::center_to_center(input.section_top, section_height, input.viewport);
        let max_scroll = input.trailing_height.map(|below| {
            (input.section_top + section_height + below - input.viewport.height).max(0.0)
        });
        Self {
            scale,
            card_tops,
            section_height,
            triggers,
            max_scroll,
        }
    }

    /// Clamp a scroll position to what the browser will actually honor.
    pub fn clamp_scroll(&self, y: f64) -> f64 {
        match self.max_scroll {
            Some(max) => y.clamp(0.0, max),
            None => y.max(0.0),
        }
    }
}
