//! Per-level waypoint windows and the visual state each waypoint animates
//! between.

use smallvec::SmallVec;

use crate::color::Rgba;
use crate::config::RoadmapConfig;
use crate::constants::{
    BASELINE_CARD_OPACITY, DOT_ACTIVE_BORDER, DOT_ACTIVE_SCALE, DOT_IDLE_BORDER, DOT_IDLE_COLOR,
    INACTIVE_CARD_BLUR_PX, INACTIVE_CARD_OFFSET_PX, INACTIVE_CARD_OPACITY, INACTIVE_CARD_SCALE,
};
use crate::ease::Ease;
use crate::tween::{Lerp, Tween};

/// Arc-length fraction where level `index` of `count` rests.
#[inline]
pub fn waypoint_fraction(index: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        index as f64 / (count - 1) as f64
    }
}

/// Progress values the timeline snaps to, one per level.
pub fn snap_points(count: usize) -> Vec<f64> {
    (0..count).map(|i| waypoint_fraction(i, count)).collect()
}

/// Snap point closest to `progress`.
pub fn nearest_snap_point(progress: f64, count: usize) -> f64 {
    snap_points(count)
        .into_iter()
        .min_by(|a, b| (a - progress).abs().total_cmp(&(b - progress).abs()))
        .unwrap_or(0.0)
}

/// Range of progress during which one level is highlighted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivationWindow {
    pub center: f64,
    pub width: f64,
}

impl ActivationWindow {
    pub fn lo(&self) -> f64 {
        self.center - self.width / 2.0
    }

    pub fn hi(&self) -> f64 {
        self.center + self.width / 2.0
    }

    pub fn contains(&self, progress: f64) -> bool {
        progress >= self.lo() && progress <= self.hi()
    }
}

pub fn activation_windows(count: usize, width: f64) -> Vec<ActivationWindow> {
    (0..count)
        .map(|i| ActivationWindow {
            center: waypoint_fraction(i, count),
            width,
        })
        .collect()
}

/// Indices whose window contains `progress`.
pub fn active_levels(progress: f64, windows: &[ActivationWindow]) -> SmallVec<[usize; 2]> {
    windows
        .iter()
        .enumerate()
        .filter(|(_, w)| w.contains(progress))
        .map(|(i, _)| i)
        .collect()
}

/// Animated card properties.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardVisual {
    pub opacity: f64,
    pub scale: f64,
    pub offset_x: f64,
    pub blur_px: f64,
}

impl Lerp for CardVisual {
    fn lerp(self, o: Self, t: f64) -> Self {
        Self {
            opacity: self.opacity.lerp(o.opacity, t),
            scale: self.scale.lerp(o.scale, t),
            offset_x: self.offset_x.lerp(o.offset_x, t),
            blur_px: self.blur_px.lerp(o.blur_px, t),
        }
    }
}

/// Even cards rest to the left, odd cards to the right.
#[inline]
pub fn parity_offset(index: usize) -> f64 {
    if index % 2 == 0 {
        -INACTIVE_CARD_OFFSET_PX
    } else {
        INACTIVE_CARD_OFFSET_PX
    }
}

impl CardVisual {
    /// Pre-animation state, matching the card's initial classes.
    pub fn baseline(index: usize) -> Self {
        Self {
            opacity: BASELINE_CARD_OPACITY,
            scale: INACTIVE_CARD_SCALE,
            offset_x: parity_offset(index),
            blur_px: 0.0,
        }
    }

    pub fn active() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            offset_x: 0.0,
            blur_px: 0.0,
        }
    }

    pub fn inactive(index: usize) -> Self {
        Self {
            opacity: INACTIVE_CARD_OPACITY,
            scale: INACTIVE_CARD_SCALE,
            offset_x: parity_offset(index),
            blur_px: INACTIVE_CARD_BLUR_PX,
        }
    }
}

/// Animated waypoint dot properties.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotVisual {
    pub background: Rgba,
    pub scale: f64,
    pub glow: Rgba,
    pub border: Rgba,
}

impl Lerp for DotVisual {
    fn lerp(self, o: Self, t: f64) -> Self {
        Self {
            background: self.background.lerp(o.background, t),
            scale: self.scale.lerp(o.scale, t),
            glow: self.glow.lerp(o.glow, t),
            border: self.border.lerp(o.border, t),
        }
    }
}

impl DotVisual {
    pub fn idle() -> Self {
        Self {
            background: Rgba::from_hex_or_transparent(DOT_IDLE_COLOR),
            scale: 1.0,
            glow: Rgba::TRANSPARENT,
            border: Rgba::from_hex_or_transparent(DOT_IDLE_BORDER),
        }
    }

    pub fn active(accent: Rgba) -> Self {
        Self {
            background: accent,
            scale: DOT_ACTIVE_SCALE,
            glow: accent,
            border: Rgba::from_hex_or_transparent(DOT_ACTIVE_BORDER),
        }
    }
}

/// Live state of one level's card and dot.
#[derive(Clone, Debug)]
pub struct WaypointState {
    pub index: usize,
    pub accent: Rgba,
    active: bool,
    card: Tween<CardVisual>,
    dot: Tween<DotVisual>,
}

impl WaypointState {
    pub fn new(index: usize, accent: Rgba) -> Self {
        Self {
            index,
            accent,
            active: false,
            card: Tween::settled(CardVisual::baseline(index)),
            dot: Tween::settled(DotVisual::idle()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Move toward the active or inactive look. Returns whether the state flipped.
    pub fn set_active(&mut self, active: bool, config: &RoadmapConfig) -> bool {
        if active == self.active {
            return false;
        }
        self.active = active;
        if active {
            self.card.retarget(
                CardVisual::active(),
                config.activate_duration,
                Ease::BackOut {
                    overshoot: config.activate_overshoot,
                },
            );
            self.dot
                .retarget(DotVisual::active(self.accent), config.dot_duration, Ease::default());
        } else {
            self.card.retarget(
                CardVisual::inactive(self.index),
                config.deactivate_duration,
                Ease::default(),
            );
            self.dot
                .retarget(DotVisual::idle(), config.dot_duration, Ease::default());
        }
        true
    }

    pub fn advance(&mut self, dt: f64) {
        self.card.advance(dt);
        self.dot.advance(dt);
    }

    pub fn card(&self) -> CardVisual {
        self.card.value()
    }

    pub fn dot(&self) -> DotVisual {
        self.dot.value()
    }
}
