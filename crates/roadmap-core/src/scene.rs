//! Roadmap choreographer: turns scroll and viewport events into per-frame
//! visual state for the path, the marker, the cards and the dots.

use kurbo::BezPath;

use crate::ambient::{Ambient, AmbientFrame};
use crate::color::Rgba;
use crate::config::RoadmapConfig;
use crate::constants::{SCRUB_SETTLE_EPSILON, SNAP_SELF_SCROLL_TOLERANCE_PX};
use crate::ease::Ease;
use crate::error::{RoadmapError, RoadmapResult};
use crate::geometry::{PathFrame, PathGeometry};
use crate::layout::{Layout, LayoutInput};
use crate::levels::LevelRecord;
use crate::session::Scene;
use crate::waypoints::{
    activation_windows, active_levels, nearest_snap_point, ActivationWindow, CardVisual,
    DotVisual, WaypointState,
};

/// Named inputs to the choreographer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    /// The roadmap is in the document and has been measured once.
    Mounted(LayoutInput),
    /// Window scroll position changed.
    ScrollChanged { scroll_y: f64 },
    /// Viewport changed size; carries fresh measurements.
    ViewportResized(LayoutInput),
}

/// Geometry-dependent writes, emitted only after a (re)layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutFrame {
    pub card_tops: Vec<f64>,
    pub section_height: f64,
    pub path_length: f64,
}

/// Everything the stage needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneFrame {
    pub path: PathFrame,
    pub cards: Vec<CardVisual>,
    pub dots: Vec<DotVisual>,
    pub ambient: AmbientFrame,
    pub layout: Option<LayoutFrame>,
    pub scroll_to: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum SnapState {
    Idle,
    Snapping {
        from: f64,
        to: f64,
        elapsed: f64,
        duration: f64,
    },
}

pub struct Choreographer {
    config: RoadmapConfig,
    path: BezPath,
    windows: Vec<ActivationWindow>,
    waypoints: Vec<WaypointState>,
    ambient: Ambient,
    geometry: Option<PathGeometry>,
    layout: Option<Layout>,
    layout_dirty: bool,
    scroll_y: f64,
    raw_progress: f64,
    playhead: f64,
    idle_for: f64,
    snap: SnapState,
    last_snap_request: Option<f64>,
}

impl Choreographer {
    pub fn new(levels: &[LevelRecord], path_d: &str, config: RoadmapConfig) -> RoadmapResult<Self> {
        if levels.is_empty() {
            return Err(RoadmapError::NoLevels);
        }
        let path =
            BezPath::from_svg(path_d).map_err(|e| RoadmapError::invalid_path(e.to_string()))?;
        // reject an undrawable path up front; the real geometry is built on mount
        PathGeometry::from_path(&path)?;
        let windows = activation_windows(levels.len(), config.window_width);
        let waypoints = levels
            .iter()
            .enumerate()
            .map(|(i, l)| WaypointState::new(i, Rgba::from_hex_or_transparent(l.color)))
            .collect();
        Ok(Self {
            config,
            path,
            windows,
            waypoints,
            ambient: Ambient::new(),
            geometry: None,
            layout: None,
            layout_dirty: false,
            scroll_y: 0.0,
            raw_progress: 0.0,
            playhead: 0.0,
            idle_for: 0.0,
            snap: SnapState::Idle,
            last_snap_request: None,
        })
    }

    pub fn level_count(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_mounted(&self) -> bool {
        self.geometry.is_some()
    }

    pub fn windows(&self) -> &[ActivationWindow] {
        &self.windows
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn geometry(&self) -> Option<&PathGeometry> {
        self.geometry.as_ref()
    }

    /// Scroll progress clamped to [0, 1].
    pub fn progress(&self) -> f64 {
        self.raw_progress.clamp(0.0, 1.0)
    }

    /// Scrub-smoothed progress that drives the marker and the stroke.
    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    pub fn ambient(&self) -> &Ambient {
        &self.ambient
    }

    pub fn active_indices(&self) -> Vec<usize> {
        self.waypoints
            .iter()
            .filter(|w| w.is_active())
            .map(|w| w.index)
            .collect()
    }

    /// Seconds since the last scroll that was not our own snap echo.
    pub fn idle_time(&self) -> f64 {
        self.idle_for
    }

    pub fn is_snapping(&self) -> bool {
        matches!(self.snap, SnapState::Snapping { .. })
    }

    /// Rebuild geometry, layout and trigger bounds from scratch.
    fn relayout(&mut self, input: LayoutInput) {
        let layout = Layout::compute(self.waypoints.len(), &input);
        let geometry = match PathGeometry::from_path(&self.path) {
            Ok(g) => g,
            Err(e) => {
                log::error!("[roadmap] geometry rebuild failed: {}", e);
                return;
            }
        };
        match &self.layout {
            Some(old) if old.scale.differs_from(layout.scale) => log::info!(
                "[roadmap] rescale {:.3} -> {:.3}",
                old.scale.get(),
                layout.scale.get()
            ),
            None => log::info!(
                "[roadmap] mounted: path length {:.1}, scale {:.3}",
                geometry.total_length(),
                layout.scale.get()
            ),
            _ => {}
        }
        // a snap aimed at the old layout would land on the wrong waypoint
        self.snap = SnapState::Idle;
        self.last_snap_request = None;
        self.geometry = Some(geometry);
        self.layout = Some(layout);
        self.layout_dirty = true;
        self.refresh_progress();
    }

    fn refresh_progress(&mut self) {
        let Some(layout) = &self.layout else {
            return;
        };
        self.raw_progress = layout.triggers.raw_progress(self.scroll_y);
        let active = active_levels(self.raw_progress, &self.windows);
        for wp in &mut self.waypoints {
            if wp.set_active(active.contains(&wp.index), &self.config) {
                log::debug!(
                    "[roadmap] level {} {}",
                    wp.index,
                    if wp.is_active() { "on" } else { "off" }
                );
            }
        }
    }

    fn on_scroll(&mut self, scroll_y: f64) {
        let self_induced = self
            .last_snap_request
            .map(|y| (y - scroll_y).abs() <= SNAP_SELF_SCROLL_TOLERANCE_PX)
            .unwrap_or(false);
        if !self_induced {
            // user input wins over an in-flight snap
            self.snap = SnapState::Idle;
            self.idle_for = 0.0;
        }
        if !self.is_snapping() {
            // the echo of the final snap step has arrived; later input is the user's
            self.last_snap_request = None;
        }
        self.scroll_y = scroll_y;
        self.refresh_progress();
    }

    fn step_snap(&mut self, dt: f64) -> Option<f64> {
        let layout = self.layout.as_ref()?;
        match self.snap {
            SnapState::Idle => {
                self.idle_for += dt;
                let inside = (0.0..=1.0).contains(&self.raw_progress);
                if !inside || self.idle_for < self.config.snap_delay {
                    return None;
                }
                let target = nearest_snap_point(self.raw_progress, self.waypoints.len());
                let distance = target - self.raw_progress;
                if distance.abs() < 1e-3 {
                    return None;
                }
                // a waypoint past the end of the document is reached as far as the browser allows
                let to = layout.clamp_scroll(layout.triggers.scroll_for(target));
                if (to - self.scroll_y).abs() <= SNAP_SELF_SCROLL_TOLERANCE_PX {
                    return None;
                }
                self.snap = SnapState::Snapping {
                    from: self.scroll_y,
                    to,
                    elapsed: 0.0,
                    duration: self.config.snap_duration(distance),
                };
                None
            }
            SnapState::Snapping {
                from,
                to,
                elapsed,
                duration,
            } => {
                let elapsed = (elapsed + dt).min(duration);
                let t = if duration > 0.0 { elapsed / duration } else { 1.0 };
                let y = from + (to - from) * Ease::Power3InOut.apply(t);
                self.snap = if elapsed >= duration {
                    SnapState::Idle
                } else {
                    SnapState::Snapping {
                        from,
                        to,
                        elapsed,
                        duration,
                    }
                };
                self.last_snap_request = Some(y);
                self.scroll_y = y;
                self.refresh_progress();
                Some(y)
            }
        }
    }

    fn step_scrub(&mut self, dt: f64) {
        let target = self.progress();
        let alpha = if self.config.scrub_tau > 0.0 {
            1.0 - (-dt / self.config.scrub_tau).exp()
        } else {
            1.0
        };
        self.playhead += (target - self.playhead) * alpha;
        if (target - self.playhead).abs() < SCRUB_SETTLE_EPSILON {
            self.playhead = target;
        }
    }

    /// Advance every clock by `dt` seconds and describe the result.
    ///
    /// Returns `None` until the roadmap has been mounted.
    pub fn step(&mut self, dt: f64) -> Option<SceneFrame> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.ambient.advance(dt);
        self.geometry.as_ref()?;

        let scroll_to = self.step_snap(dt);
        self.step_scrub(dt);
        for wp in &mut self.waypoints {
            wp.advance(dt);
        }

        let geometry = self.geometry.as_ref()?;
        let layout = if self.layout_dirty {
            self.layout_dirty = false;
            self.layout.as_ref().map(|l| LayoutFrame {
                card_tops: l.card_tops.clone(),
                section_height: l.section_height,
                path_length: geometry.total_length(),
            })
        } else {
            None
        };
        Some(SceneFrame {
            path: geometry.frame(self.playhead),
            cards: self.waypoints.iter().map(|w| w.card()).collect(),
            dots: self.waypoints.iter().map(|w| w.dot()).collect(),
            ambient: self.ambient.frame(),
            layout,
            scroll_to,
        })
    }
}

impl Scene for Choreographer {
    type Event = SceneEvent;
    type Frame = SceneFrame;

    fn handle(&mut self, event: SceneEvent) {
        match event {
            SceneEvent::Mounted(input) | SceneEvent::ViewportResized(input) => {
                self.relayout(input)
            }
            SceneEvent::ScrollChanged { scroll_y } => self.on_scroll(scroll_y),
        }
    }

    fn frame(&mut self, dt: f64) -> Option<SceneFrame> {
        self.step(dt)
    }
}
