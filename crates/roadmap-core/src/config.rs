use crate::constants::{
    ACTIVATE_DURATION_SEC, ACTIVATE_OVERSHOOT, ACTIVATION_WINDOW_WIDTH, DEACTIVATE_DURATION_SEC,
    DOT_DURATION_SEC, SCRUB_TAU_SEC, SNAP_DELAY_SEC, SNAP_DURATION_MAX_SEC,
    SNAP_DURATION_MIN_SEC, SNAP_PROGRESS_PER_SEC,
};

/// Choreography timings. `Default` uses the values in [`crate::constants`].
#[derive(Clone, Debug, PartialEq)]
pub struct RoadmapConfig {
    pub window_width: f64,
    pub scrub_tau: f64,
    pub snap_delay: f64,
    pub snap_duration_min: f64,
    pub snap_duration_max: f64,
    pub snap_progress_per_sec: f64,
    pub activate_duration: f64,
    pub activate_overshoot: f64,
    pub deactivate_duration: f64,
    pub dot_duration: f64,
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            window_width: ACTIVATION_WINDOW_WIDTH,
            scrub_tau: SCRUB_TAU_SEC,
            snap_delay: SNAP_DELAY_SEC,
            snap_duration_min: SNAP_DURATION_MIN_SEC,
            snap_duration_max: SNAP_DURATION_MAX_SEC,
            snap_progress_per_sec: SNAP_PROGRESS_PER_SEC,
            activate_duration: ACTIVATE_DURATION_SEC,
            activate_overshoot: ACTIVATE_OVERSHOOT,
            deactivate_duration: DEACTIVATE_DURATION_SEC,
            dot_duration: DOT_DURATION_SEC,
        }
    }
}

impl RoadmapConfig {
    /// Snap travel time for a progress distance, bounded to the configured range.
    pub fn snap_duration(&self, distance: f64) -> f64 {
        let raw = if self.snap_progress_per_sec > 0.0 {
            distance.abs() / self.snap_progress_per_sec
        } else {
            self.snap_duration_max
        };
        raw.clamp(self.snap_duration_min, self.snap_duration_max)
    }
}
