//! Scroll-independent loops: flow dashes, breathing glow, gradient cycling.

use crate::color::Rgba;
use crate::constants::{
    FLOW_DASH, FLOW_GAP, FLOW_LOOP_SEC, GLOW_HALF_PERIOD_SEC, GLOW_STD_DEV_MAX, GLOW_STD_DEV_MIN,
    GRADIENT_BASE_STOPS, GRADIENT_CYCLE_STOPS, GRADIENT_HALF_PERIOD_SEC,
    GRADIENT_STAGGER_AMOUNT_SEC,
};
use crate::ease::Ease;
use crate::tween::{stagger_from_center, Cycle, LoopMode};

/// Length of one dash + gap on the flow path.
pub const FLOW_DASH_PERIOD: f64 = FLOW_DASH + FLOW_GAP;

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientFrame {
    pub flow_dash_offset: f64,
    pub glow_std_dev: f64,
    pub gradient_stops: Vec<Rgba>,
}

/// Owns its own clock; nothing scroll-driven touches it.
#[derive(Clone, Debug)]
pub struct Ambient {
    elapsed: f64,
    flow: Cycle,
    glow: Cycle,
    gradient: Vec<(Cycle, Rgba, Rgba)>,
}

impl Default for Ambient {
    fn default() -> Self {
        Self::new()
    }
}

impl Ambient {
    pub fn new() -> Self {
        let delays = stagger_from_center(GRADIENT_BASE_STOPS.len(), GRADIENT_STAGGER_AMOUNT_SEC);
        let gradient = GRADIENT_BASE_STOPS
            .iter()
            .zip(GRADIENT_CYCLE_STOPS.iter())
            .zip(delays)
            .map(|((base, cycled), delay)| {
                (
                    Cycle::new(GRADIENT_HALF_PERIOD_SEC, LoopMode::Yoyo, Ease::SineInOut)
                        .with_delay(delay),
                    Rgba::from_hex_or_transparent(base),
                    Rgba::from_hex_or_transparent(cycled),
                )
            })
            .collect();
        Self {
            elapsed: 0.0,
            flow: Cycle::new(FLOW_LOOP_SEC, LoopMode::Restart, Ease::Linear),
            glow: Cycle::new(GLOW_HALF_PERIOD_SEC, LoopMode::Yoyo, Ease::SineInOut),
            gradient,
        }
    }

    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt.max(0.0);
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn sample_at(&self, t: f64) -> AmbientFrame {
        AmbientFrame {
            // one full dash period per pass, so the wrap lands on an identical pattern
            flow_dash_offset: -FLOW_DASH_PERIOD * self.flow.sample(t),
            glow_std_dev: GLOW_STD_DEV_MIN
                + (GLOW_STD_DEV_MAX - GLOW_STD_DEV_MIN) * self.glow.sample(t),
            gradient_stops: self
                .gradient
                .iter()
                .map(|(cycle, base, cycled)| base.lerp(*cycled, cycle.sample(t)))
                .collect(),
        }
    }

    pub fn frame(&self) -> AmbientFrame {
        self.sample_at(self.elapsed)
    }
}
