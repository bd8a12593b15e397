/// Easing curves used by the roadmap and the page shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    /// Default tween ease (quadratic out).
    Power1Out,
    /// Cubic out.
    Power2Out,
    /// Quartic in-out; used for snapping.
    Power3InOut,
    ExpoOut,
    SineInOut,
    /// Overshoots the target by an amount controlled by `overshoot`, then settles.
    BackOut { overshoot: f64 },
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power3InOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            Self::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::SineInOut => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
            Self::BackOut { overshoot } => {
                let u = t - 1.0;
                u * u * ((overshoot + 1.0) * u + overshoot) + 1.0
            }
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self::Power1Out
    }
}
