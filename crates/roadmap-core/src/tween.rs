//! Small tweening primitives: one-shot eased tweens, perpetual cycles and
//! stagger offsets.

use crate::color::Rgba;
use crate::ease::Ease;

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Rgba {
    fn lerp(self, other: Self, t: f64) -> Self {
        Rgba::lerp(self, other, t)
    }
}

/// One-shot tween from `from` to `to`.
#[derive(Clone, Copy, Debug)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    duration: f64,
    ease: Ease,
    elapsed: f64,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            ease,
            elapsed: 0.0,
        }
    }

    /// A finished tween resting on `value`.
    pub fn settled(value: T) -> Self {
        Self::new(value, value, 0.0, Ease::Linear)
    }

    pub fn advance(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    pub fn value(&self) -> T {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = self.elapsed / self.duration;
        self.from.lerp(self.to, self.ease.apply(t))
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Replace the tween, starting from wherever the current one is right now.
    pub fn retarget(&mut self, to: T, duration: f64, ease: Ease) {
        *self = Self::new(self.value(), to, duration, ease);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoopMode {
    /// Jump back to the start after each pass.
    Restart,
    /// Alternate forward and backward passes.
    Yoyo,
}

/// A perpetual repeating animation pass, sampled by elapsed time.
#[derive(Clone, Copy, Debug)]
pub struct Cycle {
    /// Length of one pass in seconds.
    pub period: f64,
    /// Time before the first pass starts; the value holds at 0 until then.
    pub delay: f64,
    pub mode: LoopMode,
    pub ease: Ease,
}

impl Cycle {
    pub fn new(period: f64, mode: LoopMode, ease: Ease) -> Self {
        Self {
            period,
            delay: 0.0,
            mode,
            ease,
        }
    }

    pub fn with_delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    /// Eased fraction of the current pass in [0, 1].
    pub fn sample(&self, elapsed: f64) -> f64 {
        if self.period <= 0.0 {
            return 0.0;
        }
        let local = (elapsed - self.delay).max(0.0) / self.period;
        let raw = match self.mode {
            LoopMode::Restart => local.fract(),
            LoopMode::Yoyo => {
                let pass = local.floor() as u64;
                let f = local.fract();
                if pass % 2 == 0 {
                    f
                } else {
                    1.0 - f
                }
            }
        };
        self.ease.apply(raw)
    }
}

/// Start delays for `count` items spreading `amount` seconds outward from the
/// middle item(s).
pub fn stagger_from_center(count: usize, amount: f64) -> Vec<f64> {
    if count <= 1 {
        return vec![0.0; count];
    }
    let center = (count - 1) as f64 / 2.0;
    let max_distance = center;
    (0..count)
        .map(|i| {
            let distance = (i as f64 - center).abs();
            if max_distance > 0.0 {
                amount * distance / max_distance
            } else {
                0.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retarget_starts_from_current_value() {
        let mut t = Tween::new(0.0, 10.0, 1.0, Ease::Linear);
        t.advance(0.5);
        t.retarget(0.0, 1.0, Ease::Linear);
        assert!((t.value() - 5.0).abs() < 1e-9);
        t.advance(2.0);
        assert!(t.is_done());
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn yoyo_reverses_on_odd_passes() {
        let c = Cycle::new(2.0, LoopMode::Yoyo, Ease::Linear);
        assert!((c.sample(1.0) - 0.5).abs() < 1e-9);
        assert!((c.sample(3.0) - 0.5).abs() < 1e-9);
        assert!((c.sample(2.5) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn center_stagger_for_three() {
        assert_eq!(stagger_from_center(3, 1.0), vec![1.0, 0.0, 1.0]);
        assert_eq!(stagger_from_center(1, 1.0), vec![0.0]);
    }
}
