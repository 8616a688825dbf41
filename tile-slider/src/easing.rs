/// Deterministic time → position curves used by snap and glide animations.
///
/// Every curve satisfies `ease(0, start, delta, d) == start` and
/// `ease(d, start, delta, d) == start + delta`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// Decelerating curve for deliberate snaps.
    #[default]
    EaseOutCubic,
    /// Stronger deceleration, used to settle momentum.
    EaseOutQuartic,
    /// Symmetric acceleration and deceleration.
    EaseInOut,
}

impl Easing {
    /// Samples the normalized curve at `t` in `[0, 1]`.
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Self::EaseOutQuartic => {
                let u = t - 1.0;
                1.0 - u * u * u * u
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = 2.0 * t - 1.0;
                    -0.5 * (u * (u - 2.0) - 1.0)
                }
            }
        }
    }

    /// Position after `elapsed` out of `duration`, moving from `start` by `delta`.
    ///
    /// `elapsed` is clamped to `[0, duration]`; a non-positive `duration` returns the end value.
    pub fn ease(self, elapsed: f64, start: f64, delta: f64, duration: f64) -> f64 {
        if duration <= 0.0 || !duration.is_finite() {
            return start + delta;
        }
        if elapsed >= duration {
            return start + delta;
        }
        start + delta * self.sample(elapsed / duration)
    }

    /// Initial slope of the curve in position units per time unit.
    ///
    /// Used to hand a coasting motion over to a snap without a visible speed jump.
    pub(crate) fn initial_slope(self, delta: f64, duration: f64) -> f64 {
        if duration <= 0.0 {
            return 0.0;
        }
        let k = match self {
            Self::Linear => 1.0,
            Self::EaseOutCubic => 3.0,
            Self::EaseOutQuartic => 4.0,
            Self::EaseInOut => 0.0,
        };
        k * delta / duration
    }
}

/// Cubic ease-out with the classic `(elapsed, start, delta, duration)` signature.
pub fn ease_out_cubic(elapsed: f64, start: f64, delta: f64, duration: f64) -> f64 {
    Easing::EaseOutCubic.ease(elapsed, start, delta, duration)
}

/// Quartic ease-out with the classic `(elapsed, start, delta, duration)` signature.
pub fn ease_out_quartic(elapsed: f64, start: f64, delta: f64, duration: f64) -> f64 {
    Easing::EaseOutQuartic.ease(elapsed, start, delta, duration)
}

/// Ease-in-out with the classic `(elapsed, start, delta, duration)` signature.
pub fn ease_in_out(elapsed: f64, start: f64, delta: f64, duration: f64) -> f64 {
    Easing::EaseInOut.ease(elapsed, start, delta, duration)
}
