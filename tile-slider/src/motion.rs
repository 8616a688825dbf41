use crate::{Easing, FrameHandle, MotionConfig};

/// Where a motion is heading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum MotionKind {
    /// Eased interpolation towards a fixed tile.
    Snap {
        from: f64,
        to: f64,
        target_index: i64,
        duration_ms: f64,
        easing: Easing,
    },
    /// Velocity decay after a fast release; hands off to a `Snap` when slow enough.
    Glide {
        /// Release speed in px/frame (positive moves the list right).
        velocity: f64,
        duration_ms: f64,
    },
}

/// Working data of the single active animation.
///
/// Mutated only while advancing frames; the discrete slide state is updated separately and only
/// when the nearest tile changes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MotionFrame {
    pub(crate) handle: FrameHandle,
    pub(crate) kind: MotionKind,
    /// Stamped on the first frame for programmatic motions.
    pub(crate) started_ms: Option<u64>,
    pub(crate) last_ms: Option<u64>,
    pub(crate) last_rendered_index: i64,
}

/// Outcome of advancing a motion by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Step {
    /// Still moving; `nearest` is the tile closest to `position`.
    Moving { position: f64, nearest: i64 },
    /// Arrived; the target index must be committed.
    Done { position: f64, target_index: i64 },
}

/// Geometry needed to turn pixels into tile indexes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Track {
    pub(crate) tile_width: f64,
    /// Inclusive index bounds for non-wrapping modes.
    pub(crate) bounds: Option<(i64, i64)>,
}

impl Track {
    pub(crate) fn position_of(&self, index: i64) -> f64 {
        -(index as f64) * self.tile_width
    }

    /// Index at `position` using `round` (e.g. `f64::round`, `f64::floor`, `f64::ceil`).
    pub(crate) fn index_at(&self, position: f64, round: fn(f64) -> f64, fallback: i64) -> i64 {
        if self.tile_width <= 0.0 || !position.is_finite() {
            return self.clamp(fallback);
        }
        self.clamp(round(-position / self.tile_width) as i64)
    }

    pub(crate) fn clamp(&self, index: i64) -> i64 {
        match self.bounds {
            Some((min, max)) => index.clamp(min, max.max(min)),
            None => index,
        }
    }

    pub(crate) fn clamp_position(&self, position: f64, overshoot: f64) -> f64 {
        match self.bounds {
            Some((min, max)) => {
                let hi = self.position_of(min) + overshoot;
                let lo = self.position_of(max.max(min)) - overshoot;
                position.clamp(lo, hi)
            }
            None => position,
        }
    }
}

impl MotionFrame {
    pub(crate) fn new(handle: FrameHandle, kind: MotionKind, current_index: i64) -> Self {
        Self {
            handle,
            kind,
            started_ms: None,
            last_ms: None,
            last_rendered_index: current_index,
        }
    }

    /// Advances the motion to `now_ms`.
    ///
    /// `position` is the current list position, which glides integrate from.
    pub(crate) fn advance(
        &mut self,
        now_ms: u64,
        position: f64,
        track: &Track,
        config: &MotionConfig,
    ) -> Step {
        let started = *self.started_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(started) as f64;
        let frame_dt = now_ms.saturating_sub(self.last_ms.unwrap_or(now_ms)) as f64;
        self.last_ms = Some(now_ms);

        match self.kind {
            MotionKind::Snap {
                from,
                to,
                target_index,
                duration_ms,
                easing,
            } => {
                if elapsed >= duration_ms {
                    return Step::Done {
                        position: to,
                        target_index,
                    };
                }
                let position = easing.ease(elapsed, from, to - from, duration_ms);
                Step::Moving {
                    position,
                    nearest: track.index_at(position, f64::round, target_index),
                }
            }
            MotionKind::Glide {
                velocity,
                duration_ms,
            } => {
                let speed = Easing::EaseOutQuartic.ease(elapsed, velocity, -velocity, duration_ms);
                let frames = if config.frame_ms > 0.0 {
                    frame_dt / config.frame_ms
                } else {
                    0.0
                };
                let mut next = position + speed * frames;

                // Ahead boundary: moving right (positive) lowers the index.
                let ahead: fn(f64) -> f64 = if velocity > 0.0 { f64::floor } else { f64::ceil };
                let fallback = self.last_rendered_index;
                let clamped = track.clamp_position(next, 0.0);
                let hit_edge = clamped != next;
                next = clamped;

                if hit_edge || speed.abs() < config.blend_velocity || elapsed >= duration_ms {
                    let target_index = track.index_at(next, ahead, fallback);
                    let to = track.position_of(target_index);
                    let distance = to - next;
                    let duration_ms = blend_duration(distance, speed, config);
                    strace!(
                        target_index,
                        distance,
                        duration_ms,
                        "glide hands off to snap"
                    );
                    self.kind = MotionKind::Snap {
                        from: next,
                        to,
                        target_index,
                        duration_ms,
                        easing: Easing::EaseOutCubic,
                    };
                    self.started_ms = Some(now_ms);
                    if distance == 0.0 {
                        return Step::Done {
                            position: to,
                            target_index,
                        };
                    }
                }

                Step::Moving {
                    position: next,
                    nearest: track.index_at(next, ahead, fallback),
                }
            }
        }
    }
}

/// Picks a snap duration whose initial speed matches the glide speed at hand-off.
fn blend_duration(distance: f64, speed_px_per_frame: f64, config: &MotionConfig) -> f64 {
    let min = config.blend_min_duration_ms as f64;
    let max = config.blend_max_duration_ms.max(config.blend_min_duration_ms) as f64;
    let speed = if config.frame_ms > 0.0 {
        speed_px_per_frame.abs() / config.frame_ms
    } else {
        0.0
    };
    if speed <= 0.0 {
        return max;
    }
    // Cubic ease-out starts at 3 * distance / duration.
    let slope = Easing::EaseOutCubic.initial_slope(distance.abs(), 1.0);
    (slope / speed).clamp(min, max)
}

/// Glide duration for a release speed (px/frame): `base + v² / divisor`, bounded.
pub(crate) fn glide_duration(velocity: f64, config: &MotionConfig) -> f64 {
    let divisor = if config.glide_duration_divisor > 0.0 {
        config.glide_duration_divisor
    } else {
        1.0
    };
    let total = config.glide_base_duration_ms as f64 + velocity * velocity / divisor;
    total.min(config.glide_max_duration_ms.max(config.glide_base_duration_ms) as f64)
}
