use std::collections::VecDeque;

use crate::{DragAxis, GestureConfig, Position};

/// One recorded pointer sample.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub position: Position,
    pub ts_ms: u64,
}

/// A short, newest-first history of pointer samples used for velocity estimation.
///
/// The history is bounded by both age and count, so registering a sample costs
/// `O(max_samples)` regardless of how long the gesture lasts.
#[derive(Clone, Debug, Default)]
pub struct MoveHistory {
    moves: VecDeque<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn newest(&self) -> Option<&Move> {
        self.moves.front()
    }

    pub fn oldest(&self) -> Option<&Move> {
        self.moves.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// Prepends a sample and drops samples that are too old or beyond the count limit.
    pub fn register_move(&mut self, position: Position, now_ms: u64, config: &GestureConfig) {
        if let Some(newest) = self.moves.front() {
            if now_ms < newest.ts_ms {
                strace!(
                    now_ms,
                    newest = newest.ts_ms,
                    "ignoring sample older than the newest one"
                );
                return;
            }
        }
        self.moves.push_front(Move {
            position,
            ts_ms: now_ms,
        });
        self.prune(now_ms, config);
    }

    /// Drops samples outside the recency window (relative to `now_ms`) or beyond `max_samples`.
    pub fn prune(&mut self, now_ms: u64, config: &GestureConfig) {
        let max = config.max_samples.max(1);
        self.moves.truncate(max);
        while let Some(oldest) = self.moves.back() {
            if now_ms.saturating_sub(oldest.ts_ms) < config.history_window_ms {
                break;
            }
            self.moves.pop_back();
        }
    }

    /// Horizontal velocity in px/ms between the newest and oldest retained samples.
    ///
    /// Clamped to `±config.velocity_clamp`. Returns 0 with fewer than two samples or when they
    /// share a timestamp.
    pub fn velocity(&self, config: &GestureConfig) -> f64 {
        let (Some(newest), Some(oldest)) = (self.moves.front(), self.moves.back()) else {
            return 0.0;
        };
        if self.moves.len() < 2 {
            return 0.0;
        }
        let time = newest.ts_ms.saturating_sub(oldest.ts_ms);
        if time == 0 {
            return 0.0;
        }
        let distance = newest.position.x - oldest.position.x;
        let v = distance / time as f64;
        if !v.is_finite() {
            return 0.0;
        }
        let clamp = config.velocity_clamp.abs();
        v.clamp(-clamp, clamp)
    }
}

/// Per-touch working data, created on touch start and dropped on touch end/cancel.
#[derive(Clone, Debug)]
pub(crate) struct GestureSession {
    pub(crate) origin: Position,
    pub(crate) moves: MoveHistory,
    /// List position when the touch started.
    pub(crate) start_position: f64,
    pub(crate) axis: DragAxis,
    /// Set once horizontal movement exceeded the move threshold; never cleared.
    pub(crate) dragging: bool,
}

impl GestureSession {
    pub(crate) fn new(
        origin: Position,
        start_position: f64,
        now_ms: u64,
        config: &GestureConfig,
    ) -> Self {
        let mut moves = MoveHistory::new();
        moves.register_move(origin, now_ms, config);
        Self {
            origin,
            moves,
            start_position,
            axis: DragAxis::Undecided,
            dragging: false,
        }
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.axis == DragAxis::Vertical
    }

    /// Classifies the gesture from the total displacement since the origin.
    ///
    /// The first decisive sample wins; a session never changes axis afterwards.
    pub(crate) fn classify(&mut self, position: Position, config: &GestureConfig) -> DragAxis {
        let movement_x = (position.x - self.origin.x).abs();
        let movement_y = (position.y - self.origin.y).abs();

        if self.axis == DragAxis::Undecided {
            if movement_y > movement_x {
                self.axis = DragAxis::Vertical;
            } else if movement_x > movement_y {
                self.axis = DragAxis::Horizontal;
            }
        }
        if self.axis == DragAxis::Horizontal && movement_x > config.move_threshold {
            self.dragging = true;
        }
        self.axis
    }
}
