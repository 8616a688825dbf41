use crate::circular::circular_index;
use crate::{CycleMode, Slot};

/// Inputs of the windowing calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowParams {
    /// Collection length.
    pub count: usize,
    /// Whole tiles per view, used for index math and the single-page check.
    pub tiles: usize,
    /// Slots occupied by the viewport (`ceil(tiles_to_show)`, at least `tiles`).
    pub viewport_slots: usize,
    pub overscan: usize,
    pub cycle_mode: CycleMode,
    pub index: i64,
    pub from_index: i64,
    pub to_index: i64,
    pub sliding: bool,
}

/// The contiguous range of logical slots to materialize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileWindow {
    /// First materialized logical slot.
    pub start: i64,
    /// Number of materialized slots.
    pub len: usize,
    pub left_overscan: usize,
    pub right_overscan: usize,
    /// First visible slot.
    pub visible_start: i64,
    /// One past the last visible slot.
    pub visible_end: i64,
    pub count: usize,
}

impl TileWindow {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last materialized slot.
    pub fn end(&self) -> i64 {
        self.start.saturating_add_unsigned(self.len as u64)
    }

    pub fn is_visible(&self, slot: i64) -> bool {
        slot >= self.visible_start && slot < self.visible_end
    }

    pub fn visible_len(&self) -> usize {
        let start = self.visible_start.max(self.start);
        let end = self.visible_end.min(self.end());
        usize::try_from(end.saturating_sub(start)).unwrap_or(0)
    }

    pub fn slot(&self, index: i64) -> Option<Slot> {
        if index < self.start || index >= self.end() {
            return None;
        }
        let item_index = circular_index(index, self.count)?;
        Some(Slot {
            index,
            item_index,
            key: index,
            is_visible: self.is_visible(index),
        })
    }

    /// Iterates over the materialized slots in ascending order without allocating.
    pub fn for_each_slot(&self, mut f: impl FnMut(Slot)) {
        for index in self.start..self.end() {
            if let Some(slot) = self.slot(index) {
                f(slot);
            }
        }
    }
}

/// Computes which logical slots must be materialized and which of them are visible.
///
/// Single-page collections (`count <= tiles`) materialize every item once, all visible.
/// Otherwise the viewport is surrounded by `overscan` slots on each side; in `Stop` mode the
/// overscan is clamped so it never reaches slots that can't be scrolled into view.
pub fn compute_window(p: &WindowParams) -> TileWindow {
    if p.count == 0 || p.tiles == 0 {
        return TileWindow::default();
    }

    if p.count <= p.tiles {
        return TileWindow {
            start: 0,
            len: p.count,
            left_overscan: 0,
            right_overscan: 0,
            visible_start: 0,
            visible_end: p.count as i64,
            count: p.count,
        };
    }

    let count = p.count as i64;
    let viewport = p.viewport_slots.max(p.tiles);
    let (left_overscan, right_overscan) = match p.cycle_mode {
        CycleMode::Stop => {
            let before = p.index.unsigned_abs();
            let after = count
                .saturating_sub(p.index)
                .saturating_sub(viewport as i64)
                .unsigned_abs();
            (
                p.overscan.min(usize::try_from(before).unwrap_or(usize::MAX)),
                p.overscan.min(usize::try_from(after).unwrap_or(usize::MAX)),
            )
        }
        CycleMode::Restart | CycleMode::Endless => (p.overscan, p.overscan),
    };

    let (visible_start, visible_last) = if p.sliding {
        (
            p.index.min(p.from_index).min(p.to_index),
            p.index.max(p.from_index).max(p.to_index),
        )
    } else {
        (p.index, p.index)
    };

    TileWindow {
        start: p.index.saturating_sub_unsigned(left_overscan as u64),
        len: viewport + left_overscan + right_overscan,
        left_overscan,
        right_overscan,
        visible_start,
        visible_end: visible_last.saturating_add_unsigned(viewport as u64),
        count: p.count,
    }
}
