/// Policy applied when a slide reaches either end of the collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CycleMode {
    /// Clamp at both ends.
    Stop,
    /// Jump back to the other end once an edge is reached.
    Restart,
    /// Wrap forever; the logical index is never normalized.
    #[default]
    Endless,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// `-1` for left, `1` for right.
    pub fn factor(self) -> i64 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

/// How many logical positions one directional slide moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PageStep {
    /// One full viewport of tiles.
    #[default]
    Page,
    /// A single tile.
    Tile,
    Count(usize),
}

/// Payload handed to the slide lifecycle callbacks and to pagination renderers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideInfo {
    /// Logical index (may be out of `[0, total)` in endless mode).
    pub index: i64,
    /// `index` mapped onto the collection.
    pub item_index: usize,
    pub total: usize,
    pub page: usize,
    pub pages: usize,
}

/// Stable identity of a materialized tile.
///
/// Derived from the logical slot rather than the collection index, so a tile keeps its identity
/// while the window wraps around the collection.
pub type SlotKey = i64;

/// A materialized tile position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    /// Logical slot in the unbounded virtual sequence.
    pub index: i64,
    /// Collection index the slot resolves to.
    pub item_index: usize,
    pub key: SlotKey,
    /// Whether the slot is inside the viewport (or inside an in-flight transition's viewports).
    /// Overscan-only slots are `false` and should be hidden from assistive tech.
    pub is_visible: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlState {
    /// `false` means the control is not rendered at all.
    pub visible: bool,
    pub disabled: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Controls {
    pub left: ControlState,
    pub right: ControlState,
}

/// A pointer position in host pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Classification of an in-progress touch gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragAxis {
    /// Not enough movement yet to decide.
    Undecided,
    /// The slider owns the gesture; the host should suppress its default scrolling.
    Horizontal,
    /// The gesture is a page scroll; the slider ignores it for the rest of the session.
    Vertical,
}

/// Layout figures the host needs to place tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMetrics {
    /// Width of one tile in pixels (viewport width / tiles to show).
    pub width: f64,
    /// Horizontal padding on each side of a tile (half the spacing).
    pub padding: f64,
    /// Margin applied on both sides of the tile list (negative half spacing).
    pub list_margin: f64,
}

/// Identifies a scheduled animation frame.
///
/// A handle becomes stale as soon as a newer motion or gesture starts; delivering a stale handle
/// to [`crate::Slider::on_frame`] is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub(crate) u64);
