use tile_slider::{Direction, SlideInfo, Slider, SlotKey, TileMetrics};

use crate::SlideHandle;

/// Everything a tile renderer gets for one materialized slot.
#[derive(Debug)]
pub struct TileProps<'a, T> {
    pub item: &'a T,
    /// Collection index of `item`.
    pub item_index: usize,
    /// Logical slot (may repeat items when the window wraps).
    pub slot: i64,
    pub is_visible: bool,
    pub handle: &'a SlideHandle,
}

#[derive(Debug)]
pub struct ControlProps<'a> {
    pub direction: Direction,
    pub disabled: bool,
    pub handle: &'a SlideHandle,
}

impl ControlProps<'_> {
    /// The bound click handler. Does nothing while disabled.
    pub fn on_click(&self) {
        if !self.disabled {
            self.handle.slide(self.direction);
        }
    }
}

#[derive(Debug)]
pub struct PaginationProps<'a> {
    pub info: SlideInfo,
    pub handle: &'a SlideHandle,
}

impl PaginationProps<'_> {
    /// `(page, is_current)` for each pagination dot.
    pub fn dots(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.info.pages).map(move |page| (page, page == self.info.page))
    }

    pub fn go_to_page(&self, page: usize) {
        self.handle.slide_to_page(page);
    }

    pub fn go_to_index(&self, index: i64, closest: bool) {
        self.handle.slide_to_index(index, closest);
    }

    pub fn slide(&self, direction: Direction) {
        self.handle.slide(direction);
    }
}

/// Host-supplied render callbacks.
///
/// Only `render_tile` is required; controls, pagination and aria labels are opt-in. Callbacks
/// must not mutate the slider directly: use the [`SlideHandle`] they receive instead.
pub trait SliderRenderer<T> {
    type Node;

    fn render_tile(&mut self, props: TileProps<'_, T>) -> Self::Node;

    fn render_left_control(&mut self, _props: ControlProps<'_>) -> Option<Self::Node> {
        None
    }

    fn render_right_control(&mut self, _props: ControlProps<'_>) -> Option<Self::Node> {
        None
    }

    fn render_pagination(&mut self, _props: PaginationProps<'_>) -> Option<Self::Node> {
        None
    }

    fn aria_label(&mut self, _item: &T, _item_index: usize, _total: usize) -> Option<String> {
        None
    }
}

/// A rendered tile plus the attributes its container needs.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedTile<N> {
    pub key: SlotKey,
    pub slot: i64,
    pub item_index: usize,
    /// Offset from the list origin in pixels; add [`SliderView::position`] to place it.
    pub offset: f64,
    /// Overscan-only tiles stay in the tree but are hidden from assistive tech.
    pub aria_hidden: bool,
    pub aria_label: Option<String>,
    pub node: N,
}

/// One rendered frame of a slider.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderView<N> {
    pub tiles: Vec<RenderedTile<N>>,
    pub left_control: Option<N>,
    pub right_control: Option<N>,
    pub pagination: Option<N>,
    /// List translation in pixels.
    pub position: f64,
    pub metrics: TileMetrics,
}

/// Renders the materialized window of `slider` over `items`.
///
/// `items` should have `slider.count()` entries; slots resolving past the end are skipped.
pub fn render<T, R: SliderRenderer<T> + ?Sized>(
    slider: &Slider,
    items: &[T],
    handle: &SlideHandle,
    renderer: &mut R,
) -> SliderView<R::Node> {
    let window = slider.window();
    let total = items.len();
    let mut tiles = Vec::with_capacity(window.len);

    window.for_each_slot(|slot| {
        let Some(item) = items.get(slot.item_index) else {
            adebug!(
                slot = slot.index,
                item_index = slot.item_index,
                total,
                "slot resolves past the item slice"
            );
            return;
        };
        let aria_label = renderer.aria_label(item, slot.item_index, total);
        let node = renderer.render_tile(TileProps {
            item,
            item_index: slot.item_index,
            slot: slot.index,
            is_visible: slot.is_visible,
            handle,
        });
        tiles.push(RenderedTile {
            key: slot.key,
            slot: slot.index,
            item_index: slot.item_index,
            offset: slider.slot_offset(slot.index),
            aria_hidden: !slot.is_visible,
            aria_label,
            node,
        });
    });

    let controls = slider.controls();
    let left_control = if controls.left.visible {
        renderer.render_left_control(ControlProps {
            direction: Direction::Left,
            disabled: controls.left.disabled,
            handle,
        })
    } else {
        None
    };
    let right_control = if controls.right.visible {
        renderer.render_right_control(ControlProps {
            direction: Direction::Right,
            disabled: controls.right.disabled,
            handle,
        })
    } else {
        None
    };
    let pagination = if slider.is_multi_page() {
        renderer.render_pagination(PaginationProps {
            info: slider.slide_info(),
            handle,
        })
    } else {
        None
    };

    SliderView {
        tiles,
        left_control,
        right_control,
        pagination,
        position: slider.position(),
        metrics: slider.tile_metrics(),
    }
}
