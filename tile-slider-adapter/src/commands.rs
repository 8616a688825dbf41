use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tile_slider::{Direction, Slider};

/// A deferred slide request issued from a render callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideCommand {
    Slide(Direction),
    SlideToIndex { index: i64, closest: bool },
    SlideToPage(usize),
}

impl SlideCommand {
    /// Applies the command. Returns `false` if a throttled `Slide` was refused.
    pub fn apply(self, slider: &mut Slider) -> bool {
        match self {
            Self::Slide(direction) => slider.slide(direction),
            Self::SlideToIndex { index, closest } => {
                slider.slide_to_index(index, closest);
                true
            }
            Self::SlideToPage(page) => {
                slider.slide_to_page(page);
                true
            }
        }
    }
}

/// The bound `slide` / `slide_to_index` / `slide_to_page` callbacks handed to renderers.
///
/// Renderers only borrow the slider immutably, so the callbacks enqueue commands; the
/// controller applies them on its next `apply_commands` / `tick`. Clones share one queue.
#[derive(Clone, Debug, Default)]
pub struct SlideHandle {
    queue: Rc<RefCell<VecDeque<SlideCommand>>>,
}

impl SlideHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slide(&self, direction: Direction) {
        self.push(SlideCommand::Slide(direction));
    }

    pub fn slide_to_index(&self, index: i64, closest: bool) {
        self.push(SlideCommand::SlideToIndex { index, closest });
    }

    pub fn slide_to_page(&self, page: usize) {
        self.push(SlideCommand::SlideToPage(page));
    }

    pub fn push(&self, command: SlideCommand) {
        self.queue.borrow_mut().push_back(command);
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Takes every queued command, oldest first.
    pub fn drain(&self) -> Vec<SlideCommand> {
        self.queue.borrow_mut().drain(..).collect()
    }
}
