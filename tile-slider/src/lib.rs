//! A headless, virtualized tile slider (carousel) engine.
//!
//! For adapter-level utilities (render contracts, event subscriptions, responsive sizing), see the
//! `tile-slider-adapter` crate.
//!
//! This crate focuses on the core algorithms needed to page through very large collections at
//! interactive frame rates: circular index math, windowing (only the viewport plus overscan is
//! materialized), gesture velocity tracking, and snap/glide motion.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport width
//! - touch samples (`touch_start` / `touch_move` / `touch_end`)
//! - frame ticks (`now_ms`)
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod circular;
mod easing;
mod error;
mod gesture;
mod motion;
mod options;
mod slider;
mod state;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use circular::{circular_index, closest_index};
pub use easing::{Easing, ease_in_out, ease_out_cubic, ease_out_quartic};
pub use error::ConfigError;
pub use gesture::{Move, MoveHistory};
pub use options::{
    GestureConfig, MotionConfig, OnChangeCallback, SlideCallback, SliderOptions, SwipeCallback,
};
pub use slider::Slider;
pub use state::SlideState;
pub use types::{
    ControlState, Controls, CycleMode, Direction, DragAxis, FrameHandle, PageStep, Position,
    SlideInfo, Slot, SlotKey, TileMetrics,
};
pub use window::{TileWindow, WindowParams, compute_window};
