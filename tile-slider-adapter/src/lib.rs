//! Adapter utilities for the `tile-slider` crate.
//!
//! The `tile-slider` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A render-callback contract (tiles, controls, pagination, aria labels)
//! - Deferred slide commands for callbacks that only see the slider immutably
//! - Scoped event subscriptions released on every exit path
//! - A per-instance media context for breakpoints and reduced motion
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod commands;
mod controller;
mod render;
mod responsive;
mod subscription;


pub use commands::{SlideCommand, SlideHandle};
pub use controller::Controller;
pub use render::{
    ControlProps, PaginationProps, RenderedTile, SliderRenderer, SliderView, TileProps, render,
};
pub use responsive::{Breakpoint, MediaContext, Responsive};
pub use subscription::{EventKind, EventSource, Subscription, SubscriptionSet};
