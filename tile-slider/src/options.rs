use std::sync::Arc;

use crate::slider::Slider;
use crate::{ConfigError, CycleMode, Easing, PageStep, SlideInfo};

/// A callback fired when the discrete slide state changes.
///
/// The second argument is `sliding`.
pub type OnChangeCallback = Arc<dyn Fn(&Slider, bool) + Send + Sync>;

/// A callback fired when a slide starts or settles.
pub type SlideCallback = Arc<dyn Fn(SlideInfo) + Send + Sync>;

/// A callback fired when a touch gesture starts or ends.
pub type SwipeCallback = Arc<dyn Fn() + Send + Sync>;

/// Tuning constants for snap and glide animations.
///
/// Velocities are expressed in pixels per frame, where a frame is `frame_ms` long.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionConfig {
    /// Duration of a programmatic snap and of gentle-swipe snaps.
    pub snap_duration_ms: u64,
    /// Reference frame length used to convert px/ms into px/frame.
    pub frame_ms: f64,
    /// Below this release speed the gesture is treated as a tap and snaps to the nearest tile.
    pub negligible_velocity: f64,
    /// Below this release speed the gesture snaps exactly one tile in its direction.
    pub swipe_velocity: f64,
    /// Base duration of a velocity-decay glide.
    pub glide_base_duration_ms: u64,
    /// The glide lasts `base + v² / divisor` milliseconds.
    pub glide_duration_divisor: f64,
    pub glide_max_duration_ms: u64,
    /// Once a glide slows below this speed it hands off to an easing snap.
    pub blend_velocity: f64,
    pub blend_min_duration_ms: u64,
    pub blend_max_duration_ms: u64,
    /// Maximum drag overshoot past a non-wrapping edge, in pixels.
    pub edge_overshoot: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            snap_duration_ms: 500,
            frame_ms: 16.0,
            negligible_velocity: 1.0,
            swipe_velocity: 20.0,
            glide_base_duration_ms: 1500,
            glide_duration_divisor: 5.0,
            glide_max_duration_ms: 3000,
            blend_velocity: 3.0,
            blend_min_duration_ms: 120,
            blend_max_duration_ms: 500,
            edge_overshoot: 50.0,
        }
    }
}

/// Tuning constants for touch tracking.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureConfig {
    /// Samples older than this (relative to the newest event) are discarded.
    pub history_window_ms: u64,
    pub max_samples: usize,
    /// Release velocities are clamped to `±velocity_clamp` px/ms.
    pub velocity_clamp: f64,
    /// Horizontal movement (px) a gesture must exceed to count as a drag.
    pub move_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            history_window_ms: 500,
            max_samples: 5,
            velocity_clamp: 2.0,
            move_threshold: 10.0,
        }
    }
}

/// Configuration for [`crate::Slider`].
///
/// Cheap to clone: callbacks live in `Arc`s, so adapters can tweak a few fields and call
/// `Slider::set_options` without reallocating closures.
pub struct SliderOptions {
    /// Length of the item collection.
    pub count: usize,
    /// Tiles that fit in the viewport. May be fractional to reveal part of the next tile.
    pub tiles_to_show: f64,
    pub cycle_mode: CycleMode,
    /// Space between tiles in pixels.
    pub spacing: u32,
    pub page_step: PageStep,
    /// Extra tiles materialized on each side of the viewport. `None` means `tiles_to_show`.
    pub overscan: Option<usize>,
    /// When `false`, every transition commits immediately.
    pub animated: bool,
    pub show_controls: bool,
    /// When `true`, `slide` refuses to start while a transition is in flight.
    pub throttle_on_transition: bool,
    /// Curve used by programmatic snaps.
    pub easing: Easing,
    pub motion: MotionConfig,
    pub gesture: GestureConfig,

    pub on_change: Option<OnChangeCallback>,
    pub on_slide_start: Option<SlideCallback>,
    pub on_slide_end: Option<SlideCallback>,
    pub on_swipe_start: Option<SwipeCallback>,
    pub on_swipe_end: Option<SwipeCallback>,
}

impl Clone for SliderOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            tiles_to_show: self.tiles_to_show,
            cycle_mode: self.cycle_mode,
            spacing: self.spacing,
            page_step: self.page_step,
            overscan: self.overscan,
            animated: self.animated,
            show_controls: self.show_controls,
            throttle_on_transition: self.throttle_on_transition,
            easing: self.easing,
            motion: self.motion,
            gesture: self.gesture,
            on_change: self.on_change.clone(),
            on_slide_start: self.on_slide_start.clone(),
            on_slide_end: self.on_slide_end.clone(),
            on_swipe_start: self.on_swipe_start.clone(),
            on_swipe_end: self.on_swipe_end.clone(),
        }
    }
}

impl SliderOptions {
    /// Creates options for a collection of `count` items with the default policy
    /// (6 tiles, endless cycling, page steps, animated).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            tiles_to_show: 6.0,
            cycle_mode: CycleMode::default(),
            spacing: 12,
            page_step: PageStep::default(),
            overscan: None,
            animated: true,
            show_controls: true,
            throttle_on_transition: false,
            easing: Easing::default(),
            motion: MotionConfig::default(),
            gesture: GestureConfig::default(),
            on_change: None,
            on_slide_start: None,
            on_slide_end: None,
            on_swipe_start: None,
            on_swipe_end: None,
        }
    }

    /// Checks that the configuration can be rendered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyCollection);
        }
        if !self.tiles_to_show.is_finite() || self.tiles_to_show < 1.0 {
            return Err(ConfigError::InvalidTilesToShow(self.tiles_to_show));
        }
        if self.page_step == PageStep::Count(0) {
            return Err(ConfigError::ZeroPageStep);
        }
        Ok(())
    }

    /// Whole tiles per view (the fractional remainder only affects tile width).
    ///
    /// Returns 0 for an unusable `tiles_to_show`.
    pub fn whole_tiles(&self) -> usize {
        if !self.tiles_to_show.is_finite() || self.tiles_to_show < 1.0 {
            return 0;
        }
        self.tiles_to_show.floor() as usize
    }

    /// Slots occupied by the viewport, including a partially revealed tile.
    pub fn viewport_slots(&self) -> usize {
        if self.whole_tiles() == 0 {
            return 0;
        }
        self.tiles_to_show.ceil() as usize
    }

    /// Logical positions moved by one directional slide.
    pub fn step_count(&self) -> usize {
        match self.page_step {
            PageStep::Page => self.whole_tiles(),
            PageStep::Tile => 1,
            PageStep::Count(n) => n,
        }
    }

    pub fn resolved_overscan(&self) -> usize {
        self.overscan.unwrap_or_else(|| self.whole_tiles())
    }

    pub fn with_tiles_to_show(mut self, tiles_to_show: f64) -> Self {
        self.tiles_to_show = tiles_to_show;
        self
    }

    pub fn with_cycle_mode(mut self, cycle_mode: CycleMode) -> Self {
        self.cycle_mode = cycle_mode;
        self
    }

    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_page_step(mut self, page_step: PageStep) -> Self {
        self.page_step = page_step;
        self
    }

    pub fn with_overscan(mut self, overscan: Option<usize>) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn with_show_controls(mut self, show_controls: bool) -> Self {
        self.show_controls = show_controls;
        self
    }

    pub fn with_throttle_on_transition(mut self, throttle: bool) -> Self {
        self.throttle_on_transition = throttle;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_motion(mut self, motion: MotionConfig) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Slider, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_slide_start(
        mut self,
        f: Option<impl Fn(SlideInfo) + Send + Sync + 'static>,
    ) -> Self {
        self.on_slide_start = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_slide_end(
        mut self,
        f: Option<impl Fn(SlideInfo) + Send + Sync + 'static>,
    ) -> Self {
        self.on_slide_end = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_swipe_start(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_swipe_start = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_swipe_end(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_swipe_end = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self::new(0)
    }
}

impl core::fmt::Debug for SliderOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SliderOptions")
            .field("count", &self.count)
            .field("tiles_to_show", &self.tiles_to_show)
            .field("cycle_mode", &self.cycle_mode)
            .field("spacing", &self.spacing)
            .field("page_step", &self.page_step)
            .field("overscan", &self.overscan)
            .field("animated", &self.animated)
            .field("show_controls", &self.show_controls)
            .field("throttle_on_transition", &self.throttle_on_transition)
            .field("easing", &self.easing)
            .field("motion", &self.motion)
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}
