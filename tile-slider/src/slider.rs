use core::cell::Cell;
use std::sync::Arc;

use crate::circular::{circular_index, closest_index};
use crate::gesture::GestureSession;
use crate::motion::{MotionFrame, MotionKind, Step, Track, glide_duration};
use crate::window::{WindowParams, compute_window};
use crate::{
    ConfigError, ControlState, Controls, CycleMode, Direction, DragAxis, Easing, FrameHandle,
    Position, SlideInfo, SlideState, SliderOptions, Slot, TileMetrics, TileWindow,
};

/// Endless indexes beyond this magnitude are rebased onto an equivalent index near the current
/// one, leaving headroom for window and slide arithmetic.
const ENDLESS_INDEX_LIMIT: i64 = 1 << 48;

/// A headless tile slider.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or timers.
/// - Your adapter drives it with the viewport width, touch samples and frame ticks (`now_ms`).
/// - It exposes the list position (pixels), the materialized slots, and control/pagination
///   state for rendering.
///
/// The discrete [`SlideState`] only changes through committed transitions, or when a running
/// motion crosses into a new nearest tile. Per-frame position lives in a separate motion frame and
/// is reported through [`Slider::tick`] / [`Slider::on_frame`].
///
/// For render contracts, subscriptions and responsive sizing, see the `tile-slider-adapter` crate.
#[derive(Clone, Debug)]
pub struct Slider {
    options: SliderOptions,
    config_error: Option<ConfigError>,
    viewport_width: f64,
    state: SlideState,
    position: f64,
    motion: Option<MotionFrame>,
    generation: u64,
    gesture: Option<GestureSession>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Slider {
    /// Creates a slider from options.
    ///
    /// Never fails: an unusable configuration (see [`SliderOptions::validate`]) degrades to an
    /// empty, inert slider. Use [`Slider::try_new`] to reject it instead.
    pub fn new(options: SliderOptions) -> Self {
        let config_error = options.validate().err();
        #[cfg(feature = "tracing")]
        if let Some(error) = config_error {
            swarn!(%error, "Slider::new with an unusable configuration, rendering nothing");
        }
        sdebug!(
            count = options.count,
            tiles_to_show = options.tiles_to_show,
            cycle_mode = ?options.cycle_mode,
            animated = options.animated,
            "Slider::new"
        );
        Self {
            options,
            config_error,
            viewport_width: 0.0,
            state: SlideState::default(),
            position: 0.0,
            motion: None,
            generation: 0,
            gesture: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn try_new(options: SliderOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    /// The reason the current configuration renders nothing, if any.
    pub fn config_error(&self) -> Option<ConfigError> {
        self.config_error
    }

    pub fn set_options(&mut self, options: SliderOptions) {
        let prev_count = self.options.count;
        let prev_tiles = self.options.tiles_to_show;
        let prev_cycle_mode = self.options.cycle_mode;
        self.options = options;
        self.config_error = self.options.validate().err();
        #[cfg(feature = "tracing")]
        if let Some(error) = self.config_error {
            swarn!(%error, "Slider::set_options with an unusable configuration");
        }
        strace!(
            count = self.options.count,
            tiles_to_show = self.options.tiles_to_show,
            "Slider::set_options"
        );

        let layout_changed = self.options.count != prev_count
            || self.options.tiles_to_show != prev_tiles
            || self.options.cycle_mode != prev_cycle_mode;
        if layout_changed {
            self.cancel_motion();
            self.gesture = None;
            let index = self.reconcile_index(self.state.index);
            self.state = SlideState {
                index,
                from_index: index,
                to_index: index,
                sliding: false,
                page: self.page_of(index),
                has_slide_before: self.state.has_slide_before,
            };
            self.position = self.track().position_of(index);
        }

        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut SliderOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.update_options(|o| o.count = count);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Slider, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.state.sliding);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    // Geometry

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Updates the viewport width (pixels).
    ///
    /// The list position is rescaled; a running motion is settled immediately on its target.
    pub fn set_viewport_width(&mut self, width: f64) {
        let width = if width.is_finite() && width > 0.0 { width } else { 0.0 };
        if width == self.viewport_width {
            return;
        }
        let old_tile_width = self.tile_width();
        self.viewport_width = width;
        let tile_width = self.tile_width();

        if old_tile_width > 0.0 {
            let scale = tile_width / old_tile_width;
            self.position *= scale;
            if let Some(session) = self.gesture.as_mut() {
                session.start_position *= scale;
            }
        } else {
            self.position = self.track().position_of(self.state.index);
            if let Some(session) = self.gesture.as_mut() {
                session.start_position = self.position;
            }
        }

        if let Some(frame) = self.motion {
            let target = match frame.kind {
                MotionKind::Snap { target_index, .. } => target_index,
                MotionKind::Glide { .. } => self.state.index,
            };
            sdebug!(width, target, "viewport resized during motion, settling");
            self.cancel_motion();
            self.commit(target);
            return;
        }
        self.notify();
    }

    fn is_renderable(&self) -> bool {
        self.config_error.is_none()
    }

    fn tiles(&self) -> usize {
        if self.is_renderable() {
            self.options.whole_tiles()
        } else {
            0
        }
    }

    /// `true` when there are more items than fit in the viewport.
    pub fn is_multi_page(&self) -> bool {
        self.is_renderable() && self.options.count > self.tiles()
    }

    fn max_index(&self) -> i64 {
        (self.options.count as i64 - self.tiles() as i64).max(0)
    }

    /// Highest index a bounded slider can rest on.
    ///
    /// Restart mode with a step smaller than a page also rests on `count - step`.
    fn last_rest_index(&self) -> i64 {
        match self.options.cycle_mode {
            CycleMode::Restart => {
                let step = self.options.step_count() as i64;
                let last = (self.options.count as i64 - step).max(0);
                self.max_index().max(last)
            }
            CycleMode::Stop | CycleMode::Endless => self.max_index(),
        }
    }

    pub fn tile_width(&self) -> f64 {
        if !self.is_renderable() || self.viewport_width <= 0.0 {
            return 0.0;
        }
        self.viewport_width / self.options.tiles_to_show
    }

    pub fn tile_metrics(&self) -> TileMetrics {
        let half = self.options.spacing as f64 / 2.0;
        TileMetrics {
            width: self.tile_width(),
            padding: half,
            list_margin: -half,
        }
    }

    /// Offset of a logical slot from the list origin, in pixels.
    ///
    /// A tile is drawn at `slot_offset(slot) + position()`.
    pub fn slot_offset(&self, slot: i64) -> f64 {
        slot as f64 * self.tile_width()
    }

    /// Current list translation in pixels (`-index * tile_width` at rest).
    pub fn position(&self) -> f64 {
        self.position
    }

    fn track(&self) -> Track {
        let bounds = if !self.is_multi_page() {
            Some((0, 0))
        } else {
            match self.options.cycle_mode {
                CycleMode::Endless => None,
                CycleMode::Stop | CycleMode::Restart => Some((0, self.last_rest_index())),
            }
        };
        Track {
            tile_width: self.tile_width(),
            bounds,
        }
    }

    // State queries

    pub fn state(&self) -> SlideState {
        self.state
    }

    pub fn index(&self) -> i64 {
        self.state.index
    }

    pub fn item_index(&self) -> usize {
        circular_index(self.state.index, self.options.count).unwrap_or(0)
    }

    pub fn is_sliding(&self) -> bool {
        self.state.sliding
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    pub fn page(&self) -> usize {
        self.state.page
    }

    pub fn pages(&self) -> usize {
        let tiles = self.tiles();
        if tiles == 0 {
            return 0;
        }
        self.options.count.div_ceil(tiles)
    }

    fn page_of(&self, index: i64) -> usize {
        let tiles = self.tiles();
        if tiles == 0 {
            return 0;
        }
        circular_index(index, self.options.count).unwrap_or(0) / tiles
    }

    fn info_for(&self, index: i64) -> SlideInfo {
        SlideInfo {
            index,
            item_index: circular_index(index, self.options.count).unwrap_or(0),
            total: self.options.count,
            page: self.page_of(index),
            pages: self.pages(),
        }
    }

    /// The payload handed to lifecycle callbacks and pagination renderers.
    pub fn slide_info(&self) -> SlideInfo {
        self.info_for(self.state.index)
    }

    pub fn controls(&self) -> Controls {
        let visible = self.options.show_controls && self.is_multi_page();
        let stop = self.options.cycle_mode == CycleMode::Stop;
        let index = self.state.index;
        Controls {
            left: ControlState {
                visible,
                disabled: (stop && index == 0) || !self.state.has_slide_before,
            },
            right: ControlState {
                visible,
                disabled: stop && index == self.max_index(),
            },
        }
    }

    // Windowing

    pub fn window(&self) -> TileWindow {
        if !self.is_renderable() {
            return TileWindow::default();
        }
        compute_window(&WindowParams {
            count: self.options.count,
            tiles: self.tiles(),
            viewport_slots: self.options.viewport_slots(),
            overscan: self.options.resolved_overscan(),
            cycle_mode: self.options.cycle_mode,
            index: self.state.index,
            from_index: self.state.from_index,
            to_index: self.state.to_index,
            sliding: self.state.sliding,
        })
    }

    /// Iterates over the materialized slots without allocating.
    pub fn for_each_slot(&self, f: impl FnMut(Slot)) {
        self.window().for_each_slot(f);
    }

    /// Collects the materialized slots into `out` (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_slot`]; adapters that render every
    /// frame should reuse the buffer.
    pub fn collect_slots(&self, out: &mut Vec<Slot>) {
        out.clear();
        self.for_each_slot(|slot| out.push(slot));
    }

    // Transitions

    /// Slides one step (see [`crate::PageStep`]) in `direction`, applying the cycle-mode boundary
    /// policy.
    ///
    /// Returns `false` only when throttled: `throttle_on_transition` is set and a transition is
    /// already in flight.
    pub fn slide(&mut self, direction: Direction) -> bool {
        if self.options.throttle_on_transition && self.state.sliding {
            strace!(?direction, "slide throttled");
            return false;
        }
        if !self.is_multi_page() {
            return true;
        }
        let step = self.options.step_count() as i64;
        if step == 0 {
            return true;
        }

        // Consecutive slides accumulate on the in-flight target.
        let base = if self.state.sliding {
            self.state.to_index
        } else {
            self.state.index
        };
        let len = self.options.count as i64;
        let mut next = base.saturating_add(step * direction.factor());

        match self.options.cycle_mode {
            CycleMode::Stop => next = next.clamp(0, self.max_index()),
            CycleMode::Restart => {
                let last = (len - step).max(0);
                if next < 0 {
                    next = if base == 0 { -step } else { 0 };
                } else if next > last {
                    next = if base >= last { len } else { last };
                }
            }
            CycleMode::Endless => next = self.rebase_endless(next),
        }

        sdebug!(?direction, base, next, "slide");
        self.transition_to(next);
        true
    }

    /// Slides to a logical index.
    ///
    /// With `closest`, an endless slider moves the short way around to an index equivalent to
    /// `index`. Non-wrapping modes map `index` onto the collection and clamp it to the last
    /// reachable position.
    pub fn slide_to_index(&mut self, index: i64, closest: bool) {
        if !self.is_multi_page() {
            return;
        }
        let count = self.options.count;
        let target = match self.options.cycle_mode {
            CycleMode::Endless if closest => closest_index(self.state.index, index, count),
            CycleMode::Endless => self.rebase_endless(index),
            CycleMode::Stop | CycleMode::Restart => self.reconcile_index(index),
        };
        sdebug!(index, closest, target, "slide_to_index");
        self.transition_to(target);
    }

    /// Slides to the first tile of `page` (`page * step`).
    ///
    /// Pages past the end wrap around the collection.
    pub fn slide_to_page(&mut self, page: usize) {
        let count = self.options.count as u128;
        if count == 0 {
            return;
        }
        let step = self.options.step_count() as u128;
        let offset = (page as u128 % count) * (step % count) % count;
        let offset = i64::try_from(offset).unwrap_or(0);
        self.slide_to_index(offset, true);
    }

    /// Keeps endless indexes within [`ENDLESS_INDEX_LIMIT`], preferring `index` itself.
    fn rebase_endless(&self, index: i64) -> i64 {
        if index.unsigned_abs() <= ENDLESS_INDEX_LIMIT as u64 {
            return index;
        }
        let rebased = closest_index(self.state.index, index, self.options.count);
        strace!(index, rebased, "endless index rebased");
        rebased
    }

    fn reconcile_index(&self, index: i64) -> i64 {
        if !self.is_multi_page() {
            return 0;
        }
        match self.options.cycle_mode {
            CycleMode::Endless => index,
            CycleMode::Stop | CycleMode::Restart => {
                let wrapped = circular_index(index, self.options.count).unwrap_or(0) as i64;
                wrapped.clamp(0, self.last_rest_index())
            }
        }
    }

    fn transition_to(&mut self, target: i64) {
        let at_rest = !self.state.sliding && self.motion.is_none();
        if at_rest && target == self.state.index {
            strace!(target, "already at target");
            return;
        }
        if let Some(_session) = self.gesture.take() {
            strace!("programmatic slide supersedes the active gesture");
            if let Some(cb) = &self.options.on_swipe_end {
                cb();
            }
        }
        if let Some(cb) = &self.options.on_slide_start {
            cb(self.slide_info());
        }
        let easing = self.options.easing;
        let duration = self.options.motion.snap_duration_ms;
        self.start_snap(target, easing, duration);
    }

    /// Starts the single motion driver towards `target`, superseding any running motion.
    fn start_snap(&mut self, target: i64, easing: Easing, duration_ms: u64) {
        self.cancel_motion();
        if !self.options.animated {
            self.commit(target);
            return;
        }
        let track = self.track();
        let to = track.position_of(target);
        if to == self.position {
            self.commit(target);
            return;
        }

        let handle = self.next_handle();
        let from = self.position;
        let index = self.state.index;
        self.motion = Some(MotionFrame::new(
            handle,
            MotionKind::Snap {
                from,
                to,
                target_index: target,
                duration_ms: duration_ms as f64,
                easing,
            },
            index,
        ));
        sdebug!(from, to, target, duration_ms, "snap started");

        self.batch_update(|s| {
            if !s.state.sliding {
                s.state.from_index = index;
            }
            s.state.to_index = target;
            s.state.sliding = true;
            s.notify();
        });
    }

    /// Settles on `target`, normalizing it unless the slider is endless.
    fn commit(&mut self, target: i64) {
        self.motion = None;
        let index = match self.options.cycle_mode {
            CycleMode::Endless => target,
            CycleMode::Stop | CycleMode::Restart => {
                circular_index(target, self.options.count).unwrap_or(0) as i64
            }
        };
        // Snapping back onto the starting tile doesn't count as a slide.
        let moved = index != self.state.from_index || index != self.state.index;
        self.position = self.track().position_of(index);
        self.state = SlideState {
            index,
            from_index: index,
            to_index: index,
            sliding: false,
            page: self.page_of(index),
            has_slide_before: self.state.has_slide_before || moved,
        };
        sdebug!(target, index, page = self.state.page, "slide committed");

        if let Some(cb) = &self.options.on_slide_end {
            cb(self.info_for(index));
        }
        self.notify();
    }

    fn next_handle(&mut self) -> FrameHandle {
        self.generation = self.generation.wrapping_add(1);
        FrameHandle(self.generation)
    }

    // Frames

    /// The frame the host should schedule next, if a motion is running.
    pub fn frame_handle(&self) -> Option<FrameHandle> {
        self.motion.map(|m| m.handle)
    }

    /// Cancels the running motion without committing it.
    ///
    /// Any frame handle handed out so far becomes stale.
    pub fn cancel_motion(&mut self) {
        if let Some(_frame) = self.motion.take() {
            strace!(handle = _frame.handle.0, "motion cancelled");
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Advances the running motion, if any. Returns the new list position.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let handle = self.frame_handle()?;
        self.on_frame(handle, now_ms)
    }

    /// Advances the motion that scheduled `handle`.
    ///
    /// Stale handles (from a cancelled or superseded motion) are ignored and return `None`.
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: u64) -> Option<f64> {
        let Some(mut frame) = self.motion else {
            strace!(handle = handle.0, "frame without motion ignored");
            return None;
        };
        if frame.handle != handle {
            strace!(
                handle = handle.0,
                live = frame.handle.0,
                "stale frame ignored"
            );
            return None;
        }
        if self.gesture.is_some() {
            self.motion = None;
            return None;
        }

        let track = self.track();
        match frame.advance(now_ms, self.position, &track, &self.options.motion) {
            Step::Moving { position, nearest } => {
                self.position = position;
                let changed = nearest != frame.last_rendered_index;
                frame.last_rendered_index = nearest;
                self.motion = Some(frame);
                strace!(now_ms, position, nearest, "motion frame");
                if changed {
                    self.state.index = nearest;
                    self.state.page = self.page_of(nearest);
                    self.notify();
                }
            }
            Step::Done {
                position,
                target_index,
            } => {
                self.position = position;
                self.commit(target_index);
            }
        }
        Some(self.position)
    }

    // Gestures

    /// Starts a touch/drag session at `position`.
    ///
    /// Interrupts any running motion; the slide state keeps the last rendered index.
    pub fn touch_start(&mut self, position: Position, now_ms: u64) {
        if !self.is_renderable() {
            return;
        }
        self.cancel_motion();
        let session = GestureSession::new(position, self.position, now_ms, &self.options.gesture);
        self.gesture = Some(session);

        let track = self.track();
        let index = self.state.index;
        let from_index = track.index_at(self.position, f64::floor, index);
        let to_index = track.index_at(self.position, f64::ceil, index);
        strace!(x = position.x, y = position.y, now_ms, "touch start");

        self.batch_update(|s| {
            s.state.from_index = from_index.min(index);
            s.state.to_index = to_index.max(index);
            s.state.sliding = true;
            s.notify();
        });

        if let Some(cb) = &self.options.on_swipe_start {
            cb();
        }
        if let Some(cb) = &self.options.on_slide_start {
            cb(self.slide_info());
        }
    }

    /// Feeds a move sample. Returns how the gesture is classified.
    ///
    /// While this returns [`DragAxis::Horizontal`] the host should suppress default scrolling.
    pub fn touch_move(&mut self, position: Position, now_ms: u64) -> DragAxis {
        let config = self.options.gesture;
        let Some(session) = self.gesture.as_mut() else {
            return DragAxis::Undecided;
        };
        session.moves.register_move(position, now_ms, &config);
        let axis = session.classify(position, &config);
        if axis != DragAxis::Horizontal {
            strace!(?axis, "touch move not tracked");
            return axis;
        }
        let start = session.start_position;
        let delta = position.x - session.origin.x;
        self.position = self.drag_position(start, delta);
        axis
    }

    /// Ends the touch session and hands the release over to the motion controller.
    pub fn touch_end(&mut self, position: Position, now_ms: u64) {
        let Some(mut session) = self.gesture.take() else {
            return;
        };
        let config = self.options.gesture;
        session.moves.prune(now_ms, &config);

        let mut velocity = 0.0;
        if session.axis == DragAxis::Horizontal {
            velocity = session.moves.velocity(&config);
            let delta = position.x - session.origin.x;
            self.position = self.drag_position(session.start_position, delta);
        }
        strace!(velocity, dragging = session.dragging, "touch end");

        if let Some(cb) = &self.options.on_swipe_end {
            cb();
        }

        if session.is_cancelled() || !session.dragging || !self.is_multi_page() {
            self.snap_back();
        } else {
            self.release(velocity);
        }
    }

    /// Aborts the touch session and snaps back to the current index.
    pub fn touch_cancel(&mut self, _now_ms: u64) {
        if self.gesture.take().is_none() {
            return;
        }
        strace!("touch cancel");
        if let Some(cb) = &self.options.on_swipe_end {
            cb();
        }
        self.snap_back();
    }

    fn drag_position(&self, start: f64, delta: f64) -> f64 {
        let overshoot = self.options.motion.edge_overshoot.abs();
        self.track().clamp_position(start + delta, overshoot)
    }

    fn snap_back(&mut self) {
        let index = self.state.index;
        let duration = self.options.motion.snap_duration_ms;
        self.start_snap(index, Easing::EaseOutQuartic, duration);
    }

    /// Resolves a release velocity (px/ms) into a snap or a glide.
    ///
    /// A negligible speed snaps to the nearest tile. A gentle swipe moves exactly one tile from the
    /// committed index in the swipe's direction, however far the drag went. Faster releases glide.
    fn release(&mut self, velocity: f64) {
        let config = self.options.motion;
        let speed = velocity * config.frame_ms;
        let track = self.track();
        let index = self.state.index;

        if speed.abs() < config.negligible_velocity {
            let nearest = track.index_at(self.position, f64::round, index);
            sdebug!(speed, nearest, "release: snap to nearest");
            self.start_snap(nearest, Easing::EaseOutQuartic, config.snap_duration_ms);
            return;
        }

        if speed.abs() < config.swipe_velocity {
            let target = if speed > 0.0 {
                index.saturating_sub(1)
            } else {
                index.saturating_add(1)
            };
            let target = track.clamp(target);
            sdebug!(speed, target, "release: single step");
            self.start_snap(target, Easing::EaseOutQuartic, config.snap_duration_ms);
            return;
        }

        self.cancel_motion();
        if !self.options.animated || track.tile_width <= 0.0 {
            let round: fn(f64) -> f64 = if speed > 0.0 { f64::floor } else { f64::ceil };
            let target = track.index_at(self.position, round, index);
            self.commit(target);
            return;
        }

        let duration_ms = glide_duration(speed, &config);
        let handle = self.next_handle();
        self.motion = Some(MotionFrame::new(
            handle,
            MotionKind::Glide {
                velocity: speed,
                duration_ms,
            },
            index,
        ));
        sdebug!(speed, duration_ms, "release: glide");
        self.batch_update(|s| {
            s.state.sliding = true;
            s.notify();
        });
    }
}
