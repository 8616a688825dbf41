use tile_slider::{DragAxis, Position, Slider, SliderOptions};

use crate::{
    EventKind, EventSource, MediaContext, Responsive, SlideHandle, SliderRenderer, SliderView,
    SubscriptionSet, render,
};

/// A framework-neutral controller that wraps a `tile_slider::Slider` and provides common adapter
/// workflows (event subscriptions, deferred slide commands, responsive sizing).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `mount` / `unmount` around the slider's lifetime
/// - `on_viewport_width`, `on_media_width`, `on_reduced_motion` when the environment changes
/// - `on_touch_*` for pointer input
/// - `tick(now_ms)` each frame while `is_animating()` or commands are pending
///
/// Listeners are held as scoped subscriptions: touch-move/end/cancel only while a touch session
/// is active, everything else while mounted.
#[derive(Debug)]
pub struct Controller {
    slider: Slider,
    handle: SlideHandle,
    media: MediaContext,
    tiles_to_show: Option<Responsive<f64>>,
    mount_subscriptions: SubscriptionSet,
    gesture_subscriptions: SubscriptionSet,
    mounted: bool,
}

impl Controller {
    pub fn new(options: SliderOptions) -> Self {
        Self::from_slider(Slider::new(options))
    }

    pub fn from_slider(slider: Slider) -> Self {
        Self {
            slider,
            handle: SlideHandle::new(),
            media: MediaContext::new(),
            tiles_to_show: None,
            mount_subscriptions: SubscriptionSet::new(),
            gesture_subscriptions: SubscriptionSet::new(),
            mounted: false,
        }
    }

    /// Seeds the host's reduced-motion preference; `animated` becomes its inverse right away.
    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.media.set_reduced_motion(reduced_motion);
        self.apply_animated();
        self
    }

    /// Resolves `tiles_to_show` from the current breakpoint, now and on every breakpoint change.
    pub fn with_responsive_tiles(mut self, tiles_to_show: Responsive<f64>) -> Self {
        self.tiles_to_show = Some(tiles_to_show);
        self.apply_responsive();
        self
    }

    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut Slider {
        &mut self.slider
    }

    pub fn into_slider(mut self) -> Slider {
        self.unmount();
        self.slider
    }

    /// The bound slide callbacks; clones share the controller's command queue.
    pub fn handle(&self) -> SlideHandle {
        self.handle.clone()
    }

    pub fn media(&self) -> &MediaContext {
        &self.media
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_animating(&self) -> bool {
        self.slider.is_animating()
    }

    pub fn mount<S: EventSource + ?Sized>(&mut self, source: &mut S, viewport_width: f64) {
        self.mount_subscriptions.acquire(source, &EventKind::MOUNT);
        self.slider.set_viewport_width(viewport_width);
        self.mounted = true;
        adebug!(viewport_width, "controller mounted");
    }

    /// Releases every listener and cancels the pending frame. Queued commands are dropped.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.gesture_subscriptions.release_all();
        self.mount_subscriptions.release_all();
        self.slider.cancel_motion();
        let _dropped = self.handle.drain();
        self.mounted = false;
        adebug!(dropped_commands = _dropped.len(), "controller unmounted");
    }

    pub fn on_viewport_width(&mut self, width: f64) {
        self.slider.set_viewport_width(width);
    }

    /// Call this when the host (window) width changes; re-resolves responsive values when the
    /// breakpoint changes.
    pub fn on_media_width(&mut self, width: f64) {
        if self.media.set_width(width) {
            adebug!(width, breakpoint = ?self.media.breakpoint(), "breakpoint changed");
            self.apply_responsive();
        }
    }

    pub fn on_reduced_motion(&mut self, reduced_motion: bool) {
        if self.media.set_reduced_motion(reduced_motion) {
            self.apply_animated();
        }
    }

    fn apply_animated(&mut self) {
        let animated = self.media.animated();
        if animated != self.slider.options().animated {
            self.slider.update_options(|o| o.animated = animated);
        }
    }

    fn apply_responsive(&mut self) {
        let Some(values) = &self.tiles_to_show else {
            return;
        };
        let tiles = *self.media.resolve(values);
        if tiles != self.slider.options().tiles_to_show {
            self.slider.update_options(|o| o.tiles_to_show = tiles);
        }
    }

    /// Starts a touch session and subscribes to the session-scoped events.
    pub fn on_touch_start<S: EventSource + ?Sized>(
        &mut self,
        source: &mut S,
        position: Position,
        now_ms: u64,
    ) {
        if !self.mounted {
            return;
        }
        self.slider.touch_start(position, now_ms);
        if self.slider.is_dragging() {
            self.gesture_subscriptions.acquire(source, &EventKind::GESTURE);
        }
    }

    /// Returns the gesture classification; suppress default scrolling while it is horizontal.
    pub fn on_touch_move(&mut self, position: Position, now_ms: u64) -> DragAxis {
        self.slider.touch_move(position, now_ms)
    }

    pub fn on_touch_end(&mut self, position: Position, now_ms: u64) {
        self.gesture_subscriptions.release_all();
        self.slider.touch_end(position, now_ms);
    }

    pub fn on_touch_cancel(&mut self, now_ms: u64) {
        self.gesture_subscriptions.release_all();
        self.slider.touch_cancel(now_ms);
    }

    /// Applies queued slide commands in order. Returns how many were accepted.
    pub fn apply_commands(&mut self) -> usize {
        let mut accepted = 0;
        for command in self.handle.drain() {
            if command.apply(&mut self.slider) {
                accepted += 1;
            } else {
                atrace!(?command, "slide command refused");
            }
        }
        accepted
    }

    /// Applies pending commands, then advances the running motion.
    ///
    /// Returns the new list position while a motion is running.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        self.apply_commands();
        self.slider.tick(now_ms)
    }

    pub fn render<T, R: SliderRenderer<T> + ?Sized>(
        &self,
        items: &[T],
        renderer: &mut R,
    ) -> SliderView<R::Node> {
        render(&self.slider, items, &self.handle, renderer)
    }
}
