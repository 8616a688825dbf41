/// Host events a slider listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
    /// The slider's own box changed size.
    Resize,
    /// A media query (breakpoint or reduced-motion preference) changed.
    MediaChange,
}

impl EventKind {
    /// Listened to for as long as the slider is mounted.
    pub const MOUNT: [EventKind; 3] = [Self::TouchStart, Self::Resize, Self::MediaChange];
    /// Listened to only while a touch session is active.
    pub const GESTURE: [EventKind; 3] = [Self::TouchMove, Self::TouchEnd, Self::TouchCancel];
}

/// Something that can attach a listener for an [`EventKind`] (a DOM node, a window, a test
/// double).
pub trait EventSource {
    fn subscribe(&mut self, kind: EventKind) -> Subscription;
}

/// A scoped listener registration.
///
/// The listener is removed when the subscription is released or dropped, whichever comes first.
pub struct Subscription {
    kind: EventKind,
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(kind: EventKind, release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            kind,
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn noop(kind: EventKind) -> Self {
        Self {
            kind,
            release: None,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn release(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            atrace!(kind = ?self.kind, "subscription released");
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl core::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("kind", &self.kind)
            .field("active", &self.is_active())
            .finish()
    }
}

/// A group of subscriptions acquired and released together.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to every kind in `kinds` that isn't already held.
    pub fn acquire<S: EventSource + ?Sized>(&mut self, source: &mut S, kinds: &[EventKind]) {
        for &kind in kinds {
            if self.contains(kind) {
                continue;
            }
            self.subscriptions.push(source.subscribe(kind));
        }
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.subscriptions.iter().any(|s| s.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Releases every subscription, in reverse acquisition order.
    pub fn release_all(&mut self) {
        while let Some(subscription) = self.subscriptions.pop() {
            subscription.release();
        }
    }
}

impl Drop for SubscriptionSet {
    fn drop(&mut self) {
        self.release_all();
    }
}
