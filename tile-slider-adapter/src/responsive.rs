use core::cell::Cell;

/// Viewport size classes.
///
/// `Xs < 480 <= Sm < 768 <= Md < 1024 <= Lg < 1200 <= Xl` (CSS pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    #[default]
    Xl,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width < 480.0 {
            Self::Xs
        } else if width < 768.0 {
            Self::Sm
        } else if width < 1024.0 {
            Self::Md
        } else if width < 1200.0 {
            Self::Lg
        } else {
            Self::Xl
        }
    }
}

/// One value per [`Breakpoint`], e.g. tiles to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Responsive<T> {
    pub xs: T,
    pub sm: T,
    pub md: T,
    pub lg: T,
    pub xl: T,
}

impl<T> Responsive<T> {
    pub fn new(xs: T, sm: T, md: T, lg: T, xl: T) -> Self {
        Self { xs, sm, md, lg, xl }
    }

    pub fn get(&self, breakpoint: Breakpoint) -> &T {
        match breakpoint {
            Breakpoint::Xs => &self.xs,
            Breakpoint::Sm => &self.sm,
            Breakpoint::Md => &self.md,
            Breakpoint::Lg => &self.lg,
            Breakpoint::Xl => &self.xl,
        }
    }
}

impl<T: Clone> Responsive<T> {
    /// The same value at every breakpoint.
    pub fn uniform(value: T) -> Self {
        Self {
            xs: value.clone(),
            sm: value.clone(),
            md: value.clone(),
            lg: value.clone(),
            xl: value,
        }
    }
}

/// Per-slider media state: the host width that drives breakpoints and the reduced-motion
/// preference.
///
/// Owned by one slider instance; two sliders never share it. The breakpoint is derived lazily
/// from the last reported width.
#[derive(Clone, Debug, Default)]
pub struct MediaContext {
    width: Option<f64>,
    breakpoint: Cell<Option<Breakpoint>>,
    reduced_motion: bool,
}

impl MediaContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Records the host width. Returns `true` if the breakpoint changed.
    pub fn set_width(&mut self, width: f64) -> bool {
        let before = self.breakpoint();
        self.width = width.is_finite().then_some(width.max(0.0));
        self.breakpoint.set(None);
        self.breakpoint() != before
    }

    /// The current breakpoint; `Xl` until a width was reported.
    pub fn breakpoint(&self) -> Breakpoint {
        if let Some(bp) = self.breakpoint.get() {
            return bp;
        }
        let bp = self.width.map(Breakpoint::from_width).unwrap_or_default();
        self.breakpoint.set(Some(bp));
        bp
    }

    pub fn resolve<'a, T>(&self, values: &'a Responsive<T>) -> &'a T {
        values.get(self.breakpoint())
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Records the reduced-motion preference. Returns `true` if it changed.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) -> bool {
        let changed = self.reduced_motion != reduced_motion;
        self.reduced_motion = reduced_motion;
        changed
    }

    /// Whether transitions should animate.
    pub fn animated(&self) -> bool {
        !self.reduced_motion
    }
}
