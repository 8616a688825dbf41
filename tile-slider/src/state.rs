/// The discrete slide state owned by [`crate::Slider`].
///
/// Only committed transitions (and the throttled nearest-index updates of a running motion)
/// change these fields; continuous position lives in the motion frame.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideState {
    /// Logical position of the first fully visible tile. Not wrapped in endless mode.
    pub index: i64,
    /// Index the in-flight transition started from.
    pub from_index: i64,
    /// Index the in-flight transition is heading to.
    pub to_index: i64,
    /// `true` from the moment a transition is requested until it settles.
    pub sliding: bool,
    pub page: usize,
    /// Set after the first committed transition.
    pub has_slide_before: bool,
}
