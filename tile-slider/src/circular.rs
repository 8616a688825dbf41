/// Maps any logical index onto `[0, len)`.
///
/// Unlike `%`, negative indexes wrap around from the end: `circular_index(-1, 10) == Some(9)`.
/// Returns `None` for an empty collection.
pub fn circular_index(index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = i64::try_from(len).ok()?;
    usize::try_from(index.rem_euclid(len)).ok()
}

/// Returns the logical index equivalent to `target` that is reached from `current` with the
/// fewest steps.
///
/// Ties (exactly half the collection away) resolve forward.
pub fn closest_index(current: i64, target: i64, len: usize) -> i64 {
    let Ok(len) = i64::try_from(len) else {
        return target;
    };
    if len == 0 {
        return target;
    }
    // Both sides are reduced first so far-apart indexes can't overflow.
    let mut delta = (target.rem_euclid(len) - current.rem_euclid(len)).rem_euclid(len);
    if delta > len / 2 {
        delta -= len;
    }
    current.saturating_add(delta)
}
