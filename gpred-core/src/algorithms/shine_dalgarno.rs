use crate::constants::SHINE_DALGARNO_DOWNSTREAM_OFFSET;
use crate::pattern::Pattern;

/// Look for a Shine-Dalgarno motif upstream of the start codon at `start`.
///
/// The motif must lie inside `[start - max_distance, start - 6)`. A window
/// reaching before the sequence origin is not clamped: such a start can
/// never carry a motif.
#[must_use]
pub fn has_shine_dalgarno(
    shine_pattern: &Pattern,
    sequence: &[u8],
    start: usize,
    max_distance: usize,
) -> bool {
    let Some(window_start) = start.checked_sub(max_distance) else {
        return false;
    };
    let Some(window_end) = start.checked_sub(SHINE_DALGARNO_DOWNSTREAM_OFFSET) else {
        return false;
    };

    shine_pattern
        .search(sequence, window_start, window_end)
        .is_some()
}
