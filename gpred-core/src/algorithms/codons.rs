use crate::constants::CODON_LENGTH;
use crate::pattern::Pattern;

/// Find the next start codon in `sequence[start..stop]`.
///
/// Returns the index of the first base of the leftmost start codon lying
/// entirely inside the region, or `None`.
#[must_use]
pub fn find_start(
    start_pattern: &Pattern,
    sequence: &[u8],
    start: usize,
    stop: usize,
) -> Option<usize> {
    start_pattern.search(sequence, start, stop)
}

/// Find the first stop codon in the same reading frame as `start`.
///
/// Stop codon occurrences are visited in increasing order from `start` and
/// out-of-frame ones skipped. The search is not bounded: with no in-frame
/// stop downstream it runs to the end of the sequence.
#[must_use]
pub fn find_stop(stop_pattern: &Pattern, sequence: &[u8], start: usize) -> Option<usize> {
    stop_pattern
        .find_iter(sequence, start)
        .find(|&pos| (pos - start) % CODON_LENGTH == 0)
}
