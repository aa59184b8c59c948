use crate::group::{IsomorphGroup, Repeat};
use ahash::AHashMap;
use std::collections::BTreeMap;
use std::hash::Hash;

/// Builds the initial isomorph groups for a sequence.
///
/// For each symbol, consecutive occurrences at most `max_distance` apart
/// contribute their leading position to the bucket for that gap. Each
/// non-empty bucket becomes one group with the single constraint
/// `(0, gap)`, emitted in ascending gap order.
pub fn initial_groups<T: Hash + Eq>(msg: &[T], max_distance: usize) -> Vec<IsomorphGroup> {
    let mut positions: AHashMap<&T, Vec<usize>> = AHashMap::new();
    for (i, letter) in msg.iter().enumerate() {
        positions.entry(letter).or_default().push(i);
    }

    let mut starts_by_gap: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for occurrences in positions.values() {
        for pair in occurrences.windows(2) {
            let gap = pair[1] - pair[0];
            if gap > max_distance {
                continue;
            }
            starts_by_gap.entry(gap).or_default().push(pair[0]);
        }
    }

    starts_by_gap
        .into_iter()
        .map(|(gap, starts)| IsomorphGroup::new(starts, [Repeat::new(0, gap)]))
        .collect()
}
