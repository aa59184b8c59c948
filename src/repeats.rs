//! Kasiski-style search for repeated substrings across a set of messages.

use ahash::AHashMap;
use std::collections::{BTreeMap, BTreeSet};
use std::hash::Hash;

/// A repeated substring and every place it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatedRun<T> {
    pub run: Vec<T>,
    /// (message index, position) of each occurrence.
    pub occurrences: BTreeSet<(usize, usize)>,
}

impl<T> RepeatedRun<T> {
    pub fn count(&self) -> usize {
        self.occurrences.len()
    }
}

/// Finds every substring of length `2..=max_len` occurring more than once
/// across `msgs`, keeping only the longest runs.
///
/// A run is dropped when a strictly longer run contains it and occurs just
/// as often; the shorter run then adds no information of its own. Results
/// are sorted by descending occurrence count, then descending length.
pub fn find_repeats<T: Hash + Eq + Clone + Ord>(
    msgs: &[Vec<T>],
    max_len: usize,
) -> Vec<RepeatedRun<T>> {
    let mut occurrences: AHashMap<Vec<T>, BTreeSet<(usize, usize)>> = AHashMap::new();
    for (msg_idx, msg) in msgs.iter().enumerate() {
        for pos in 0..msg.len().saturating_sub(1) {
            for len in 2..=max_len.min(msg.len() - pos) {
                occurrences
                    .entry(msg[pos..pos + len].to_vec())
                    .or_default()
                    .insert((msg_idx, pos));
            }
        }
    }

    let repeated: Vec<RepeatedRun<T>> = occurrences
        .into_iter()
        .filter(|(_, occ)| occ.len() > 1)
        .map(|(run, occurrences)| RepeatedRun { run, occurrences })
        .collect();

    let mut result: Vec<RepeatedRun<T>> = repeated
        .iter()
        .filter(|candidate| {
            !repeated.iter().any(|longer| {
                longer.run.len() > candidate.run.len()
                    && longer.count() == candidate.count()
                    && longer
                        .run
                        .windows(candidate.run.len())
                        .any(|w| w == candidate.run.as_slice())
            })
        })
        .cloned()
        .collect();

    result.sort_unstable_by(|a, b| {
        b.count()
            .cmp(&a.count())
            .then_with(|| b.run.len().cmp(&a.run.len()))
            .then_with(|| a.run.cmp(&b.run))
    });
    result
}

/// How many runs occur n times, keyed by n.
pub fn occurrence_census<T>(repeats: &[RepeatedRun<T>]) -> BTreeMap<usize, usize> {
    let mut census = BTreeMap::new();
    for repeat in repeats {
        *census.entry(repeat.count()).or_insert(0) += 1;
    }
    census
}
