//! Expected-by-chance occurrence rates for isomorph groups.
//!
//! Running discovery over random sequences of a given length tells us how
//! many groups of each (order, size) arise with no structure present at
//! all. The resulting table annotates reports; it never influences which
//! groups the engine returns.

use crate::config::DiscoveryConfig;
use crate::discover::find_isomorphs;
use crate::error::{IsomorphError, Result};
use ahash::AHashMap;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::Hash;

/// Average number of groups of one (order, size) expected by chance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpectedRate {
    pub order: usize,
    pub size: usize,
    pub expected: f64,
}

/// Expected rates keyed by sequence length.
///
/// An injected resource: build one with [`calibrate`], or deserialize a
/// previously computed table and hand it to the report layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalibrationTable {
    by_length: BTreeMap<usize, Vec<ExpectedRate>>,
}

impl CalibrationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the rates for one sequence length, replacing any previous
    /// entry.
    pub fn insert(&mut self, length: usize, mut rates: Vec<ExpectedRate>) {
        rates.sort_unstable_by_key(|r| (r.order, r.size));
        self.by_length.insert(length, rates);
    }

    /// Expected count of (order, size) groups in a random sequence of
    /// `length` symbols, if known.
    pub fn expected(&self, length: usize, order: usize, size: usize) -> Option<f64> {
        self.by_length.get(&length)?.iter().find_map(|r| {
            (r.order == order && r.size == size).then_some(r.expected)
        })
    }

    /// Sequence lengths the table has been calibrated for.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_length.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }
}

/// Builds a calibration table by Monte Carlo simulation.
///
/// For each length, `trials` uniformly random sequences over `alphabet`
/// are run through discovery with `config`, and the group counts per
/// (order, size) are averaged. The run is deterministic in `seed`: each
/// length gets its own derived substream.
pub fn calibrate<T: Hash + Eq + Clone>(
    alphabet: &[T],
    lengths: &[usize],
    trials: usize,
    seed: u64,
    config: &DiscoveryConfig,
) -> Result<CalibrationTable> {
    config.validate()?;
    if alphabet.is_empty() {
        return Err(IsomorphError::InvalidConfig("alphabet must not be empty".into()));
    }
    if trials == 0 {
        return Err(IsomorphError::InvalidConfig("trials must be at least 1".into()));
    }

    let mut table = CalibrationTable::new();
    for (stream, &length) in lengths.iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(substream_seed(seed, stream as u64));
        let mut totals: AHashMap<(usize, usize), usize> = AHashMap::new();

        for _ in 0..trials {
            let msg: Vec<T> = (0..length)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())].clone())
                .collect();
            for group in find_isomorphs(&msg, config)? {
                *totals.entry((group.order(), group.size())).or_default() += 1;
            }
        }

        let rates: Vec<ExpectedRate> = totals
            .into_iter()
            .map(|((order, size), total)| ExpectedRate {
                order,
                size,
                expected: total as f64 / trials as f64,
            })
            .collect();
        debug!(
            "length {length}: {} distinct (order, size) rates from {trials} trials",
            rates.len()
        );
        table.insert(length, rates);
    }

    Ok(table)
}

fn substream_seed(master: u64, stream: u64) -> u64 {
    let mut z = master ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
