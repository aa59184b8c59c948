//! Coincidence tests and frequency summaries for ciphertext exploration.
//!
//! Everything here returns plain data; plotting and rendering belong to
//! external layers.

use ahash::AHashMap;
use serde::Serialize;
use std::hash::Hash;
use std::ops::Range;

/// Raw outcome of a coincidence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoincidenceCount {
    pub matches: usize,
    pub checks: usize,
}

impl CoincidenceCount {
    pub fn per_mille(&self) -> f64 {
        if self.checks == 0 {
            0.0
        } else {
            1000.0 * self.matches as f64 / self.checks as f64
        }
    }
}

impl std::ops::AddAssign for CoincidenceCount {
    fn add_assign(&mut self, rhs: Self) {
        self.matches += rhs.matches;
        self.checks += rhs.checks;
    }
}

/// Chi test for correlation between two frequency distributions.
///
/// Statisticians recommend against using this to test a distribution
/// against itself; see [`kappa`] for that.
pub fn chi(dist1: &[u64], dist2: &[u64]) -> f64 {
    let cross: u64 = dist1.iter().zip(dist2).map(|(a, b)| a * b).sum();
    let n1: u64 = dist1.iter().sum();
    let n2: u64 = dist2.iter().sum();
    cross as f64 / (n1 * n2).max(1) as f64
}

/// Kappa test for auto-correlation of one frequency distribution.
///
/// Multiplied by N(N-1) this is the Phi test; divided by the expected
/// auto-correlation of random text it is Friedman's Index of Coincidence.
pub fn kappa(dist: &[u64]) -> f64 {
    let cross: u64 = dist.iter().map(|&d| d * d.saturating_sub(1)).sum();
    let n: u64 = dist.iter().sum();
    cross as f64 / (n * n.saturating_sub(1)).max(1) as f64
}

/// Counts positions where `a`, shifted right by `shift`, agrees with `b`.
pub fn shifted_coincidences<T: Eq>(a: &[T], b: &[T], shift: usize) -> CoincidenceCount {
    let overlap = a.len().saturating_sub(shift).min(b.len());
    let matches = (0..overlap).filter(|&i| a[i + shift] == b[i]).count();
    CoincidenceCount {
        matches,
        checks: overlap,
    }
}

/// Superimposition test for auto-keying ciphers: the message against
/// itself at every shift in `shifts`, as coincidences per mille.
pub fn autokey_profile<T: Eq>(msg: &[T], shifts: Range<usize>) -> Vec<(usize, f64)> {
    shifts
        .map(|shift| (shift, shifted_coincidences(msg, msg, shift).per_mille()))
        .collect()
}

/// Superimposition test for periodic ciphers: every ordered message pair
/// (a message is also laid over itself) at every shift in `shifts`.
pub fn superimposition_profile<T: Eq>(msgs: &[Vec<T>], shifts: Range<usize>) -> Vec<(usize, f64)> {
    shifts
        .map(|shift| {
            let mut total = CoincidenceCount { matches: 0, checks: 0 };
            for a in msgs {
                for b in msgs {
                    total += shifted_coincidences(a, b, shift);
                }
            }
            (shift, total.per_mille())
        })
        .collect()
}

/// Superimposition test for positional polyalphabetic ciphers: each
/// distinct message pair with no shift, from `start` onwards.
pub fn positional_coincidence<T: Eq>(msgs: &[Vec<T>], start: usize) -> CoincidenceCount {
    let mut total = CoincidenceCount { matches: 0, checks: 0 };
    for (i, a) in msgs.iter().enumerate() {
        for b in &msgs[i + 1..] {
            let a = a.get(start..).unwrap_or(&[]);
            let b = b.get(start..).unwrap_or(&[]);
            total += shifted_coincidences(a, b, 0);
        }
    }
    total
}

/// Frequency histogram over a fixed alphabet, zero counts included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencySummary<T> {
    /// (symbol, count), most frequent first; ties break on the symbol.
    pub counts: Vec<(T, usize)>,
}

impl<T> FrequencySummary<T> {
    /// The `n` most frequent symbols.
    pub fn most_common(&self, n: usize) -> &[(T, usize)] {
        &self.counts[..n.min(self.counts.len())]
    }

    /// The `n` least frequent symbols, rarest first.
    pub fn least_common(&self, n: usize) -> impl Iterator<Item = &(T, usize)> {
        self.counts.iter().rev().take(n)
    }

    pub fn mean(&self) -> f64 {
        if self.counts.is_empty() {
            return 0.0;
        }
        let total: usize = self.counts.iter().map(|&(_, c)| c).sum();
        total as f64 / self.counts.len() as f64
    }

    pub fn median(&self) -> f64 {
        if self.counts.is_empty() {
            return 0.0;
        }
        let mut values: Vec<usize> = self.counts.iter().map(|&(_, c)| c).collect();
        values.sort_unstable();
        let mid = values.len() / 2;
        if values.len() % 2 == 1 {
            values[mid] as f64
        } else {
            (values[mid - 1] + values[mid]) as f64 / 2.0
        }
    }
}

/// Counts each alphabet symbol's occurrences in `msg`. Symbols outside the
/// alphabet are ignored.
pub fn frequencies<T: Hash + Eq + Ord + Clone>(msg: &[T], alphabet: &[T]) -> FrequencySummary<T> {
    let mut counts: AHashMap<&T, usize> = alphabet.iter().map(|s| (s, 0)).collect();
    for symbol in msg {
        if let Some(count) = counts.get_mut(symbol) {
            *count += 1;
        }
    }

    let mut counts: Vec<(T, usize)> = counts
        .into_iter()
        .map(|(symbol, count)| (symbol.clone(), count))
        .collect();
    counts.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    FrequencySummary { counts }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chi_known_value() {
        // 2*1 + 1*2 = 4 cross hits over 3*3 total pairs.
        assert!((chi(&[2, 1, 0], &[1, 2, 0]) - 4.0 / 9.0).abs() < 1e-12);
        assert_eq!(chi(&[0, 0], &[0, 0]), 0.0);
    }

    #[test]
    fn test_kappa_known_value() {
        // counts 2,1,1: 2*1 = 2 over 4*3 = 12.
        assert!((kappa(&[2, 1, 1]) - 2.0 / 12.0).abs() < 1e-12);
        assert_eq!(kappa(&[1]), 0.0);
        assert_eq!(kappa(&[]), 0.0);
    }

    #[test]
    fn test_shifted_coincidences() {
        let a: Vec<char> = "abcabc".chars().collect();
        let zero = shifted_coincidences(&a, &a, 0);
        assert_eq!((zero.matches, zero.checks), (6, 6));

        let three = shifted_coincidences(&a, &a, 3);
        assert_eq!((three.matches, three.checks), (3, 3));

        let one = shifted_coincidences(&a, &a, 1);
        assert_eq!((one.matches, one.checks), (0, 5));

        let beyond = shifted_coincidences(&a, &a, 10);
        assert_eq!((beyond.matches, beyond.checks), (0, 0));
    }

    #[test]
    fn test_autokey_profile_peaks_at_period() {
        let msg: Vec<char> = "abcabcabcabc".chars().collect();
        let profile = autokey_profile(&msg, 1..7);

        let by_shift: AHashMap<usize, f64> = profile.into_iter().collect();
        assert_eq!(by_shift[&3], 1000.0);
        assert_eq!(by_shift[&6], 1000.0);
        assert_eq!(by_shift[&1], 0.0);
    }

    #[test]
    fn test_superimposition_profile_counts_all_ordered_pairs() {
        let msgs = vec![
            "ab".chars().collect::<Vec<char>>(),
            "ab".chars().collect(),
        ];
        let profile = superimposition_profile(&msgs, 0..2);

        // Shift 0 lays every message over every message, itself included.
        assert_eq!(profile[0], (0, 1000.0));
        // Shift 1 compares 'b' against 'a' four times.
        assert_eq!(profile[1], (1, 0.0));
    }

    #[test]
    fn test_positional_coincidence() {
        let msgs = vec![
            "abcd".chars().collect::<Vec<char>>(),
            "abzd".chars().collect(),
            "wxyz".chars().collect(),
        ];
        let total = positional_coincidence(&msgs, 0);
        assert_eq!((total.matches, total.checks), (3, 12));

        let offset = positional_coincidence(&msgs, 2);
        assert_eq!((offset.matches, offset.checks), (1, 6));
    }

    #[test]
    fn test_frequencies_with_zero_counts() {
        let msg: Vec<char> = "aabac".chars().collect();
        let alphabet: Vec<char> = "abcd".chars().collect();
        let summary = frequencies(&msg, &alphabet);

        assert_eq!(
            summary.counts,
            vec![('a', 3), ('b', 1), ('c', 1), ('d', 0)]
        );
        assert_eq!(summary.most_common(1), &[('a', 3)]);
        let least: Vec<&(char, usize)> = summary.least_common(1).collect();
        assert_eq!(least, vec![&('d', 0)]);
        assert!((summary.mean() - 1.25).abs() < 1e-12);
        assert!((summary.median() - 1.0).abs() < 1e-12);
    }
}
