use crate::group::{IsomorphGroup, Repeat};
use ahash::AHashMap;

impl IsomorphGroup {
    /// Combines two groups whose occurrences co-occur at a consistent
    /// relative distance into larger-pattern groups.
    ///
    /// Every pair from the cartesian product of the two position sets is
    /// bucketed by its signed distance, but only if the pair is nearby:
    ///
    /// ```text
    /// pos1
    /// v
    /// A___A
    ///       B____B
    ///       ^
    ///       pos2
    ///
    /// [ dist]
    /// A___A B____B
    /// ```
    ///
    /// `pos1` is nearby `pos2` iff `pos1 + self.max_offset >= pos2 - nearby`
    /// and `pos2 + other.max_offset >= pos1 - nearby`, i.e. the occurrence
    /// windows overlap or come within `nearby` symbols of touching.
    ///
    /// Each bucket with at least two pairs becomes one new group: the
    /// anchor side keeps its pattern and absorbs the other side's pattern
    /// shifted by the distance. A bucket that adds no constraint beyond the
    /// anchor's own pattern is discarded.
    pub fn intersect(&self, other: &IsomorphGroup, nearby: usize) -> Vec<IsomorphGroup> {
        let slack = nearby as i64;
        let mut pairs_by_distance: AHashMap<i64, Vec<(usize, usize)>> = AHashMap::new();

        for &p1 in self.positions() {
            for &p2 in other.positions() {
                let (a, b) = (p1 as i64, p2 as i64);
                if a + self.max_offset() as i64 >= b - slack
                    && b + other.max_offset() as i64 >= a - slack
                {
                    pairs_by_distance.entry(b - a).or_default().push((p1, p2));
                }
            }
        }

        // A single co-occurrence is not statistically meaningful.
        let mut buckets: Vec<(i64, Vec<(usize, usize)>)> = pairs_by_distance
            .into_iter()
            .filter(|(_, pairs)| pairs.len() > 1)
            .collect();
        buckets.sort_unstable_by_key(|&(dist, _)| dist);

        let mut results = Vec::new();
        for (dist, pairs) in buckets {
            let group = if dist >= 0 {
                // other lands after self; self's side anchors the offsets.
                let shift = dist as usize;
                IsomorphGroup::new(
                    pairs.iter().map(|&(p1, _)| p1),
                    self.pattern()
                        .iter()
                        .copied()
                        .chain(other.pattern().iter().map(|r| r.shifted(shift))),
                )
            } else {
                // self lands after other; other's side anchors the offsets.
                let shift = (-dist) as usize;
                IsomorphGroup::new(
                    pairs.iter().map(|&(_, p2)| p2),
                    other
                        .pattern()
                        .iter()
                        .copied()
                        .chain(self.pattern().iter().map(|r| r.shifted(shift))),
                )
            };

            let anchor = if dist >= 0 { self.pattern() } else { other.pattern() };
            if group.pattern() == anchor {
                continue;
            }
            results.push(group);
        }

        results
    }
}
