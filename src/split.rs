use crate::group::{IsomorphGroup, Repeat};
use ahash::AHashMap;
use std::hash::Hash;

impl IsomorphGroup {
    /// Re-examines each occurrence window for repeated letters the current
    /// pattern does not record, and partitions the positions by their full
    /// repeat signature.
    ///
    /// A group produced by intersection may be too coarse: some of its
    /// occurrences can share extra repeats. Each window is scanned left to
    /// right, tracking the most recent unpaired offset per symbol; a symbol
    /// seen three or more times pairs adjacent appearances only. Positions
    /// whose extended patterns agree stay together; patterns backed by a
    /// single position are dropped.
    pub fn split_enclosing<T: Hash + Eq>(&self, msg: &[T]) -> Vec<IsomorphGroup> {
        let mut positions_by_pattern: AHashMap<Vec<Repeat>, Vec<usize>> = AHashMap::new();

        for &position in self.positions() {
            let start = position.min(msg.len());
            let end = (position + self.max_offset()).min(msg.len());
            let window = &msg[start..end];

            let mut pattern: Vec<Repeat> = self.pattern().to_vec();
            let mut unpaired: AHashMap<&T, usize> = AHashMap::new();
            for (offset, letter) in window.iter().enumerate() {
                if let Some(first) = unpaired.remove(letter) {
                    pattern.push(Repeat::new(first, offset - first));
                } else {
                    unpaired.insert(letter, offset);
                }
            }

            pattern.sort_unstable();
            pattern.dedup();
            positions_by_pattern.entry(pattern).or_default().push(position);
        }

        let mut result: Vec<IsomorphGroup> = positions_by_pattern
            .into_iter()
            .filter(|(_, positions)| positions.len() > 1)
            .map(|(pattern, positions)| IsomorphGroup::new(positions, pattern))
            .collect();
        result.sort_unstable();
        result
    }
}
