use serde::Serialize;
use std::fmt;

/// A single repeated-letter constraint inside an occurrence window.
///
/// `offset` and `gap` mean: the symbol at relative position `offset` equals
/// the symbol at relative position `offset + gap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Repeat {
    pub offset: usize,
    pub gap: usize,
}

impl Repeat {
    pub fn new(offset: usize, gap: usize) -> Self {
        Self { offset, gap }
    }

    /// Relative position of the second symbol of the pair.
    pub(crate) fn end(&self) -> usize {
        self.offset + self.gap
    }

    /// The same constraint moved `by` positions to the right.
    pub(crate) fn shifted(&self, by: usize) -> Repeat {
        Repeat::new(self.offset + by, self.gap)
    }
}

/// A group of isomorphs sharing the same pattern of repeated letters.
///
/// Immutable. A group is identified by the list of positions where the
/// isomorph appears and the specific pattern of repeated letters each
/// occurrence exhibits; both are kept sorted and deduplicated, so equality
/// and hashing are structural. The initial groups each hold every pair of
/// repeated letters at a given gap; larger-pattern groups are created by
/// intersecting groups and splitting the results.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct IsomorphGroup {
    positions: Box<[usize]>,
    pattern: Box<[Repeat]>,
    max_offset: usize,
}

impl IsomorphGroup {
    /// Builds a group from raw position and constraint collections.
    ///
    /// Inputs are normalized (sorted, deduplicated); empty inputs yield a
    /// degenerate zero-order/zero-size group that downstream stages drop.
    pub fn new(
        positions: impl IntoIterator<Item = usize>,
        pattern: impl IntoIterator<Item = Repeat>,
    ) -> Self {
        let mut positions: Vec<usize> = positions.into_iter().collect();
        positions.sort_unstable();
        positions.dedup();

        let mut pattern: Vec<Repeat> = pattern.into_iter().collect();
        pattern.sort_unstable();
        pattern.dedup();

        let max_offset = pattern.iter().map(Repeat::end).max().unwrap_or(0);

        Self {
            positions: positions.into_boxed_slice(),
            pattern: pattern.into_boxed_slice(),
            max_offset,
        }
    }

    /// Start offsets of every occurrence, ascending.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// The repeated-letter constraints, in canonical order.
    pub fn pattern(&self) -> &[Repeat] {
        &self.pattern
    }

    /// Span of the matched window; the window covers `max_offset + 1` symbols.
    pub fn max_offset(&self) -> usize {
        self.max_offset
    }

    /// Number of constraints defining this isomorph.
    pub fn order(&self) -> usize {
        self.pattern.len()
    }

    /// Number of occurrences sharing the pattern.
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// True iff `other` covers the same positions with a subset of this
    /// group's constraints, i.e. this group already explains it.
    pub fn contains(&self, other: &IsomorphGroup) -> bool {
        self.positions == other.positions
            && other.pattern.iter().all(|r| self.pattern.contains(r))
    }

    /// Checks the defining property: every constraint holds at every
    /// position of `msg`. Out-of-range constraints count as violations.
    pub fn holds_in<T: Eq>(&self, msg: &[T]) -> bool {
        self.positions.iter().all(|&p| {
            self.pattern.iter().all(|r| {
                match (msg.get(p + r.offset), msg.get(p + r.end())) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                }
            })
        })
    }

    /// Renders the pattern as matching letters over a `_`-filled window,
    /// e.g. `ABAB_A`. Constraints beyond the 26th are left unlabeled.
    pub fn pattern_string(&self) -> String {
        let mut cells = vec!['_'; self.max_offset + 1];
        for (letter, rep) in ('A'..='Z').zip(self.pattern.iter()) {
            let mut ch = letter;
            if cells[rep.offset] != '_' {
                ch = cells[rep.offset];
            } else if cells[rep.end()] != '_' {
                ch = cells[rep.end()];
            }
            cells[rep.offset] = ch;
            cells[rep.end()] = ch;
        }
        cells.into_iter().collect()
    }

    /// Occurrence windows of this group within `msg`, clamped to its end.
    pub fn windows<'a, T>(&'a self, msg: &'a [T]) -> impl Iterator<Item = &'a [T]> + 'a {
        self.positions.iter().map(move |&p| {
            let start = p.min(msg.len());
            let end = (p + self.max_offset).min(msg.len());
            &msg[start..end]
        })
    }
}

impl fmt::Display for IsomorphGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IsomorphGroup(size={}, order={}, positions={:?}, pattern=\"{}\")",
            self.size(),
            self.order(),
            self.positions,
            self.pattern_string()
        )
    }
}
