use crate::config::DiscoveryConfig;
use crate::error::{IsomorphError, Result};
use crate::group::IsomorphGroup;
use crate::seed::initial_groups;
use ahash::AHashSet;
use log::debug;
use std::hash::Hash;

/// Finds all maximal, non-accidental isomorph groups in a sequence.
///
/// Fixed-point iteration: the initial gap groups are intersected pairwise,
/// the results are split into consistent subgroups, and every generation of
/// survivors is intersected against the initial groups again until a round
/// produces nothing new. The accumulated groups are then thresholded
/// (`order > 2 || size > 2`), deduplicated, and stripped of groups whose
/// structure another group over the same positions already explains.
///
/// The result is sorted canonically, so two runs over the same input and
/// configuration return identical vectors.
pub fn find_isomorphs<T: Hash + Eq>(
    msg: &[T],
    config: &DiscoveryConfig,
) -> Result<Vec<IsomorphGroup>> {
    config.validate()?;

    let initial = initial_groups(msg, config.max_distance);
    debug!("seeded {} initial gap groups", initial.len());

    let mut seen: AHashSet<IsomorphGroup> = AHashSet::new();
    for (i, a) in initial.iter().enumerate() {
        for b in &initial[i + 1..] {
            seen.extend(a.intersect(b, config.nearby));
        }
    }
    let mut frontier = split_all(seen, msg);

    let mut collected: Vec<IsomorphGroup> = Vec::new();
    let mut rounds = 0usize;
    while !frontier.is_empty() {
        rounds += 1;
        if rounds > config.max_rounds {
            return Err(IsomorphError::RoundBudgetExceeded {
                max_rounds: config.max_rounds,
            });
        }

        let mut next: AHashSet<IsomorphGroup> = AHashSet::new();
        for group in &frontier {
            for seed in &initial {
                next.extend(group.intersect(seed, config.nearby));
            }
        }
        let next = split_all(next, msg);

        debug!(
            "round {rounds}: accumulated {} groups, {} queued",
            frontier.len(),
            next.len()
        );
        collected.append(&mut frontier);
        frontier = next;
    }

    // Only non-accidental isomorphs, please.
    let survivors: AHashSet<IsomorphGroup> = collected
        .into_iter()
        .filter(|g| g.order() > 2 || g.size() > 2)
        .collect();
    let mut survivors: Vec<IsomorphGroup> = survivors.into_iter().collect();
    survivors.sort_unstable();

    Ok(prune_contained(survivors))
}

/// Removes every group another group in the set contains (same positions,
/// superset pattern). Idempotent: the survivors never contain each other.
pub fn prune_contained(groups: Vec<IsomorphGroup>) -> Vec<IsomorphGroup> {
    let mut rejected = vec![false; groups.len()];
    for i in 0..groups.len() {
        for j in (i + 1)..groups.len() {
            if groups[i].contains(&groups[j]) {
                rejected[j] = true;
            }
            if groups[j].contains(&groups[i]) {
                rejected[i] = true;
            }
        }
    }

    groups
        .into_iter()
        .zip(rejected)
        .filter(|&(_, r)| !r)
        .map(|(g, _)| g)
        .collect()
}

fn split_all<T: Hash + Eq>(groups: AHashSet<IsomorphGroup>, msg: &[T]) -> Vec<IsomorphGroup> {
    groups
        .into_iter()
        .flat_map(|g| g.split_enclosing(msg))
        .collect()
}
