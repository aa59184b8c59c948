//! End-to-end discovery scenarios with hand-derived expectations.

use crate::{find_isomorphs, initial_groups, DiscoveryConfig, IsomorphGroup, Repeat};

/// Three windows with the structure ABABCC at positions 0, 8 and 16,
/// written with disjoint letters so only the repeat structure recurs.
fn isomorph_rich_message() -> Vec<char> {
    "ababccxydedeffzwghghii".chars().collect()
}

#[test]
fn test_backbone_group_is_discovered() {
    let msg = isomorph_rich_message();
    let groups = find_isomorphs(&msg, &DiscoveryConfig::default()).unwrap();

    // The ABABCC structure itself: gap-2 repeats at offsets 0 and 1 plus
    // the gap-1 repeat at offset 4, at all three windows.
    let backbone = IsomorphGroup::new(
        [0, 8, 16],
        [Repeat::new(0, 2), Repeat::new(1, 2), Repeat::new(4, 1)],
    );
    assert!(
        groups.contains(&backbone),
        "expected {} among {:?}",
        backbone,
        groups.iter().map(|g| g.to_string()).collect::<Vec<_>>()
    );
}

#[test]
fn test_offset_variant_is_discovered() {
    let msg = isomorph_rich_message();
    let groups = find_isomorphs(&msg, &DiscoveryConfig::default()).unwrap();

    // Starting one symbol later: BAB.CC collapses to a gap-2 repeat and a
    // shifted gap-1 repeat at all three windows.
    let shifted = IsomorphGroup::new([1, 9, 17], [Repeat::new(0, 2), Repeat::new(3, 1)]);
    assert!(groups.contains(&shifted));
}

#[test]
fn test_sub_threshold_groups_are_absent() {
    let msg = isomorph_rich_message();
    let groups = find_isomorphs(&msg, &DiscoveryConfig::default()).unwrap();

    // The CC..DE alignment only recurs twice with two constraints.
    let weak = IsomorphGroup::new([4, 12], [Repeat::new(0, 1), Repeat::new(4, 2)]);
    assert!(!groups.contains(&weak));
    for group in &groups {
        assert!(group.order() > 2 || group.size() > 2);
    }
}

#[test]
fn test_all_results_hold_and_are_irredundant() {
    let msg = isomorph_rich_message();
    let groups = find_isomorphs(&msg, &DiscoveryConfig::default()).unwrap();

    assert!(!groups.is_empty());
    for (i, a) in groups.iter().enumerate() {
        assert!(a.holds_in(&msg));
        for b in &groups[i + 1..] {
            assert!(!a.contains(b));
            assert!(!b.contains(a));
        }
    }
}

#[test]
fn test_single_symbol_run_seeds_gap_one() {
    let msg = vec!['x'; 8];
    let seeds = initial_groups(&msg, 6);

    assert_eq!(seeds.len(), 1);
    assert_eq!(seeds[0].pattern(), &[Repeat::new(0, 1)]);
    assert_eq!(seeds[0].positions(), &[0, 1, 2, 3, 4, 5, 6]);

    // A lone gap bucket has nothing to intersect with.
    assert_eq!(find_isomorphs(&msg, &DiscoveryConfig::default()).unwrap(), vec![]);
}

#[test]
fn test_sparse_sequence_yields_nothing() {
    let msg: Vec<u8> = (0..20).collect();
    assert_eq!(find_isomorphs(&msg, &DiscoveryConfig::default()).unwrap(), vec![]);
}

#[test]
fn test_pooled_gap_bucket_cannot_self_intersect() {
    // ababac: 'a' and 'b' both repeat at gap 2, pooling into a single
    // initial bucket, so pairwise seeding has no partner and discovery
    // stays empty despite the local structure.
    let msg: Vec<char> = "ababac".chars().collect();
    let seeds = initial_groups(&msg, 6);

    assert_eq!(seeds.len(), 1);
    assert_eq!(seeds[0].positions(), &[0, 1, 2]);
    assert_eq!(seeds[0].pattern(), &[Repeat::new(0, 2)]);

    assert_eq!(find_isomorphs(&msg, &DiscoveryConfig::default()).unwrap(), vec![]);
}

#[test]
fn test_discovery_is_deterministic_across_configs() {
    let msg = isomorph_rich_message();
    let tight = DiscoveryConfig {
        nearby: 0,
        ..DiscoveryConfig::default()
    };

    let a = find_isomorphs(&msg, &tight).unwrap();
    let b = find_isomorphs(&msg, &tight).unwrap();
    assert_eq!(a, b);
}
