//! Without-replacement protocols: serial passes, ratio passes, grouped
//! repetition and subset membership.

use std::collections::{HashMap, HashSet};

use aleatoric_core::protocols::{GroupedRepetition, Ratio, Subset};
use aleatoric_core::{NumberProtocol, ProtocolKind, Range, RandomEngine};

fn collect(protocol: &mut NumberProtocol, rng: &mut RandomEngine, count: usize) -> Vec<i64> {
    (0..count)
        .map(|_| protocol.next_int(rng).unwrap())
        .collect()
}

fn counts(values: &[i64]) -> HashMap<i64, usize> {
    let mut map = HashMap::new();
    for v in values {
        *map.entry(*v).or_insert(0) += 1;
    }
    map
}

#[test]
fn serial_emits_each_value_once_per_pass() {
    let mut rng = RandomEngine::from_seed(5);
    let range = Range::new(0, 9).unwrap();
    let mut protocol = NumberProtocol::with_defaults(ProtocolKind::Serial, range);

    for _ in 0..20 {
        let pass = collect(&mut protocol, &mut rng, 10);
        let distinct: HashSet<i64> = pass.iter().copied().collect();
        assert_eq!(distinct.len(), 10, "a pass repeated a value: {pass:?}");
        assert!(pass.iter().all(|v| range.contains(*v)));
    }
}

#[test]
fn serial_reset_abandons_the_current_pass() {
    let mut rng = RandomEngine::from_seed(5);
    let range = Range::new(0, 4).unwrap();
    let mut protocol = NumberProtocol::with_defaults(ProtocolKind::Serial, range);

    // Consume a partial pass, then reset; a full fresh pass must follow.
    collect(&mut protocol, &mut rng, 3);
    protocol.reset();

    let pass = collect(&mut protocol, &mut rng, 5);
    let distinct: HashSet<i64> = pass.iter().copied().collect();
    assert_eq!(distinct.len(), 5);
}

#[test]
fn ratio_honours_the_per_value_quotas_within_a_pass() {
    let mut rng = RandomEngine::from_seed(5);
    let range = Range::new(0, 2).unwrap();
    let mut protocol = NumberProtocol::from(Ratio::new(range, vec![3, 1, 2]).unwrap());

    for _ in 0..10 {
        let pass = collect(&mut protocol, &mut rng, 6);
        let map = counts(&pass);
        assert_eq!(map.get(&0), Some(&3), "pass was {pass:?}");
        assert_eq!(map.get(&1), Some(&1), "pass was {pass:?}");
        assert_eq!(map.get(&2), Some(&2), "pass was {pass:?}");
    }
}

#[test]
fn ratio_zero_quota_excludes_a_value() {
    let mut rng = RandomEngine::from_seed(5);
    let range = Range::new(0, 2).unwrap();
    let mut protocol = NumberProtocol::from(Ratio::new(range, vec![2, 0, 2]).unwrap());

    let values = collect(&mut protocol, &mut rng, 40);
    assert!(!values.contains(&1));
}

#[test]
fn grouped_repetition_emits_groups_matching_the_groupings() {
    let mut rng = RandomEngine::from_seed(5);
    let range = Range::new(0, 1).unwrap();
    let mut protocol = NumberProtocol::from(GroupedRepetition::new(range, vec![1, 2]).unwrap());

    // One full pass: both values used once, both groupings used once,
    // so a pass is three draws with counts {1, 2}.
    for _ in 0..10 {
        let pass = collect(&mut protocol, &mut rng, 3);
        let map = counts(&pass);
        let mut sizes: Vec<usize> = map.values().copied().collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 2], "pass was {pass:?}");
        // The repeated value must be contiguous.
        assert!(
            pass[0] == pass[1] || pass[1] == pass[2],
            "group was split: {pass:?}"
        );
    }
}

#[test]
fn subset_draws_come_from_a_bounded_subset() {
    let mut rng = RandomEngine::from_seed(5);
    let range = Range::new(0, 9).unwrap();
    let mut protocol = NumberProtocol::from(Subset::new(range, 2, 4).unwrap());

    let values = collect(&mut protocol, &mut rng, 1000);
    let distinct: HashSet<i64> = values.iter().copied().collect();
    assert!(
        (2..=4).contains(&distinct.len()),
        "saw {} distinct values",
        distinct.len()
    );
    assert!(values.iter().all(|v| range.contains(*v)));
}

#[test]
fn subset_reset_may_choose_a_new_subset_but_stays_bounded() {
    let mut rng = RandomEngine::from_seed(5);
    let range = Range::new(0, 9).unwrap();
    let mut protocol = NumberProtocol::from(Subset::new(range, 3, 3).unwrap());

    let first: HashSet<i64> = collect(&mut protocol, &mut rng, 500).into_iter().collect();
    assert_eq!(first.len(), 3);

    protocol.reset();
    let second: HashSet<i64> = collect(&mut protocol, &mut rng, 500).into_iter().collect();
    assert_eq!(second.len(), 3);
}
