//! Step- and repetition-constrained protocols, checked as statistical
//! invariants over seeded runs rather than exact orderings.

use aleatoric_core::protocols::{AdjacentSteps, GranularWalk, Periodic, Precision, Walk};
use aleatoric_core::{
    NumberProtocol, ProtocolConfig, ProtocolKind, ProtocolParams, Range, RandomEngine,
};

fn collect(protocol: &mut NumberProtocol, rng: &mut RandomEngine, count: usize) -> Vec<i64> {
    (0..count)
        .map(|_| protocol.next_int(rng).unwrap())
        .collect()
}

#[test]
fn basic_stays_in_range_and_eventually_covers_it() {
    let mut rng = RandomEngine::from_seed(11);
    let range = Range::new(0, 9).unwrap();
    let mut protocol = NumberProtocol::with_defaults(ProtocolKind::Basic, range);

    let values = collect(&mut protocol, &mut rng, 1000);
    assert!(values.iter().all(|v| range.contains(*v)));
    for expected in 0..=9 {
        assert!(values.contains(&expected), "{expected} never produced");
    }
}

#[test]
fn no_repetition_never_repeats_consecutively() {
    let mut rng = RandomEngine::from_seed(11);
    let range = Range::new(0, 4).unwrap();
    let mut protocol = NumberProtocol::with_defaults(ProtocolKind::NoRepetition, range);

    let values = collect(&mut protocol, &mut rng, 1000);
    assert!(values.iter().all(|v| range.contains(*v)));
    assert!(values.windows(2).all(|w| w[0] != w[1]));
}

#[test]
fn adjacent_steps_moves_by_exactly_one() {
    let mut rng = RandomEngine::from_seed(11);
    let range = Range::new(0, 9).unwrap();
    let mut protocol = NumberProtocol::with_defaults(ProtocolKind::AdjacentSteps, range);

    let values = collect(&mut protocol, &mut rng, 1000);
    assert!(values.iter().all(|v| range.contains(*v)));
    assert!(values.windows(2).all(|w| (w[0] - w[1]).abs() == 1));
}

#[test]
fn adjacent_steps_honours_an_initial_selection() {
    let mut rng = RandomEngine::from_seed(11);
    let range = Range::new(0, 9).unwrap();
    let mut protocol =
        NumberProtocol::from(AdjacentSteps::with_initial_selection(range, 0).unwrap());

    assert_eq!(protocol.next_int(&mut rng).unwrap(), 0);
    // The only neighbour of the lower bound is one above it.
    assert_eq!(protocol.next_int(&mut rng).unwrap(), 1);

    protocol.reset();
    assert_eq!(protocol.next_int(&mut rng).unwrap(), 0);
}

#[test]
fn walk_steps_are_bounded_by_max_step() {
    let mut rng = RandomEngine::from_seed(11);
    let range = Range::new(0, 9).unwrap();
    let mut protocol = NumberProtocol::from(Walk::new(range, 3).unwrap());

    let values = collect(&mut protocol, &mut rng, 1000);
    assert!(values.iter().all(|v| range.contains(*v)));
    assert!(values.windows(2).all(|w| (w[0] - w[1]).abs() <= 3));
}

#[test]
fn walk_with_max_step_one_behaves_like_adjacent_steps_or_stays() {
    let mut rng = RandomEngine::from_seed(11);
    let range = Range::new(0, 9).unwrap();
    let mut protocol = NumberProtocol::with_defaults(ProtocolKind::Walk, range);

    let values = collect(&mut protocol, &mut rng, 500);
    assert!(values.windows(2).all(|w| (w[0] - w[1]).abs() <= 1));
}

#[test]
fn granular_walk_deviates_within_the_scaled_span() {
    let mut rng = RandomEngine::from_seed(11);
    let range = Range::new(0, 10).unwrap();
    let mut protocol = NumberProtocol::from(GranularWalk::new(range, 0.3).unwrap());

    let mut previous = protocol.next_decimal(&mut rng).unwrap();
    // deviation factor 0.3 over a span of 10 allows steps of up to 3.0
    for _ in 0..1000 {
        let value = protocol.next_decimal(&mut rng).unwrap();
        assert!(range.contains_f64(value), "{value} escaped the range");
        assert!((value - previous).abs() <= 3.0 + 1e-9);
        previous = value;
    }
}

#[test]
fn granular_walk_integers_are_rounded_decimals() {
    let mut rng = RandomEngine::from_seed(11);
    let range = Range::new(0, 10).unwrap();
    let mut protocol =
        NumberProtocol::from(GranularWalk::with_initial_selection(range, 1.0, 5).unwrap());

    assert_eq!(protocol.next_int(&mut rng).unwrap(), 5);
    for _ in 0..200 {
        let value = protocol.next_int(&mut rng).unwrap();
        assert!((0..=10).contains(&value));
    }
}

#[test]
fn periodic_with_full_chance_locks_onto_one_value() {
    let mut rng = RandomEngine::from_seed(11);
    let range = Range::new(0, 9).unwrap();
    let mut protocol = NumberProtocol::from(Periodic::new(range, 1.0).unwrap());

    let values = collect(&mut protocol, &mut rng, 100);
    assert!(values.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn periodic_with_zero_chance_never_repeats() {
    let mut rng = RandomEngine::from_seed(11);
    let range = Range::new(0, 9).unwrap();
    let mut protocol = NumberProtocol::from(Periodic::new(range, 0.0).unwrap());

    let values = collect(&mut protocol, &mut rng, 1000);
    assert!(values.windows(2).all(|w| w[0] != w[1]));
}

#[test]
fn periodic_default_chance_repeats_sometimes_but_not_always() {
    let mut rng = RandomEngine::from_seed(11);
    let range = Range::new(0, 9).unwrap();
    let mut protocol = NumberProtocol::with_defaults(ProtocolKind::Periodic, range);

    let values = collect(&mut protocol, &mut rng, 1000);
    let repeats = values.windows(2).filter(|w| w[0] == w[1]).count();
    assert!(repeats > 0, "chance 0.5 produced no repetition in 1000 draws");
    assert!(repeats < 999, "chance 0.5 repeated on every draw");
}

#[test]
fn periodic_initial_selection_survives_reset() {
    let mut rng = RandomEngine::from_seed(11);
    let range = Range::new(0, 9).unwrap();
    let mut protocol =
        NumberProtocol::from(Periodic::with_initial_selection(range, 0.0, 7).unwrap());

    assert_eq!(protocol.next_int(&mut rng).unwrap(), 7);
    protocol.reset();
    assert_eq!(protocol.next_int(&mut rng).unwrap(), 7);
}

#[test]
fn precision_follows_a_degenerate_distribution_exactly() {
    let mut rng = RandomEngine::from_seed(11);
    let range = Range::new(0, 3).unwrap();
    let mut protocol =
        NumberProtocol::from(Precision::new(range, vec![0.0, 0.0, 1.0, 0.0]).unwrap());

    let values = collect(&mut protocol, &mut rng, 50);
    assert!(values.iter().all(|v| *v == 2));
}

#[test]
fn precision_initial_selection_comes_before_the_distribution() {
    let mut rng = RandomEngine::from_seed(11);
    let range = Range::new(0, 3).unwrap();
    let mut protocol = NumberProtocol::from(
        Precision::with_initial_selection(range, vec![1.0, 0.0, 0.0, 0.0], 3).unwrap(),
    );

    assert_eq!(protocol.next_int(&mut rng).unwrap(), 3);
    assert_eq!(protocol.next_int(&mut rng).unwrap(), 0);

    protocol.reset();
    assert_eq!(protocol.next_int(&mut rng).unwrap(), 3);
}

#[test]
fn set_params_rejects_a_mismatched_parameter_set() {
    let range = Range::new(0, 9).unwrap();
    let mut protocol = NumberProtocol::with_defaults(ProtocolKind::Walk, range);

    let result = protocol.set_params(ProtocolConfig::new(
        range,
        ProtocolParams::Cycle {
            bidirectional: false,
            reverse_direction: false,
        },
    ));
    assert!(result.is_err());
}

#[test]
fn walk_set_params_revalidates_the_step_against_the_new_range() {
    let range = Range::new(0, 9).unwrap();
    let mut protocol = NumberProtocol::with_defaults(ProtocolKind::Walk, range);

    let narrow = Range::new(0, 2).unwrap();
    let result = protocol.set_params(ProtocolConfig::new(
        narrow,
        ProtocolParams::Walk { max_step: 5 },
    ));
    assert!(result.is_err(), "max step larger than the range was accepted");
}
