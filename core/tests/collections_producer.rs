//! The producer contract: range ownership, source swaps, protocol swaps.

use aleatoric_core::{
    CollectionsProducer, NumberProtocol, ProtocolConfig, ProtocolKind, ProtocolParams,
    RandomEngine,
};

fn cycle_producer(source: Vec<char>) -> CollectionsProducer<char> {
    CollectionsProducer::new(source, NumberProtocol::create(ProtocolKind::Cycle)).unwrap()
}

#[test]
fn rejects_a_source_smaller_than_two() {
    let result = CollectionsProducer::new(vec!['a'], NumberProtocol::create(ProtocolKind::Basic));
    assert!(result.is_err());
}

#[test]
fn forces_the_protocol_range_onto_the_source_size() {
    let producer = cycle_producer(vec!['a', 'b', 'c', 'd']);
    let range = producer.get_params().range;
    assert_eq!((range.start, range.end), (0, 3));
}

#[test]
fn cycles_through_the_source_in_order() {
    let mut rng = RandomEngine::from_seed(3);
    let mut producer = cycle_producer(vec!['a', 'b', 'c']);

    let items = producer.get_collection(6, &mut rng).unwrap();
    assert_eq!(items, vec!['a', 'b', 'c', 'a', 'b', 'c']);
}

#[test]
fn get_collection_matches_sequential_get_item_calls() {
    let source = vec![10, 20, 30, 40];
    let mut rng_a = RandomEngine::from_seed(3);
    let mut rng_b = RandomEngine::from_seed(3);

    let mut producer_a =
        CollectionsProducer::new(source.clone(), NumberProtocol::create(ProtocolKind::Basic))
            .unwrap();
    let mut producer_b =
        CollectionsProducer::new(source, NumberProtocol::create(ProtocolKind::Basic)).unwrap();

    let batch = producer_a.get_collection(20, &mut rng_a).unwrap();
    let singles: Vec<i32> = (0..20)
        .map(|_| producer_b.get_item(&mut rng_b).unwrap())
        .collect();
    assert_eq!(batch, singles);
}

#[test]
fn set_params_reconfigures_the_active_protocol() {
    let mut rng = RandomEngine::from_seed(3);
    let mut producer = cycle_producer(vec!['a', 'b', 'c']);

    producer
        .set_params(ProtocolConfig::new(
            producer.get_params().range,
            ProtocolParams::Cycle {
                bidirectional: false,
                reverse_direction: true,
            },
        ))
        .unwrap();

    let items = producer.get_collection(3, &mut rng).unwrap();
    assert_eq!(items, vec!['c', 'b', 'a']);
}

#[test]
fn set_params_rejects_parameters_for_another_protocol() {
    let mut producer = cycle_producer(vec!['a', 'b', 'c']);

    let result = producer.set_params(ProtocolConfig::new(
        producer.get_params().range,
        ProtocolParams::Walk { max_step: 1 },
    ));
    assert!(result.is_err());
}

#[test]
fn same_size_source_swap_preserves_custom_parameters() {
    let mut rng = RandomEngine::from_seed(3);
    let mut producer = cycle_producer(vec!['a', 'b', 'c']);

    producer
        .set_params(ProtocolConfig::new(
            producer.get_params().range,
            ProtocolParams::Cycle {
                bidirectional: true,
                reverse_direction: true,
            },
        ))
        .unwrap();

    producer.set_source(vec!['x', 'y', 'z']).unwrap();

    assert!(matches!(
        producer.get_params().params,
        ProtocolParams::Cycle {
            bidirectional: true,
            reverse_direction: true,
        }
    ));
    let items = producer.get_collection(5, &mut rng).unwrap();
    assert_eq!(items, vec!['z', 'y', 'x', 'y', 'z']);
}

#[test]
fn size_changing_source_swap_resets_the_protocol_to_defaults() {
    let mut rng = RandomEngine::from_seed(3);
    let mut producer = cycle_producer(vec!['a', 'b', 'c']);

    producer
        .set_params(ProtocolConfig::new(
            producer.get_params().range,
            ProtocolParams::Cycle {
                bidirectional: true,
                reverse_direction: true,
            },
        ))
        .unwrap();

    producer.set_source(vec!['d', 'e', 'f', 'g']).unwrap();

    let config = producer.get_params();
    assert_eq!((config.range.start, config.range.end), (0, 3));
    assert!(matches!(
        config.params,
        ProtocolParams::Cycle {
            bidirectional: false,
            reverse_direction: false,
        }
    ));
    let items = producer.get_collection(8, &mut rng).unwrap();
    assert_eq!(items, vec!['d', 'e', 'f', 'g', 'd', 'e', 'f', 'g']);
}

#[test]
fn rejected_source_swap_keeps_the_previous_source() {
    let mut producer = cycle_producer(vec!['a', 'b', 'c']);

    assert!(producer.set_source(vec!['x']).is_err());
    assert_eq!(producer.source(), &['a', 'b', 'c']);
}

#[test]
fn set_protocol_installs_defaults_over_the_source_range() {
    let mut rng = RandomEngine::from_seed(3);
    let mut producer = CollectionsProducer::new(
        vec![1, 2, 3, 4, 5],
        NumberProtocol::create(ProtocolKind::Cycle),
    )
    .unwrap();

    producer.set_protocol(NumberProtocol::create(ProtocolKind::Serial));

    let config = producer.get_params();
    assert_eq!((config.range.start, config.range.end), (0, 4));
    assert!(matches!(config.params, ProtocolParams::Serial));

    // One serial pass over a five-element source touches each element once.
    let mut pass = producer.get_collection(5, &mut rng).unwrap();
    pass.sort_unstable();
    assert_eq!(pass, vec![1, 2, 3, 4, 5]);
}

#[test]
fn reset_restarts_the_protocol() {
    let mut rng = RandomEngine::from_seed(3);
    let mut producer = cycle_producer(vec!['a', 'b', 'c']);

    assert_eq!(producer.get_item(&mut rng).unwrap(), 'a');
    assert_eq!(producer.get_item(&mut rng).unwrap(), 'b');
    producer.reset();
    assert_eq!(producer.get_item(&mut rng).unwrap(), 'a');
}

#[test]
fn works_over_non_numeric_sources() {
    let mut rng = RandomEngine::from_seed(3);
    let source = vec!["dotted", "legato", "staccato"];
    let mut producer =
        CollectionsProducer::new(source.clone(), NumberProtocol::create(ProtocolKind::Basic))
            .unwrap();

    for _ in 0..100 {
        let item = producer.get_item(&mut rng).unwrap();
        assert!(source.contains(&item));
    }
}
