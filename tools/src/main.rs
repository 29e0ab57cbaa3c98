//! seq-runner: headless sequence generator for the aleatoric protocols.
//!
//! Usage:
//!   seq-runner --protocol cycle --range 0 11 --count 24 --seed 42
//!   seq-runner --protocol walk --range 0 9 --count 100

use anyhow::{bail, Context, Result};
use std::env;

use aleatoric_core::{
    NumberProtocol, ProtocolKind, Range, RandomEngine,
};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let count = parse_arg(&args, "--count", 16usize);
    let range_start = parse_pair_arg(&args, "--range", 0).0;
    let range_end = parse_pair_arg(&args, "--range", 0).1.unwrap_or(11);
    let protocol_name = args
        .windows(2)
        .find(|w| w[0] == "--protocol")
        .map(|w| w[1].as_str())
        .unwrap_or("basic");
    let decimal = args.iter().any(|a| a == "--decimal");

    let kind = parse_kind(protocol_name)?;
    let range = Range::new(range_start, range_end)
        .with_context(|| format!("bad range [{range_start}, {range_end}]"))?;

    println!("seq-runner");
    println!("  protocol: {kind}");
    println!("  range:    [{}, {}]", range.start, range.end);
    println!("  count:    {count}");
    println!("  seed:     {seed}");
    println!();

    let mut rng = RandomEngine::from_seed(seed);
    let mut protocol = NumberProtocol::with_defaults(kind, range);

    log::info!("generating {count} values with the {kind} protocol");

    if decimal {
        let values: Vec<f64> = (0..count)
            .map(|_| protocol.next_decimal(&mut rng))
            .collect::<Result<_, _>>()?;
        println!("values: {values:?}");
    } else {
        let values: Vec<i64> = (0..count)
            .map(|_| protocol.next_int(&mut rng))
            .collect::<Result<_, _>>()?;
        println!("values: {values:?}");
    }

    println!();
    println!(
        "config: {}",
        serde_json::to_string_pretty(&protocol.params())?
    );

    Ok(())
}

fn parse_kind(name: &str) -> Result<ProtocolKind> {
    let kind = match name {
        "basic" => ProtocolKind::Basic,
        "cycle" => ProtocolKind::Cycle,
        "serial" => ProtocolKind::Serial,
        "no_repetition" => ProtocolKind::NoRepetition,
        "periodic" => ProtocolKind::Periodic,
        "adjacent_steps" => ProtocolKind::AdjacentSteps,
        "walk" => ProtocolKind::Walk,
        "granular_walk" => ProtocolKind::GranularWalk,
        "ratio" => ProtocolKind::Ratio,
        "precision" => ProtocolKind::Precision,
        "subset" => ProtocolKind::Subset,
        "grouped_repetition" => ProtocolKind::GroupedRepetition,
        other => bail!("unknown protocol '{other}'"),
    };
    Ok(kind)
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn parse_pair_arg(args: &[String], flag: &str, default_first: i64) -> (i64, Option<i64>) {
    let first = args
        .windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default_first);
    let second = args
        .windows(3)
        .find(|w| w[0] == flag)
        .and_then(|w| w[2].parse().ok());
    (first, second)
}
