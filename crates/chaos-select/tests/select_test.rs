//! Integration tests for shuffling and selection on a seeded engine.

use std::collections::HashMap;

use chaos_core::{Chaos, ChaosEngine, ChaosError};
use chaos_select::{ChaosSelect, NamedConstants, Weighted, WeightedValue, named_constants};
use chaos_test_support::{MockSource, SequenceSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Weather {
    Clear,
    Rain,
    Storm,
}

named_constants!(Weather { Clear => 6, Rain => 3, Storm });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Coin {
    Heads,
    Tails,
}

named_constants!(Coin { Heads, Tails });

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Void {
    Nothing,
}

named_constants!(Void { Nothing => 0 });

#[derive(Debug)]
struct Encounter {
    name: &'static str,
    frequency: u32,
}

impl Weighted for Encounter {
    fn weight(&self) -> u32 {
        self.frequency
    }
}

fn share<T>(counts: &HashMap<T, usize>, key: &T, total: usize) -> f64
where
    T: std::hash::Hash + Eq,
{
    #[allow(clippy::cast_precision_loss)]
    let ratio = counts.get(key).copied().unwrap_or(0) as f64 / total as f64;
    ratio
}

#[test]
fn test_weighted_choice_frequency() {
    let engine = ChaosEngine::with_seed(2024);
    let items = [WeightedValue::new('A', 1), WeightedValue::new('B', 3)];
    let total = 100_000;

    let mut counts = HashMap::new();
    for value in engine.choose_values_many(&items, total).unwrap() {
        *counts.entry(*value).or_insert(0) += 1;
    }

    let b = share(&counts, &'B', total);
    assert!((b - 0.75).abs() < 0.01, "B share was {b}");
}

#[test]
fn test_enum_frequency_follows_weights() {
    let engine = ChaosEngine::with_seed(99);
    let total = 50_000;

    let mut counts = HashMap::new();
    for weather in engine.next_enums::<Weather>(total).unwrap() {
        *counts.entry(weather).or_insert(0) += 1;
    }

    assert!((share(&counts, &Weather::Clear, total) - 0.6).abs() < 0.015);
    assert!((share(&counts, &Weather::Rain, total) - 0.3).abs() < 0.015);
    assert!((share(&counts, &Weather::Storm, total) - 0.1).abs() < 0.015);
}

#[test]
fn test_unweighted_enum_is_uniform() {
    let engine = ChaosEngine::with_seed(5);
    let total = 20_000;

    let mut counts = HashMap::new();
    for _ in 0..total {
        *counts.entry(engine.next_enum::<Coin>().unwrap()).or_insert(0) += 1;
    }

    assert_eq!(Coin::CONSTANTS.len(), 2);
    assert!((share(&counts, &Coin::Heads, total) - 0.5).abs() < 0.02);
}

#[test]
fn test_enum_with_only_zero_weights_is_error() {
    let engine = ChaosEngine::with_seed(1);
    assert_eq!(engine.next_enum::<Void>(), Err(ChaosError::EmptyPool));
    assert_eq!(
        engine.next_enums::<Void>(4).unwrap_err(),
        ChaosError::EmptyPool
    );
}

#[test]
fn test_custom_weighted_items() {
    let engine = ChaosEngine::with_seed(77);
    let table = [
        Encounter {
            name: "goblin",
            frequency: 10,
        },
        Encounter {
            name: "dragon",
            frequency: 0,
        },
        Encounter {
            name: "wolf",
            frequency: 5,
        },
    ];

    let names: Vec<&str> = engine
        .choose_weighted_many(&table, 500)
        .unwrap()
        .map(|encounter| encounter.name)
        .collect();

    assert_eq!(names.len(), 500);
    assert!(!names.contains(&"dragon"));
    assert!(names.contains(&"goblin"));
    assert!(names.contains(&"wolf"));
}

#[test]
fn test_shuffle_replays_for_same_seed() {
    let mut first: Vec<u32> = (0..52).collect();
    let mut second = first.clone();

    ChaosEngine::with_seed("deck").shuffle(&mut first).unwrap();
    ChaosEngine::with_seed("deck").shuffle(&mut second).unwrap();

    assert_eq!(first, second);
    let mut sorted = first.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..52).collect::<Vec<_>>());
}

#[test]
fn test_shuffle_golden_sequence() {
    let engine = ChaosEngine::with_seed(7);
    let mut items: Vec<i32> = (0..10).collect();
    engine.shuffle(&mut items).unwrap();
    assert_eq!(items, vec![5, 2, 4, 6, 1, 3, 7, 9, 8, 0]);
}

#[test]
fn test_selection_shares_stream_with_scalar_draws() {
    // Choosing from ten items consumes the same sample as integer(0, 10).
    let chooser = ChaosEngine::with_seed(1);
    let scalar = ChaosEngine::with_seed(1);
    let items: Vec<i32> = (0..10).collect();

    for _ in 0..25 {
        assert_eq!(
            *chooser.choose(&items).unwrap(),
            scalar.next_integer_in(0, 10).unwrap()
        );
    }
}

#[test]
fn test_error_scenarios() {
    let source = MockSource::default();
    let empty: Vec<WeightedValue<u8>> = Vec::new();
    let zeros = [WeightedValue::new(1, 0), WeightedValue::new(2, 0)];

    assert_eq!(
        source.choose_value(&empty),
        Err(ChaosError::EmptyInput("collection"))
    );
    assert_eq!(source.choose_value(&zeros), Err(ChaosError::EmptyPool));
    assert_eq!(
        source.shuffle::<u8>(&mut []),
        Err(ChaosError::EmptyInput("list"))
    );
    assert_eq!(
        source.choose_weighted_many(&zeros, 0).unwrap_err(),
        ChaosError::CountTooLow("count")
    );
    assert_eq!(
        WeightedValue::try_new("bad", -3),
        Err(ChaosError::NegativeWeight(-3))
    );
    assert_eq!(source.taken(), 0);
}

#[test]
fn test_scripted_source_drives_selection() {
    let source = SequenceSource::from_fractions(&[0.5, 0.0]);
    let items = ["north", "east", "south", "west"];
    assert_eq!(source.choose(&items).unwrap(), &"south");
    assert_eq!(source.choose(&items).unwrap(), &"north");
}
