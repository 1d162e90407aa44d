//! Tests for ranking measurements by elapsed time.

use euler_bench::stats::measurement::Measurement;
use euler_bench::stats::ranking::rank_by_elapsed;

fn names(measurements: &[Measurement]) -> Vec<&str> {
    measurements.iter().map(|m| m.name.as_str()).collect()
}

#[test]
fn test_rank_is_non_decreasing() {
    let mut measurements: Vec<Measurement> = [5.5, 0.25, 3.0, 0.0, 12.75, 3.0, 1.0]
        .iter()
        .enumerate()
        .map(|(i, &ms)| Measurement::new(format!("c{i}"), 1, ms))
        .collect();

    rank_by_elapsed(&mut measurements);

    assert!(measurements.windows(2).all(|w| w[0].elapsed_ms <= w[1].elapsed_ms));
    assert_eq!(measurements.len(), 7);
}

#[test]
fn test_rank_keeps_measurement_order_for_ties() {
    let mut measurements = vec![
        Measurement::new("first", 1, 2.0),
        Measurement::new("fast", 1, 1.0),
        Measurement::new("second", 1, 2.0),
        Measurement::new("third", 1, 2.0),
    ];

    rank_by_elapsed(&mut measurements);

    assert_eq!(names(&measurements), vec!["fast", "first", "second", "third"]);
}

#[test]
fn test_rank_empty_and_single() {
    let mut empty: Vec<Measurement> = Vec::new();
    rank_by_elapsed(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec![Measurement::new("only", 9, 4.0)];
    rank_by_elapsed(&mut single);
    assert_eq!(names(&single), vec!["only"]);
}
