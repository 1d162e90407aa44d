//! Sum of all natural numbers below a limit that are multiples of `x` or `y`
//!
//! The variants that subtract the multiples of `x * y` assume the two factors
//! are coprime.

use crate::core::suite::Suite;
use crate::utils::sequences::MultiplesOf;

pub const LIMIT: u64 = 1000;
pub const X: u64 = 3;
pub const Y: u64 = 5;
pub const ITERATIONS: u32 = 1000;

/// Walk `[1, limit)` and keep the multiples of either factor
pub fn filter_imperative(limit: u64, x: u64, y: u64) -> u64 {
    let mut sum = 0;
    for i in 1..limit {
        if i % x == 0 || i % y == 0 {
            sum += i;
        }
    }
    sum
}

/// Step through the multiples of each factor, then remove the ones counted twice
pub fn generate_multiples_imperative(limit: u64, x: u64, y: u64) -> u64 {
    let mut sum = 0;
    let mut i = x;
    while i < limit {
        sum += i;
        i += x;
    }
    i = y;
    while i < limit {
        sum += i;
        i += y;
    }
    let xy = x * y;
    i = xy;
    while i < limit {
        sum -= i;
        i += xy;
    }
    sum
}

/// Sum of `x, 2x, ...` below `limit` as `x` times a triangular number
pub fn sum_of_multiples_of(x: u64, limit: u64) -> u64 {
    let p = limit.saturating_sub(1) / x;
    x * p * (p + 1) / 2
}

/// Closed form, no loop at all
pub fn sum_of_multiples(limit: u64, x: u64, y: u64) -> u64 {
    sum_of_multiples_of(x, limit) + sum_of_multiples_of(y, limit) - sum_of_multiples_of(x * y, limit)
}

pub fn filter_functional(limit: u64, x: u64, y: u64) -> u64 {
    (1..limit).filter(|i| i % x == 0 || i % y == 0).sum()
}

pub fn generate_multiples_functional(limit: u64, x: u64, y: u64) -> u64 {
    MultiplesOf::new(x, limit).sum::<u64>() + MultiplesOf::new(y, limit).sum::<u64>()
        - MultiplesOf::new(x * y, limit).sum::<u64>()
}

pub fn suite() -> Suite {
    Suite::new("Sum of multiples of 3 or 5 below 1000", ITERATIONS)
        .with_candidate("filter_imperative", || filter_imperative(LIMIT, X, Y))
        .with_candidate("generate_multiples_imperative", || {
            generate_multiples_imperative(LIMIT, X, Y)
        })
        .with_candidate("sum_of_multiples", || sum_of_multiples(LIMIT, X, Y))
        .with_candidate("filter_functional", || filter_functional(LIMIT, X, Y))
        .with_candidate("generate_multiples_functional", || {
            generate_multiples_functional(LIMIT, X, Y)
        })
}
