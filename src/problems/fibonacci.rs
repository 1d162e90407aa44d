//! Sum of the even-valued Fibonacci terms below a limit
//!
//! Sequences start from `a, b`; the limit is exclusive, so "not exceeding
//! four million" is a limit of 4_000_001.

use crate::core::suite::Suite;
use crate::utils::sequences::{EvenFibonacci, Fibonacci};

pub const A: u64 = 1;
pub const B: u64 = 2;
pub const LIMIT: u64 = 4_000_001;
pub const ITERATIONS: u32 = 1000;

pub fn filter_inline_imperative(a: u64, b: u64, limit: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    let mut total = 0;
    while a < limit {
        if a % 2 == 0 {
            total += a;
        }
        let sum = a + b;
        a = b;
        b = sum;
    }
    total
}

/// Jumps straight between even terms.
///
/// The starting pair is ignored: only the standard sequence has even terms
/// 2, 8, 34, ...
pub fn no_filter_imperative(_a: u64, _b: u64, limit: u64) -> u64 {
    let (mut a, mut b) = (2, 8);
    let mut total = 0;
    while a < limit {
        total += a;
        let sum = a + 4 * b;
        a = b;
        b = sum;
    }
    total
}

pub fn filter_inline_functional(a: u64, b: u64, limit: u64) -> u64 {
    Fibonacci::new(a, b, limit).filter(|x| x % 2 == 0).sum()
}

fn is_even(x: &u64) -> bool {
    x % 2 == 0
}

pub fn filter_function_call_functional(a: u64, b: u64, limit: u64) -> u64 {
    Fibonacci::new(a, b, limit).filter(is_even).sum()
}

pub fn no_filter_functional(_a: u64, _b: u64, limit: u64) -> u64 {
    EvenFibonacci::new(limit).sum()
}

pub fn suite() -> Suite {
    Suite::new("Even Fibonacci terms not exceeding four million", ITERATIONS)
        .with_candidate("filter_inline_functional", || filter_inline_functional(A, B, LIMIT))
        .with_candidate("filter_inline_imperative", || filter_inline_imperative(A, B, LIMIT))
        .with_candidate("filter_function_call_functional", || {
            filter_function_call_functional(A, B, LIMIT)
        })
        .with_candidate("no_filter_functional", || no_filter_functional(A, B, LIMIT))
        .with_candidate("no_filter_imperative", || no_filter_imperative(A, B, LIMIT))
}
