//! Largest prime factor of a number
//!
//! All variants expect `n >= 2`. They differ only in which trial divisors
//! they try and when they stop.

use crate::core::suite::Suite;
use crate::utils::sequences::{skip_twos, PrimeFactors};

pub const N: u64 = 600_851_475_143;
pub const ITERATIONS: u32 = 1000;

/// Gaps between candidates coprime to 2, 3 and 5, starting after 7
const WHEEL_30_GAPS: [u64; 8] = [4, 2, 4, 2, 4, 6, 2, 6];

/// Every divisor, until `n` is fully divided out
pub fn naive(mut n: u64) -> u64 {
    let mut divisor = 2;
    let mut result = 1;
    while n > 1 {
        while n % divisor == 0 {
            result = divisor;
            n /= divisor;
        }
        divisor += 1;
    }
    result
}

/// 2, then odd divisors only
pub fn skip_evens(mut n: u64) -> u64 {
    let mut divisor = 2;
    let mut result = 1;
    while n > 1 {
        while n % divisor == 0 {
            result = divisor;
            n /= divisor;
        }
        divisor = if divisor == 2 { 3 } else { divisor + 2 };
    }
    result
}

/// Stops once the divisor passes the square root of what is left
pub fn sqrt_bound(mut n: u64) -> u64 {
    let mut divisor = 2;
    let mut result = 1;
    while divisor * divisor <= n {
        while n % divisor == 0 {
            result = divisor;
            n /= divisor;
        }
        divisor += if divisor == 2 { 1 } else { 2 };
    }
    if n == 1 {
        result
    } else {
        n
    }
}

/// 2, 3, then alternating steps of 2 and 4 (skips multiples of 2 and 3)
pub fn wheel_6(mut n: u64) -> u64 {
    let mut divisor = 2;
    let mut result = 1;
    let mut addend = 2;
    while divisor * divisor <= n {
        while n % divisor == 0 {
            result = divisor;
            n /= divisor;
        }
        match divisor {
            2 => divisor = 3,
            3 => divisor = 5,
            _ => {
                divisor += addend;
                addend = if addend == 2 { 4 } else { 2 };
            }
        }
    }
    if n == 1 {
        result
    } else {
        n
    }
}

/// 2, 3, 5, then the wheel that skips multiples of 2, 3 and 5
pub fn wheel_30(mut n: u64) -> u64 {
    let mut divisor = 2;
    let mut result = 1;
    let mut gap = 0;
    while divisor * divisor <= n {
        while n % divisor == 0 {
            result = divisor;
            n /= divisor;
        }
        match divisor {
            2 => divisor = 3,
            3 => divisor = 5,
            5 => divisor = 7,
            _ => {
                divisor += WHEEL_30_GAPS[gap];
                gap = (gap + 1) % WHEEL_30_GAPS.len();
            }
        }
    }
    if n == 1 {
        result
    } else {
        n
    }
}

/// Last element of the lazily generated factorisation
pub fn functional(n: u64) -> u64 {
    PrimeFactors::new(n, skip_twos()).last().unwrap_or(n)
}

pub fn suite() -> Suite {
    Suite::new("Largest prime factor of 600851475143", ITERATIONS)
        .with_candidate("naive", || naive(N))
        .with_candidate("skip_evens", || skip_evens(N))
        .with_candidate("sqrt_bound", || sqrt_bound(N))
        .with_candidate("wheel_6", || wheel_6(N))
        .with_candidate("wheel_30", || wheel_30(N))
        .with_candidate("functional", || functional(N))
}
