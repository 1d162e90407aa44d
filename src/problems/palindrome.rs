//! Largest palindrome that is a product of two factors in `[low, high)`
//!
//! Every variant returns 0 when no product in range is a palindrome.

use crate::core::suite::Suite;

pub const LOW: u64 = 100;
pub const HIGH: u64 = 1000;
pub const ITERATIONS: u32 = 10;

pub fn is_palindrome_string(x: u64) -> bool {
    let s = x.to_string();
    s.bytes().eq(s.bytes().rev())
}

/// Decimal digits of `x` in reverse order
pub fn reverse(mut x: u64) -> u64 {
    let mut result = 0;
    while x > 0 {
        result = 10 * result + x % 10;
        x /= 10;
    }
    result
}

pub fn is_palindrome(x: u64) -> bool {
    x == reverse(x)
}

pub fn iterative_string(low: u64, high: u64) -> u64 {
    let mut maximum = 0;
    for i in low..high {
        for j in i..high {
            let product = i * j;
            if is_palindrome_string(product) && product > maximum {
                maximum = product;
            }
        }
    }
    maximum
}

pub fn iterative_math(low: u64, high: u64) -> u64 {
    let mut maximum = 0;
    for i in low..high {
        for j in i..high {
            let product = i * j;
            if is_palindrome(product) && product > maximum {
                maximum = product;
            }
        }
    }
    maximum
}

/// Counts both factors down and abandons a row as soon as its products can
/// no longer beat the best palindrome found so far.
pub fn iterative_math_descending(low: u64, high: u64) -> u64 {
    let mut maximum = 0;
    for i in (low..high).rev() {
        for j in (i..high).rev() {
            let product = i * j;
            if product <= maximum {
                break;
            }
            if is_palindrome(product) {
                maximum = product;
            }
        }
    }
    maximum
}

pub fn functional(low: u64, high: u64) -> u64 {
    (low..high)
        .flat_map(|i| (i..high).map(move |j| i * j))
        .filter(|&product| is_palindrome_string(product))
        .max()
        .unwrap_or(0)
}

pub fn suite() -> Suite {
    Suite::new("Largest palindrome product of two 3-digit numbers", ITERATIONS)
        .with_candidate("iterative_string", || iterative_string(LOW, HIGH))
        .with_candidate("iterative_math", || iterative_math(LOW, HIGH))
        .with_candidate("iterative_math_descending", || {
            iterative_math_descending(LOW, HIGH)
        })
        .with_candidate("functional", || functional(LOW, HIGH))
}
