//! Smallest number evenly divisible by every integer in `1..=upper`

use crate::core::suite::Suite;

pub const UPPER: u64 = 20;
pub const ITERATIONS: u32 = 1000;

/// Euclid's algorithm, reducing each operand in turn
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    loop {
        if b == 0 {
            return a;
        }
        a %= b;
        if a == 0 {
            return b;
        }
        b %= a;
    }
}

/// Binary GCD: shifts and subtractions only
pub fn stein_gcd(mut m: u64, mut n: u64) -> u64 {
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }
    let shift = (m | n).trailing_zeros();
    m >>= m.trailing_zeros();
    n >>= n.trailing_zeros();
    loop {
        if m < n {
            n -= m;
            n >>= n.trailing_zeros();
        } else if n < m {
            m -= n;
            m >>= m.trailing_zeros();
        } else {
            return m << shift;
        }
    }
}

/// Returns 0 when either argument is 0.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

pub fn stein_lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / stein_gcd(a, b) * b
}

pub fn imperative(upper: u64) -> u64 {
    let mut result = 1;
    for i in 2..=upper {
        result = lcm(result, i);
    }
    result
}

pub fn stein(upper: u64) -> u64 {
    let mut result = 1;
    for i in 2..=upper {
        result = stein_lcm(result, i);
    }
    result
}

/// Tuple-swapping Euclid folded over the range
pub fn fold(upper: u64) -> u64 {
    fn gcd(mut a: u64, mut b: u64) -> u64 {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }
    (2..=upper).fold(1, |acc, x| acc / gcd(acc, x) * x)
}

pub fn suite() -> Suite {
    Suite::new("Smallest multiple of 1 through 20", ITERATIONS)
        .with_candidate("imperative", || imperative(UPPER))
        .with_candidate("stein", || stein(UPPER))
        .with_candidate("fold", || fold(UPPER))
}
