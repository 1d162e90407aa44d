//! Lazy integer sequences
//!
//! Each sequence is a small state-holding iterator. They are all `Clone`, so
//! a sequence can be restarted by cloning it before it is consumed.

/// Generator driven by a step function over an explicit state
///
/// `step` maps the current state to the next item and the state that follows
/// it, or `None` to end the sequence.
#[derive(Debug, Clone)]
pub struct Unfold<S, F> {
    state: Option<S>,
    step: F,
}

impl<S, F> Unfold<S, F> {
    pub fn new(seed: S, step: F) -> Self {
        Self {
            state: Some(seed),
            step,
        }
    }
}

impl<S, T, F> Iterator for Unfold<S, F>
where
    F: FnMut(S) -> Option<(T, S)>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let state = self.state.take()?;
        let (item, next) = (self.step)(state)?;
        self.state = Some(next);
        Some(item)
    }
}

/// `x, 2x, 3x, ...` strictly below `limit`
#[derive(Debug, Clone)]
pub struct MultiplesOf {
    next: u64,
    step: u64,
    limit: u64,
}

impl MultiplesOf {
    /// A zero `step` yields an empty sequence rather than repeating forever.
    pub fn new(step: u64, limit: u64) -> Self {
        Self {
            next: if step == 0 { limit } else { step },
            step,
            limit,
        }
    }
}

impl Iterator for MultiplesOf {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next >= self.limit {
            return None;
        }
        let item = self.next;
        self.next += self.step;
        Some(item)
    }
}

/// Fibonacci-style terms starting from `a, b`, strictly below `limit`
#[derive(Debug, Clone)]
pub struct Fibonacci {
    a: u64,
    b: u64,
    limit: u64,
}

impl Fibonacci {
    pub fn new(a: u64, b: u64, limit: u64) -> Self {
        Self { a, b, limit }
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.a >= self.limit {
            return None;
        }
        let item = self.a;
        let sum = self.a + self.b;
        self.a = self.b;
        self.b = sum;
        Some(item)
    }
}

/// Even Fibonacci numbers strictly below `limit`
///
/// Every third Fibonacci number is even and they obey
/// `E(n) = 4 * E(n - 1) + E(n - 2)`, starting from 2 and 8.
#[derive(Debug, Clone)]
pub struct EvenFibonacci {
    a: u64,
    b: u64,
    limit: u64,
}

impl EvenFibonacci {
    pub fn new(limit: u64) -> Self {
        Self { a: 2, b: 8, limit }
    }
}

impl Iterator for EvenFibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.a >= self.limit {
            return None;
        }
        let item = self.a;
        let next = 4 * self.b + self.a;
        self.a = self.b;
        self.b = next;
        Some(item)
    }
}

/// Trial divisors 2, 3, 5, 7, 9, ... (never ends)
pub fn skip_twos() -> impl Iterator<Item = u64> + Clone {
    Unfold::new(2u64, |current: u64| {
        let next = if current == 2 { 3 } else { current + 2 };
        Some((current, next))
    })
}

/// Prime factors of `n` in non-decreasing order
///
/// Trial divisors are drawn from `divisors`, which must start at 2 and cover
/// every prime. Once the current divisor squared exceeds what is left of `n`,
/// the remainder is the last factor. For `n < 2` the only item is `n`.
#[derive(Debug, Clone)]
pub struct PrimeFactors<D> {
    remaining: u64,
    divisor: Option<u64>,
    divisors: D,
    done: bool,
}

impl<D: Iterator<Item = u64>> PrimeFactors<D> {
    pub fn new(n: u64, mut divisors: D) -> Self {
        let divisor = divisors.next();
        Self {
            remaining: n,
            divisor,
            divisors,
            done: false,
        }
    }
}

impl<D: Iterator<Item = u64>> Iterator for PrimeFactors<D> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        loop {
            let d = match self.divisor {
                Some(d) if d.saturating_mul(d) <= self.remaining => d,
                _ => {
                    self.done = true;
                    return Some(self.remaining);
                }
            };
            if self.remaining % d == 0 {
                self.remaining /= d;
                return Some(d);
            }
            self.divisor = self.divisors.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfold_stops_when_step_returns_none() {
        let countdown = Unfold::new(3u32, |n: u32| if n == 0 { None } else { Some((n, n - 1)) });
        assert_eq!(countdown.collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn multiples_stop_below_limit() {
        assert_eq!(MultiplesOf::new(5, 20).collect::<Vec<_>>(), vec![5, 10, 15]);
        assert_eq!(MultiplesOf::new(0, 20).count(), 0);
    }

    #[test]
    fn fibonacci_terms() {
        let terms: Vec<u64> = Fibonacci::new(1, 2, 90).collect();
        assert_eq!(terms, vec![1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
    }

    #[test]
    fn even_fibonacci_matches_filtered_fibonacci() {
        let filtered: Vec<u64> = Fibonacci::new(1, 2, 1_000_000).filter(|x| x % 2 == 0).collect();
        let direct: Vec<u64> = EvenFibonacci::new(1_000_000).collect();
        assert_eq!(direct, filtered);
    }

    #[test]
    fn sequences_restart_from_a_clone() {
        let seq = Fibonacci::new(1, 2, 100);
        let first: u64 = seq.clone().sum();
        let second: u64 = seq.sum();
        assert_eq!(first, second);
    }

    #[test]
    fn skip_twos_starts_with_two_then_odds() {
        assert_eq!(skip_twos().take(6).collect::<Vec<_>>(), vec![2, 3, 5, 7, 9, 11]);
    }

    #[test]
    fn prime_factors_in_order() {
        assert_eq!(PrimeFactors::new(13195, skip_twos()).collect::<Vec<_>>(), vec![5, 7, 13, 29]);
        assert_eq!(PrimeFactors::new(8, skip_twos()).collect::<Vec<_>>(), vec![2, 2, 2]);
        assert_eq!(PrimeFactors::new(97, skip_twos()).collect::<Vec<_>>(), vec![97]);
    }
}
