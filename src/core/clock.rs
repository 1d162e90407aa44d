//! Time sources for the benchmark harness
//!
//! The harness never reads the system clock directly; it goes through a
//! [`Clock`] so that tests can drive time by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source with an optional allocator settle hook
pub trait Clock {
    /// Time elapsed since an arbitrary, fixed origin. Must never go backwards.
    fn now(&self) -> Duration;

    /// Best-effort hook run between the warm-up call and the timed loop.
    ///
    /// Rust has no collector to drain, so the default does nothing.
    fn settle(&self) {}
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }

    fn settle(&self) {
        (**self).settle()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> Duration {
        (**self).now()
    }

    fn settle(&self) {
        (**self).settle()
    }
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock for tests
///
/// Time only moves when [`ManualClock::advance`] is called, or by `tick`
/// on every reading when built with [`ManualClock::with_tick`].
#[derive(Debug, Default)]
pub struct ManualClock {
    current: Cell<Duration>,
    tick: Duration,
    settles: Cell<usize>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock that advances by `tick` after each call to `now`
    pub fn with_tick(tick: Duration) -> Self {
        Self {
            tick,
            ..Self::default()
        }
    }

    pub fn advance(&self, by: Duration) {
        self.current.set(self.current.get() + by);
    }

    /// Number of times the harness asked this clock to settle
    pub fn settle_count(&self) -> usize {
        self.settles.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let reading = self.current.get();
        self.current.set(reading + self.tick);
        reading
    }

    fn settle(&self) {
        self.settles.set(self.settles.get() + 1);
    }
}

/// Measures the time between its creation and a later reading of the same clock
#[derive(Debug)]
pub struct Stopwatch<'a, C: Clock + ?Sized> {
    clock: &'a C,
    started: Duration,
}

impl<'a, C: Clock + ?Sized> Stopwatch<'a, C> {
    pub fn start(clock: &'a C) -> Self {
        Self {
            clock,
            started: clock.now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.started)
    }

    /// Elapsed time in fractional milliseconds
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_only_moves_when_advanced() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        clock.advance(Duration::from_millis(3));
        assert_eq!(clock.now(), Duration::from_millis(3));
        assert_eq!(clock.now(), Duration::from_millis(3));
    }

    #[test]
    fn stopwatch_reports_fractional_millis() {
        let clock = ManualClock::new();
        let stopwatch = Stopwatch::start(&clock);
        clock.advance(Duration::from_micros(1500));
        assert_eq!(stopwatch.elapsed(), Duration::from_micros(1500));
        assert!((stopwatch.elapsed_millis() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
