//! Warm-up, timed loop, measurement
//!
//! A candidate is called once untimed to capture its result, the clock is
//! given a chance to settle, then the candidate runs `iterations` more times
//! under a stopwatch.

use std::fmt;
use std::hint::black_box;

use tracing::debug;

use crate::core::clock::{Clock, MonotonicClock, Stopwatch};
use crate::error::{BenchError, Result};
use crate::stats::measurement::Measurement;

/// A named, pure numeric function with its inputs already bound
pub struct Candidate {
    name: String,
    function: Box<dyn Fn() -> u64>,
}

impl Candidate {
    pub fn new(name: impl Into<String>, function: impl Fn() -> u64 + 'static) -> Self {
        Self {
            name: name.into(),
            function: Box::new(function),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the candidate once
    pub fn call(&self) -> u64 {
        (self.function)()
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Time `iterations` calls of `candidate` after one untimed warm-up call.
///
/// Returns the warm-up result and the elapsed time of the timed loop in
/// milliseconds. Fails with [`BenchError::InvalidArgument`] before calling
/// anything when `iterations` is zero. A panicking candidate is not caught.
pub fn measure<C, T, F>(clock: &C, iterations: u32, mut candidate: F) -> Result<(T, f64)>
where
    C: Clock + ?Sized,
    F: FnMut() -> T,
{
    if iterations == 0 {
        return Err(BenchError::InvalidArgument(
            "iterations must be at least 1".to_string(),
        ));
    }

    let result = candidate();
    clock.settle();

    let stopwatch = Stopwatch::start(clock);
    for _ in 0..iterations {
        black_box(candidate());
    }
    Ok((result, stopwatch.elapsed_millis()))
}

/// Benchmark runner bound to a clock
#[derive(Debug, Default)]
pub struct Harness<C: Clock = MonotonicClock> {
    clock: C,
}

impl<C: Clock> Harness<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Measure one candidate
    pub fn measure(&self, candidate: &Candidate, iterations: u32) -> Result<Measurement> {
        let (result, elapsed_ms) = measure(&self.clock, iterations, || {
            black_box(candidate).call()
        })?;
        debug!(
            candidate = candidate.name(),
            result,
            elapsed_ms,
            iterations,
            "measured candidate"
        );
        Ok(Measurement::new(candidate.name(), result, elapsed_ms))
    }
}
