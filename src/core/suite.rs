//! Ordered group of candidates that solve the same exercise

use indicatif::ProgressBar;
use tracing::{info, warn};

use crate::core::clock::Clock;
use crate::core::harness::{Candidate, Harness};
use crate::error::Result;
use crate::stats::measurement::Measurement;
use crate::stats::ranking::{disagreeing_results, rank_by_elapsed};

#[derive(Debug)]
pub struct Suite {
    title: String,
    iterations: u32,
    candidates: Vec<Candidate>,
}

impl Suite {
    pub fn new(title: impl Into<String>, iterations: u32) -> Self {
        Self {
            title: title.into(),
            iterations,
            candidates: Vec::new(),
        }
    }

    pub fn with_candidate(
        mut self,
        name: impl Into<String>,
        function: impl Fn() -> u64 + 'static,
    ) -> Self {
        self.candidates.push(Candidate::new(name, function));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Iteration count this suite runs with unless overridden
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Measure every candidate in declaration order and return the
    /// measurements fastest-first.
    pub fn run<C: Clock>(
        &self,
        harness: &Harness<C>,
        iterations: u32,
        progress: &ProgressBar,
    ) -> Result<Vec<Measurement>> {
        info!(suite = %self.title, iterations, candidates = self.candidates.len(), "running suite");

        let mut measurements = Vec::with_capacity(self.candidates.len());
        for candidate in &self.candidates {
            progress.set_message(candidate.name().to_string());
            measurements.push(harness.measure(candidate, iterations)?);
            progress.inc(1);
        }

        let odd = disagreeing_results(&measurements);
        if !odd.is_empty() {
            warn!(suite = %self.title, candidates = ?odd, "candidates disagree on the result");
        }

        rank_by_elapsed(&mut measurements);
        Ok(measurements)
    }
}
