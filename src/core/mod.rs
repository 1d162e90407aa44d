pub mod clock;
pub mod config;
pub mod harness;
pub mod suite;

use std::io::{self, Write};

use indicatif::{ProgressBar, ProgressStyle};

use crate::core::clock::{Clock, MonotonicClock};
use crate::core::config::BenchConfig;
use crate::core::harness::Harness;
use crate::core::suite::Suite;
use crate::error::Result;
use crate::problems;
use crate::ui::report::{write_rows, write_title};

// ============================================================================
// DRIVER
// ============================================================================

/// Run every exercise suite against the wall clock and print to stdout
pub fn run_benchmark(config: &BenchConfig) -> Result<()> {
    let harness = Harness::new(MonotonicClock::new());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_suites(&problems::all_suites(), &harness, config, &mut out)
}

/// Run `suites` one after another, writing a title and ranked rows for each
pub fn run_suites<C: Clock, W: Write>(
    suites: &[Suite],
    harness: &Harness<C>,
    config: &BenchConfig,
    out: &mut W,
) -> Result<()> {
    config.validate()?;

    for (i, suite) in suites.iter().enumerate() {
        let iterations = config.iterations_for(suite.iterations());

        let pb = if config.show_progress {
            ProgressBar::new(suite.candidates().len() as u64)
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")?
                .progress_chars("##-"),
        );

        let measurements = suite.run(harness, iterations, &pb)?;
        pb.finish_and_clear();

        if i > 0 {
            writeln!(out)?;
        }
        write_title(out, suite.title())?;
        write_rows(out, &measurements, config)?;
    }
    out.flush()?;
    Ok(())
}
