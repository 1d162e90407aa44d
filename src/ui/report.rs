//! Console rendering of suite results

use std::io::{self, Write};

use colored::*;

use crate::core::config::BenchConfig;
use crate::stats::measurement::Measurement;

const TITLE_WIDTH: usize = 60;

/// One result row: padded name, result, elapsed milliseconds
pub fn format_row(measurement: &Measurement, name_width: usize, precision: usize) -> String {
    format!(
        "{:<name_width$} {} {:.precision$}",
        measurement.name, measurement.result, measurement.elapsed_ms
    )
}

pub fn write_title<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let separator = "=".repeat(TITLE_WIDTH);
    writeln!(out, "{}", separator)?;
    writeln!(out, "{}", format!("{:^TITLE_WIDTH$}", title).bold().cyan())?;
    writeln!(out, "{}", separator)
}

pub fn write_rows<W: Write>(
    out: &mut W,
    measurements: &[Measurement],
    config: &BenchConfig,
) -> io::Result<()> {
    for measurement in measurements {
        writeln!(out, "{}", format_row(measurement, config.name_width, config.precision))?;
    }
    Ok(())
}
