//! Benchmark measurement record
//!
//! One measurement is produced per candidate and never mutated afterwards.

/// Outcome of timing a single candidate
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub result: u64,
    pub elapsed_ms: f64,
}

impl Measurement {
    pub fn new(name: impl Into<String>, result: u64, elapsed_ms: f64) -> Self {
        Self {
            name: name.into(),
            result,
            elapsed_ms,
        }
    }
}
