//! Numeric Exercise Benchmark Library
//!
//! Competing implementations of small numeric exercises, and the harness
//! that times them and ranks them fastest-first.

pub mod core;
pub mod error;
pub mod problems;
pub mod stats;
pub mod ui;
pub mod utils;

pub use crate::core::run_benchmark;
pub use crate::error::{BenchError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
