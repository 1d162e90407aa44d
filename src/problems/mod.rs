//! Numeric exercises measured by the harness
//!
//! Each module holds the competing variants of one exercise and a `suite()`
//! that binds them to the exercise's fixed inputs.

pub mod fibonacci;
pub mod lcm;
pub mod multiples;
pub mod palindrome;
pub mod prime_factor;

use crate::core::suite::Suite;

/// All exercise suites in the order they are reported
pub fn all_suites() -> Vec<Suite> {
    vec![
        multiples::suite(),
        fibonacci::suite(),
        prime_factor::suite(),
        palindrome::suite(),
        lcm::suite(),
    ]
}
