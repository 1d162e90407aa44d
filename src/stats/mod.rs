pub mod measurement;
pub mod ranking;
