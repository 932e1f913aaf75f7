//! Statistical test suite: chi-squared uniformity plus the extended
//! battery (monobit, runs, Monte-Carlo pi, autocorrelation).

use serde::Serialize;

pub(crate) mod chi_squared;
pub(crate) mod extended;

pub use chi_squared::{chi_squared, ChiSquaredResult};
pub use extended::{run_battery, run_extended_suite};

/// Verdict of a single statistical test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStatus {
    Pass,
    Suspect,
    Fail,
}

/// Outcome of one test from the extended battery. Immutable once
/// produced; `display_value` overrides the raw score in user-facing
/// summaries when present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    pub name: String,
    pub score: f64,
    pub display_value: Option<String>,
    pub status: TestStatus,
    pub description: String,
}
