//! Chi-squared uniformity test over 10 bins.

/// Outcome of the chi-squared test.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ChiSquaredResult {
    pub score: f64,
    pub passed: bool,
}

const BINS: usize = 10;

/// Critical value for 9 degrees of freedom at the 5% significance level.
const CRITICAL_9_DOF: f64 = 16.92;

/// Runs the chi-squared uniformity test on `sequence`.
///
/// Binning adapts to the sample: if any value is non-integral the
/// fractional part selects the bin, otherwise the last decimal digit
/// does. Non-finite values are skipped. An empty (or all-non-finite)
/// sample scores 0 and does not pass.
pub fn chi_squared(sequence: &[f64]) -> ChiSquaredResult {
    let is_float = sequence.iter().any(|v| !v.is_finite() || v.fract() != 0.0);

    let mut observed = [0u64; BINS];
    let mut total = 0u64;
    for &value in sequence {
        if !value.is_finite() {
            continue;
        }
        let bin = if is_float {
            ((value.abs().fract() * BINS as f64) as usize).min(BINS - 1)
        } else {
            (value.abs() % 10.0) as usize % BINS
        };
        observed[bin] += 1;
        total += 1;
    }

    if total == 0 {
        return ChiSquaredResult {
            score: 0.0,
            passed: false,
        };
    }

    let expected = total as f64 / BINS as f64;
    let score: f64 = observed
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum();

    ChiSquaredResult {
        score,
        passed: score < CRITICAL_9_DOF,
    }
}
