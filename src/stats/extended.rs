//! Extended statistical battery: monobit balance, runs up/down,
//! Monte-Carlo pi, and lag-1 autocorrelation.
//!
//! Each test is a pure function of the materialized sample; the
//! battery runs them in a fixed order but none depends on another.

use log::debug;

use crate::config::GeneratorConfig;
use crate::error::EngineResult;
use crate::generators::generate;
use crate::stats::{TestResult, TestStatus};

/// Floor applied to the requested sample size; small samples make the
/// z-approximations meaningless.
const MIN_SAMPLE: usize = 1000;

/// Min-max normalization to [0, 1]. A zero range divides by 1, so a
/// constant sample maps to all zeros.
fn normalize(sequence: &[f64]) -> Vec<f64> {
    let min = sequence.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sequence.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max - min == 0.0 { 1.0 } else { max - min };
    sequence.iter().map(|&x| (x - min) / range).collect()
}

/// Monobit balance: proportion of normalized values at or above 0.5,
/// z-scored against the fair-coin expectation.
fn monobit(normalized: &[f64]) -> TestResult {
    let n = normalized.len() as f64;
    let ones = normalized.iter().filter(|&&v| v >= 0.5).count() as f64;
    let prop = ones / n;
    let score = ((prop - 0.5) / (0.5 / n.sqrt())).abs();
    let status = if score < 1.96 {
        TestStatus::Pass
    } else if score < 2.576 {
        TestStatus::Suspect
    } else {
        TestStatus::Fail
    };
    TestResult {
        name: "Monobit (Balance)".into(),
        score,
        display_value: None,
        status,
        description: "Checks 0/1 balance. Z-score < 1.96 passes.".into(),
    }
}

/// Runs up/down: counts direction changes in the raw sample and
/// z-scores the run count against its asymptotic distribution.
fn runs_up_down(sequence: &[f64]) -> TestResult {
    let n = sequence.len();
    let mut runs = 1u64;
    for i in 2..n {
        if (sequence[i] > sequence[i - 1]) != (sequence[i - 1] > sequence[i - 2]) {
            runs += 1;
        }
    }
    let nf = n as f64;
    let expected = (2.0 * nf - 1.0) / 3.0;
    let variance = (16.0 * nf - 29.0) / 90.0;
    let score = (runs as f64 - expected).abs() / variance.sqrt();
    let status = if score < 2.0 {
        TestStatus::Pass
    } else if score < 3.0 {
        TestStatus::Suspect
    } else {
        TestStatus::Fail
    };
    TestResult {
        name: "Runs (Up/Down)".into(),
        score,
        display_value: None,
        status,
        description: "Checks sequential patterns. Z-score < 2 passes.".into(),
    }
}

/// Monte-Carlo pi: consecutive normalized pairs as points in the unit
/// square; the in-circle ratio estimates pi/4. The origin does not
/// count as a hit, so a constant-zero sample estimates 0.
fn monte_carlo_pi(normalized: &[f64]) -> TestResult {
    let pairs = normalized.len() / 2;
    let mut inside = 0u64;
    for i in 0..pairs {
        let x = normalized[2 * i];
        let y = normalized[2 * i + 1];
        let d = x * x + y * y;
        if d > 0.0 && d <= 1.0 {
            inside += 1;
        }
    }
    let estimate = if pairs == 0 {
        0.0
    } else {
        4.0 * inside as f64 / pairs as f64
    };
    let score = (std::f64::consts::PI - estimate).abs() / std::f64::consts::PI * 100.0;
    let status = if score < 2.0 {
        TestStatus::Pass
    } else if score < 5.0 {
        TestStatus::Suspect
    } else {
        TestStatus::Fail
    };
    TestResult {
        name: "Monte Carlo Pi".into(),
        score,
        display_value: Some(format!("\u{3c0} \u{2248} {estimate:.4}")),
        status,
        description: format!(
            "Geometric test. Est: {estimate:.4}. Err: {score:.2}%"
        ),
    }
}

/// Lag-1 autocorrelation of the normalized sample. The denominator
/// sums squared deviations of the first n-1 terms only, mirroring the
/// numerator's index range; a zero denominator reports correlation 1.
fn autocorrelation(normalized: &[f64]) -> TestResult {
    let n = normalized.len();
    let mean = normalized.iter().sum::<f64>() / n as f64;
    let mut num = 0.0;
    let mut den = 0.0;
    for i in 0..n - 1 {
        num += (normalized[i] - mean) * (normalized[i + 1] - mean);
        den += (normalized[i] - mean) * (normalized[i] - mean);
    }
    let correlation = if den == 0.0 { 1.0 } else { num / den };
    let score = correlation.abs();
    let confidence = 1.96 / (n as f64).sqrt();
    let status = if score < confidence {
        TestStatus::Pass
    } else if score < confidence * 1.5 {
        TestStatus::Suspect
    } else {
        TestStatus::Fail
    };
    TestResult {
        name: "Autocorrelation".into(),
        score,
        display_value: None,
        status,
        description: format!("Lag-1 correlation: {correlation:.4}. Ideal: 0."),
    }
}

/// Runs the full extended battery against a fresh sample.
///
/// The sample is regenerated from `config` at `max(sample_size, 1000)`
/// draws. A sample shorter than 10 values yields an empty battery.
///
/// # Errors
///
/// Propagates [`crate::error::EngineError::InvalidConfiguration`] from
/// generation.
pub fn run_extended_suite(
    config: &GeneratorConfig,
    sample_size: usize,
) -> EngineResult<Vec<TestResult>> {
    let sequence = generate(config, sample_size.max(MIN_SAMPLE))?;
    Ok(run_battery(&sequence))
}

/// Runs every extended test against an already materialized sample.
pub fn run_battery(sequence: &[f64]) -> Vec<TestResult> {
    let n = sequence.len();
    if n < 10 {
        debug!("sample of {n} values is too short for the extended battery");
        return Vec::new();
    }
    let normalized = normalize(sequence);
    vec![
        monobit(&normalized),
        runs_up_down(sequence),
        monte_carlo_pi(&normalized),
        autocorrelation(&normalized),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AlgorithmId, GeneratorConfig};

    fn alternating(n: usize) -> Vec<f64> {
        (0..n).map(|i| (i % 2) as f64).collect()
    }

    #[test]
    fn test_normalize_constant_maps_to_zero() {
        assert_eq!(normalize(&[5.0, 5.0, 5.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_normalize_spans_unit_interval() {
        let norm = normalize(&[10.0, 30.0, 20.0]);
        assert_eq!(norm, vec![0.0, 1.0, 0.5]);
    }

    #[test]
    fn test_monobit_balanced_passes() {
        let result = monobit(&normalize(&alternating(2000)));
        assert_eq!(result.status, TestStatus::Pass);
        assert!(result.score < 1.96);
    }

    #[test]
    fn test_monobit_skewed_fails() {
        let mut seq = vec![0.0; 1000];
        seq.extend(vec![1.0; 10]);
        let result = monobit(&normalize(&seq));
        assert_eq!(result.status, TestStatus::Fail);
    }

    #[test]
    fn test_runs_monotonic_fails() {
        let seq: Vec<f64> = (0..1000).map(|i| i as f64).collect();
        let result = runs_up_down(&seq);
        // A single run against an expectation near 2n/3.
        assert_eq!(result.status, TestStatus::Fail);
    }

    #[test]
    fn test_monte_carlo_engineered_ratio() {
        // pi/4 of the pairs land inside the circle; estimate is near pi.
        let pairs = 10_000usize;
        let inside = (pairs as f64 * std::f64::consts::FRAC_PI_4).round() as usize;
        let mut seq = Vec::with_capacity(pairs * 2);
        for i in 0..pairs {
            if i < inside {
                seq.push(0.1);
                seq.push(0.1);
            } else {
                seq.push(0.9);
                seq.push(0.9);
            }
        }
        // Append the endpoints so normalization keeps values in place.
        seq.push(0.0);
        seq.push(1.0);
        let result = monte_carlo_pi(&normalize(&seq));
        assert!(result.score < 2.0, "score was {}", result.score);
        assert_eq!(result.status, TestStatus::Pass);
    }

    #[test]
    fn test_monte_carlo_all_zero_scores_zero_hits() {
        let normalized = normalize(&[0.0; 100]);
        let result = monte_carlo_pi(&normalized);
        // Estimate 0 means 100% error against pi.
        assert_eq!(result.display_value.as_deref(), Some("\u{3c0} \u{2248} 0.0000"));
        assert_eq!(result.status, TestStatus::Fail);
    }

    #[test]
    fn test_autocorrelation_constant_is_one() {
        let result = autocorrelation(&normalize(&[3.0; 100]));
        assert_eq!(result.score, 1.0);
        assert_eq!(result.status, TestStatus::Fail);
    }

    #[test]
    fn test_autocorrelation_alternating_is_negative() {
        let result = autocorrelation(&normalize(&alternating(1000)));
        // Perfect alternation correlates at about -1.
        assert!(result.score > 0.9);
        assert_eq!(result.status, TestStatus::Fail);
    }

    #[test]
    fn test_suite_regenerates_minimum_sample() {
        let config = GeneratorConfig::with_defaults(AlgorithmId::Mulberry32);
        let results = run_extended_suite(&config, 10).unwrap();
        assert_eq!(results.len(), 4);
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            ["Monobit (Balance)", "Runs (Up/Down)", "Monte Carlo Pi", "Autocorrelation"]
        );
    }

    #[test]
    fn test_battery_short_sample_is_empty() {
        assert!(run_battery(&[1.0, 2.0, 3.0]).is_empty());
    }

    #[test]
    fn test_suite_rejects_invalid_config() {
        let mut config = GeneratorConfig::with_defaults(AlgorithmId::Lcg);
        config.params.m = 0;
        assert!(run_extended_suite(&config, 100).is_err());
    }
}
