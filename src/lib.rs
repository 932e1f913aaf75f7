//! Entropy Oracle pseudo-random generation engine.
//!
//! A catalog of 40 pseudo-random number generators spanning seven
//! decades of the craft, from von Neumann's middle square and the early
//! LCGs through hardware shift registers and chaotic maps up to the
//! modern permuted (PCG) and rotated (Xoroshiro) families, paired with
//! a statistical test suite that scores their output.
//!
//! # Architecture
//!
//! ```text
//! GeneratorConfig (algorithm id + flexible parameter record)
//!     ↓ validate (field-scoped report, at most one error per field)
//! GeneratorState  (boxed recurrence behind a uniform step interface)
//!     ↓ next(): one f64 sample per call
//! Vec<f64>        (sequence; integer outputs ≤ 2^32 stay exact)
//!     ↓ chi_squared / run_extended_suite
//! TestResult      (PASS / SUSPECT / FAIL verdicts)
//! ```
//!
//! # Examples
//!
//! Generate a sequence and score it:
//!
//! ```
//! use entropy_oracle::config::{AlgorithmId, GeneratorConfig};
//! use entropy_oracle::generators::generate;
//! use entropy_oracle::stats::chi_squared;
//!
//! let config = GeneratorConfig::with_defaults(AlgorithmId::Mulberry32);
//! let sequence = generate(&config, 1000).unwrap();
//! assert_eq!(sequence.len(), 1000);
//!
//! let result = chi_squared(&sequence);
//! println!("chi-squared score {:.2}, passed: {}", result.score, result.passed);
//! ```
//!
//! Draw fresh parameters from the OS entropy pool:
//!
//! ```
//! use entropy_oracle::config::{AlgorithmId, GeneratorConfig};
//! use entropy_oracle::randomize::randomize;
//! use entropy_oracle::validate::validate;
//!
//! let params = randomize(AlgorithmId::Minstd);
//! let config = GeneratorConfig { algorithm: AlgorithmId::Minstd, params };
//! assert!(validate(&config).is_empty());
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod generators;
pub mod presets;
pub mod randomize;
pub mod stats;
pub mod validate;

pub(crate) mod utils;

pub use config::{AlgorithmId, Category, GeneratorConfig, Params};
pub use error::{EngineError, EngineResult};
pub use generators::{generate, GeneratorState};
pub use stats::{chi_squared, run_extended_suite, ChiSquaredResult, TestResult, TestStatus};
