//! Generator catalog: construction and stepping for every algorithm.
//!
//! Construction validates the configuration first; a bad configuration
//! never reaches a recurrence. Stepping is uniform: every generator is
//! a finite state machine behind the [`Generator`] trait, and
//! [`GeneratorState::next`] returns one `f64` sample per call.

use log::debug;

use crate::config::{AlgorithmId, GeneratorConfig};
use crate::error::{EngineError, EngineResult};
use crate::randomize::{EntropySource, OsEntropy};
use crate::validate::validate;

pub(crate) mod chaotic;
pub(crate) mod classical;
pub(crate) mod lcg;
pub(crate) mod modern;
pub(crate) mod shift;

/// One deterministic step of a pseudo-random recurrence.
pub(crate) trait Generator {
    /// Returns the next sample and advances the internal state.
    fn next(&mut self) -> f64;
}

/// An initialized generator, ready to produce samples.
///
/// Integer-valued algorithms emit values that fit in 32 bits, so every
/// sample is exactly representable in the returned `f64`.
pub struct GeneratorState {
    inner: Box<dyn Generator>,
}

impl std::fmt::Debug for GeneratorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorState").finish_non_exhaustive()
    }
}

impl GeneratorState {
    /// Validates `config` and builds the generator it describes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] carrying every
    /// validation failure when the parameters are rejected.
    pub fn init(config: &GeneratorConfig) -> EngineResult<Self> {
        Self::init_with_entropy(config, Box::new(OsEntropy))
    }

    /// Same as [`GeneratorState::init`], with an injected entropy source
    /// for the hardware-backed algorithms.
    pub fn init_with_entropy(
        config: &GeneratorConfig,
        entropy: Box<dyn EntropySource>,
    ) -> EngineResult<Self> {
        let errors = validate(config);
        if !errors.is_empty() {
            debug!(
                "refusing {}: {} validation error(s)",
                config.algorithm.name(),
                errors.len()
            );
            return Err(EngineError::InvalidConfiguration(errors));
        }

        let params = &config.params;
        let inner: Box<dyn Generator> = match config.algorithm {
            AlgorithmId::Lcg
            | AlgorithmId::Randu
            | AlgorithmId::Zx81
            | AlgorithmId::NumericalRecipes
            | AlgorithmId::Minstd
            | AlgorithmId::Carbon
            | AlgorithmId::Ggl => Box::new(lcg::Lcg::new(params)),
            AlgorithmId::Mwc64x => Box::new(lcg::Mwc64x::new(params)),
            AlgorithmId::WichmannHill => Box::new(lcg::WichmannHill::new(params)),

            AlgorithmId::Tausworthe => Box::new(shift::Tausworthe::new(params)),
            AlgorithmId::Lfsr8 => Box::new(shift::Lfsr::new(params, 8, 0x1D)),
            AlgorithmId::Lfsr16 => Box::new(shift::Lfsr::new(params, 16, 0xB400)),
            AlgorithmId::Lfsr32 => Box::new(shift::Lfsr::new(params, 32, 0x8020_0003)),
            AlgorithmId::Lfsr64 => Box::new(shift::Lfsr::new(params, 64, 0xD800_0000_0000_0000)),
            AlgorithmId::Xorshift32 => Box::new(shift::Xorshift32::new(params)),
            AlgorithmId::Xorshift1024 => Box::new(shift::Xorshift1024::new(params)),

            AlgorithmId::Xoroshiro128Plus => Box::new(modern::Xoroshiro128Plus::new(params)),
            AlgorithmId::Xoroshiro128PlusPlus => {
                Box::new(modern::Xoroshiro128PlusPlus::new(params))
            }
            AlgorithmId::Xoroshiro256PlusPlus => {
                Box::new(modern::Xoroshiro256PlusPlus::new(params))
            }
            AlgorithmId::SplitMix64 => Box::new(modern::SplitMix64::new(params)),
            AlgorithmId::Mulberry32 => Box::new(modern::Mulberry32::new(params)),
            AlgorithmId::Sfc32 => Box::new(modern::Sfc32::new(params)),
            AlgorithmId::PcgXshRr => Box::new(modern::PcgXshRr::new(params)),
            AlgorithmId::PcgMcg => Box::new(modern::PcgMcg::new(params)),
            AlgorithmId::PcgSpc => Box::new(modern::PcgSpc::new(params)),
            AlgorithmId::PcgRxsMXs => Box::new(modern::PcgRxsMXs::new(params)),
            AlgorithmId::PcgXslRr => Box::new(modern::PcgXslRr::new(params)),
            AlgorithmId::Mt19937 => Box::new(modern::Mt19937::new(params)),
            AlgorithmId::Rdrand | AlgorithmId::Rdseed => Box::new(modern::HwRandom::new(entropy)),

            AlgorithmId::Logistic => Box::new(chaotic::Logistic::new(params)),
            AlgorithmId::Tent => Box::new(chaotic::Tent::new(params)),
            AlgorithmId::Henon => Box::new(chaotic::Henon::new(params)),
            AlgorithmId::Ikeda => Box::new(chaotic::Ikeda::new(params)),
            AlgorithmId::Lorenz => Box::new(chaotic::Lorenz::new(params)),
            AlgorithmId::Rossler => Box::new(chaotic::Rossler::new(params)),

            AlgorithmId::Rule30 => Box::new(classical::Rule30::new(params)),
            AlgorithmId::Fibonacci => Box::new(classical::Fibonacci::new(params)),
            AlgorithmId::LaggedFibonacci => Box::new(classical::LaggedFibonacci::new(params)),
            AlgorithmId::MiddleSquare => Box::new(classical::MiddleSquare::new(params)),
        };

        Ok(GeneratorState { inner })
    }

    /// Returns the next sample.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        self.inner.next()
    }
}

/// Validates `config`, then produces `count` samples in one shot.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfiguration`] when the parameters
/// are rejected; see [`crate::validate::validate`] for the rules.
pub fn generate(config: &GeneratorConfig, count: usize) -> EngineResult<Vec<f64>> {
    let mut state = GeneratorState::init(config)?;
    debug!(
        "generating {} samples with {}",
        count,
        config.algorithm.name()
    );
    Ok((0..count).map(|_| state.next()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AlgorithmId, GeneratorConfig};
    use crate::validate::ParamField;

    #[test]
    fn test_generate_respects_count() {
        let config = GeneratorConfig::with_defaults(AlgorithmId::Lcg);
        let seq = generate(&config, 25).unwrap();
        assert_eq!(seq.len(), 25);
    }

    #[test]
    fn test_generate_zero_count() {
        let config = GeneratorConfig::with_defaults(AlgorithmId::Mulberry32);
        assert!(generate(&config, 0).unwrap().is_empty());
    }

    #[test]
    fn test_init_rejects_invalid_params() {
        let mut config = GeneratorConfig::with_defaults(AlgorithmId::Lcg);
        config.params.m = 0;
        let err = GeneratorState::init(&config).unwrap_err();
        match err {
            EngineError::InvalidConfiguration(errors) => {
                assert!(errors.iter().any(|e| e.field == ParamField::M));
            }
        }
    }

    #[test]
    fn test_every_catalog_entry_constructs() {
        for id in AlgorithmId::ALL {
            let config = GeneratorConfig::with_defaults(id);
            let seq = generate(&config, 10)
                .unwrap_or_else(|e| panic!("{} failed to generate: {e}", id.name()));
            assert_eq!(seq.len(), 10, "{}", id.name());
            assert!(
                seq.iter().all(|v| v.is_finite()),
                "{} produced a non-finite sample",
                id.name()
            );
        }
    }

    #[test]
    fn test_state_matches_batch_generation() {
        let config = GeneratorConfig::with_defaults(AlgorithmId::Xorshift32);
        let batch = generate(&config, 40).unwrap();
        let mut state = GeneratorState::init(&config).unwrap();
        for want in batch {
            assert_eq!(state.next(), want);
        }
    }
}
