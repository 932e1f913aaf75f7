//! Secure parameter randomizer.
//!
//! Draws fresh parameters for any catalog algorithm from an OS-backed
//! entropy source, shaped so the result always passes validation:
//! multiplicative LCGs get a multiplier coprime with the modulus, PCG
//! variants get odd state/increments, chaotic maps get an initial state
//! clamped away from the fixed points at 0 and 1.

use log::{debug, warn};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::config::{AlgorithmId, GeneratorConfig, Params};
use crate::utils::arith::gcd;
use crate::validate::validate;

/// Boundary to the platform entropy pool. Production uses [`OsEntropy`];
/// tests inject deterministic sources.
pub trait EntropySource {
    /// Fills `dest` with uniformly random 32-bit words.
    fn fill_u32s(&mut self, dest: &mut [u32]);
}

/// [`EntropySource`] backed by the operating system RNG.
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_u32s(&mut self, dest: &mut [u32]) {
        for word in dest.iter_mut() {
            *word = OsRng.next_u32();
        }
    }
}

/// Candidate moduli for randomized LCG runs: two Mersenne-adjacent
/// primes and two powers of two.
const LCG_MODULI: [i64; 4] = [2147483647, 4294967296, 65537, 2147483648];

/// Retry budget for the coprime-multiplier draw.
const COPRIME_RETRIES: usize = 100;

struct Draw<'a> {
    source: &'a mut dyn EntropySource,
}

impl Draw<'_> {
    fn word(&mut self) -> u32 {
        let mut buf = [0u32; 1];
        self.source.fill_u32s(&mut buf);
        buf[0]
    }

    fn nonzero_word(&mut self) -> u32 {
        let w = self.word();
        if w == 0 {
            12345
        } else {
            w
        }
    }

    fn below(&mut self, bound: u32) -> u32 {
        self.word() % bound
    }

    fn coin(&mut self) -> bool {
        self.word() & 1 == 1
    }

    /// Uniform draw in [0, 1) at 32-bit resolution.
    fn unit(&mut self) -> f64 {
        self.word() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Float in the open unit interval, 5 decimals, clamped away from
    /// the map fixed points at the edges.
    fn chaotic_seed(&mut self) -> f64 {
        let v = (self.unit() * 100_000.0).round() / 100_000.0;
        if v <= 0.01 {
            0.02
        } else if v >= 0.99 {
            0.98
        } else {
            v
        }
    }

    /// Float in [-half_span, half_span] rounded to 4 decimals.
    fn spanned(&mut self, half_span: f64) -> f64 {
        let v = (self.unit() * 2.0 - 1.0) * half_span;
        (v * 10_000.0).round() / 10_000.0
    }
}

/// Draws randomized parameters for `algorithm` from the OS entropy pool.
pub fn randomize(algorithm: AlgorithmId) -> Params {
    randomize_with(algorithm, &mut OsEntropy)
}

/// Draws randomized parameters for `algorithm` from `source`.
///
/// The returned configuration always validates: if the draw cannot be
/// shaped into a valid one (retry budget exhausted), the per-algorithm
/// defaults are returned instead.
pub fn randomize_with(algorithm: AlgorithmId, source: &mut dyn EntropySource) -> Params {
    let mut draw = Draw { source };
    let mut params = Params::defaults_for(algorithm);

    if algorithm.is_lcg_family() {
        randomize_lcg(&mut draw, &mut params);
    } else {
        match algorithm {
            AlgorithmId::Mwc64x | AlgorithmId::SplitMix64 | AlgorithmId::Mulberry32 => {
                params.seed = draw.nonzero_word() as i64;
            }
            AlgorithmId::WichmannHill => {
                params.seed = (draw.below(30_000) + 128) as i64;
                params.seed2 = (draw.below(30_000) + 128) as i64;
                params.seed3 = (draw.below(30_000) + 128) as i64;
            }
            AlgorithmId::Tausworthe | AlgorithmId::Sfc32 => {
                params.seed = (draw.word() as i64) + 128;
                params.seed2 = (draw.word() as i64) + 128;
                params.seed3 = (draw.word() as i64) + 128;
            }
            AlgorithmId::Lfsr8 => params.seed = (draw.below(0xFF) + 1) as i64,
            AlgorithmId::Lfsr16 => params.seed = (draw.below(0xFFFF) + 1) as i64,
            AlgorithmId::Lfsr32 => params.seed = draw.nonzero_word() as i64,
            AlgorithmId::Lfsr64 => {
                let high = draw.word() as u64;
                let low = draw.nonzero_word() as u64;
                params.string_seed = ((high << 32) | low).to_string();
            }
            AlgorithmId::Xorshift32 | AlgorithmId::Xorshift1024 => {
                params.seed = draw.nonzero_word() as i64;
            }
            AlgorithmId::Xoroshiro128Plus | AlgorithmId::Xoroshiro128PlusPlus => {
                params.seed = draw.nonzero_word() as i64;
                params.seed2 = draw.word() as i64;
            }
            AlgorithmId::Xoroshiro256PlusPlus => {
                params.seed = draw.nonzero_word() as i64;
                params.seed2 = draw.word() as i64;
                params.seed3 = draw.word() as i64;
                params.seed4 = draw.word() as i64;
            }
            AlgorithmId::PcgXshRr | AlgorithmId::PcgXslRr => {
                params.seed = draw.word() as i64;
                params.seed2 = draw.word() as i64;
            }
            AlgorithmId::PcgMcg => {
                params.seed = (draw.word() | 1) as i64;
            }
            AlgorithmId::PcgSpc | AlgorithmId::PcgRxsMXs => {
                params.seed = draw.word() as i64;
                params.seed2 = (draw.word() | 1) as i64;
            }
            AlgorithmId::Mt19937 => {
                params.seed = draw.nonzero_word() as i64;
            }
            AlgorithmId::Logistic
            | AlgorithmId::Tent
            | AlgorithmId::Henon
            | AlgorithmId::Ikeda => {
                params.float_seed = draw.chaotic_seed();
            }
            AlgorithmId::Lorenz => params.float_seed = draw.spanned(10.0),
            AlgorithmId::Rossler => params.float_seed = draw.spanned(5.0),
            AlgorithmId::Rule30 | AlgorithmId::MiddleSquare | AlgorithmId::LaggedFibonacci => {
                params.seed = draw.nonzero_word() as i64;
            }
            AlgorithmId::Fibonacci => {
                params.fib_seed1 = draw.below(100) as i64;
                params.fib_seed2 = (draw.below(100) + 1) as i64;
            }
            // Hardware variants have no tunable parameters.
            AlgorithmId::Rdrand | AlgorithmId::Rdseed => {}
            // LCG family handled above.
            _ => {}
        }
    }

    let config = GeneratorConfig {
        algorithm,
        params: params.clone(),
    };
    let errors = validate(&config);
    if errors.is_empty() {
        debug!("randomized parameters for {}", algorithm.name());
        params
    } else {
        warn!(
            "randomized draw for {} failed validation, falling back to defaults",
            algorithm.name()
        );
        Params::defaults_for(algorithm)
    }
}

fn randomize_lcg(draw: &mut Draw<'_>, params: &mut Params) {
    params.m = LCG_MODULI[draw.below(LCG_MODULI.len() as u32) as usize];

    if draw.coin() {
        // Multiplicative form: c = 0, a coprime with m, nonzero seed.
        params.c = 0;
        let mut a = draw.nonzero_word() as i64;
        for _ in 0..COPRIME_RETRIES {
            if gcd(a, params.m) == 1 {
                break;
            }
            a = draw.nonzero_word() as i64;
        }
        params.a = a;
        params.seed = ((draw.word() as i64) % (params.m - 1)).abs() + 1;
    } else {
        params.a = draw.nonzero_word() as i64;
        params.c = draw.word() as i64;
        params.seed = (draw.word() as i64) % params.m;
    }
}
