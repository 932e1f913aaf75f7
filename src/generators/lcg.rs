//! Linear congruential family: generic LCG/MLCG, Wichmann-Hill, MWC64X.
//!
//! The LCG recurrence is evaluated in 128-bit arithmetic before reduction
//! so `a * x` never overflows for any 64-bit parameter choice. The named
//! historical variants (RANDU, ZX81, MINSTD, ...) differ only in their
//! default `(a, c, m, seed)` tuples, which live in the config tables.

use crate::config::Params;
use crate::generators::Generator;

/// `X_{n+1} = (a·X_n + c) mod m`, emitted output-then-advance: index 0 of
/// a sequence is the seed itself.
pub(crate) struct Lcg {
    x: i128,
    a: i128,
    c: i128,
    m: i128,
}

impl Lcg {
    /// A modulus of 0 is clamped to 1 (degenerate constant-zero stream)
    /// so a caller that bypassed validation gets data, not a fault.
    pub(crate) fn new(params: &Params) -> Self {
        let m = if params.m == 0 { 1 } else { params.m };
        Lcg {
            x: params.seed as i128,
            a: params.a as i128,
            c: params.c as i128,
            m: m as i128,
        }
    }
}

impl Generator for Lcg {
    fn next(&mut self) -> f64 {
        let out = self.x as f64;
        self.x = (self.a * self.x + self.c) % self.m;
        out
    }
}

/// Wichmann-Hill: three combined MLCGs, output is the fractional part of
/// the scaled sum of the current registers.
pub(crate) struct WichmannHill {
    s1: i64,
    s2: i64,
    s3: i64,
}

impl WichmannHill {
    pub(crate) fn new(params: &Params) -> Self {
        WichmannHill {
            s1: params.seed,
            s2: params.seed2,
            s3: params.seed3,
        }
    }
}

impl Generator for WichmannHill {
    fn next(&mut self) -> f64 {
        let out = (self.s1 as f64 / 30269.0 + self.s2 as f64 / 30307.0 + self.s3 as f64 / 30323.0)
            .fract();
        self.s1 = (171 * self.s1).rem_euclid(30269);
        self.s2 = (172 * self.s2).rem_euclid(30307);
        self.s3 = (170 * self.s3).rem_euclid(30323);
        out
    }
}

/// MWC64X multiply-with-carry: 64-bit state holding `(carry << 32) | x`.
pub(crate) struct Mwc64x {
    state: u64,
}

/// Multiplier from Thomas's MWC64X OpenCL kernel.
const MWC_A: u64 = 4294883355;

impl Mwc64x {
    pub(crate) fn new(params: &Params) -> Self {
        Mwc64x {
            state: params.seed as u64,
        }
    }
}

impl Generator for Mwc64x {
    fn next(&mut self) -> f64 {
        let x = self.state & 0xFFFF_FFFF;
        let carry = self.state >> 32;
        self.state = MWC_A.wrapping_mul(x).wrapping_add(carry);
        let out = ((self.state & 0xFFFF_FFFF) ^ (self.state >> 32)) as u32;
        out as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AlgorithmId, Params};

    #[test]
    fn test_lcg_emits_seed_first() {
        let mut gen = Lcg::new(&Params::defaults_for(AlgorithmId::Lcg));
        assert_eq!(gen.next(), 12345.0);
        // (1664525 * 12345 + 1013904223) mod 2^32
        let expected = (1664525u64 * 12345 + 1013904223) % 4294967296;
        assert_eq!(gen.next(), expected as f64);
    }

    #[test]
    fn test_lcg_zero_modulus_degenerates() {
        let mut params = Params::defaults_for(AlgorithmId::Lcg);
        params.m = 0;
        let mut gen = Lcg::new(&params);
        gen.next(); // seed
        for _ in 0..5 {
            assert_eq!(gen.next(), 0.0);
        }
    }

    #[test]
    fn test_lcg_period_bounded_by_modulus() {
        let mut params = Params::defaults_for(AlgorithmId::Lcg);
        params.a = 5;
        params.c = 3;
        params.m = 16;
        params.seed = 1;
        let mut gen = Lcg::new(&params);
        let first = gen.next();
        let mut period = 0;
        for _ in 0..32 {
            period += 1;
            if gen.next() == first {
                break;
            }
        }
        assert!(period <= 16);
    }

    #[test]
    fn test_minstd_stays_in_range() {
        let params = Params::defaults_for(AlgorithmId::Minstd);
        let mut gen = Lcg::new(&params);
        for _ in 0..1000 {
            let v = gen.next();
            assert!((0.0..2147483647.0).contains(&v));
        }
    }

    #[test]
    fn test_wichmann_hill_in_unit_interval() {
        let mut gen = WichmannHill::new(&Params::defaults_for(AlgorithmId::WichmannHill));
        for _ in 0..1000 {
            let v = gen.next();
            assert!((0.0..1.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn test_wichmann_hill_first_value() {
        let mut gen = WichmannHill::new(&Params::defaults_for(AlgorithmId::WichmannHill));
        let expected = (100.0 / 30269.0 + 200.0 / 30307.0 + 300.0 / 30323.0_f64).fract();
        assert_eq!(gen.next(), expected);
    }

    #[test]
    fn test_mwc64x_deterministic() {
        let params = Params::defaults_for(AlgorithmId::Mwc64x);
        let mut g1 = Mwc64x::new(&params);
        let mut g2 = Mwc64x::new(&params);
        for _ in 0..100 {
            assert_eq!(g1.next(), g2.next());
        }
    }

    #[test]
    fn test_mwc64x_output_fits_u32() {
        let mut gen = Mwc64x::new(&Params::defaults_for(AlgorithmId::Mwc64x));
        for _ in 0..1000 {
            let v = gen.next();
            assert!((0.0..=u32::MAX as f64).contains(&v));
            assert_eq!(v.fract(), 0.0);
        }
    }
}
