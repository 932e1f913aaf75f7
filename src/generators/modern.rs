//! Modern permuted and counter-based generators: SplitMix64, Mulberry32,
//! SFC32, the PCG family, the Xoroshiro family, MT19937, and the
//! hardware-backed variants.
//!
//! All 64-bit-and-wider paths use explicit unsigned integer types with
//! `mod 2^64` (or `mod 2^128`) wraparound.

use crate::config::Params;
use crate::generators::Generator;
use crate::randomize::EntropySource;

/// Raw SplitMix64 stream of full 64-bit words.
///
/// This is the standard seeding bootstrap: Xorshift1024* and the lagged
/// Fibonacci history both expand a single master seed through it.
pub(crate) struct SplitMix64Stream {
    x: u64,
}

const SM64_GAMMA: u64 = 0x9E3779B97F4A7C15;
const SM64_MIX1: u64 = 0xBF58476D1CE4E5B9;
const SM64_MIX2: u64 = 0x94D049BB133111EB;

impl SplitMix64Stream {
    pub(crate) fn new(seed: u64) -> Self {
        SplitMix64Stream { x: seed }
    }

    /// Advances the counter and returns the mixed 64-bit word.
    pub(crate) fn next_u64(&mut self) -> u64 {
        self.x = self.x.wrapping_add(SM64_GAMMA);
        let mut z = self.x;
        z = (z ^ (z >> 30)).wrapping_mul(SM64_MIX1);
        z = (z ^ (z >> 27)).wrapping_mul(SM64_MIX2);
        z ^ (z >> 31)
    }
}

/// SplitMix64 as a catalog generator: emits the low 32 bits of each word.
pub(crate) struct SplitMix64 {
    stream: SplitMix64Stream,
}

impl SplitMix64 {
    pub(crate) fn new(params: &Params) -> Self {
        SplitMix64 {
            stream: SplitMix64Stream::new(params.seed as u64),
        }
    }
}

impl Generator for SplitMix64 {
    fn next(&mut self) -> f64 {
        (self.stream.next_u64() & 0xFFFF_FFFF) as f64
    }
}

/// Mulberry32: 32-bit counter with two multiply-xor-shift rounds. Every
/// multiply and add wraps mod 2^32.
pub(crate) struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub(crate) fn new(params: &Params) -> Self {
        Mulberry32 {
            state: params.seed as u32,
        }
    }
}

impl Generator for Mulberry32 {
    fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B79F5);
        let mut t = (self.state ^ (self.state >> 15)).wrapping_mul(self.state | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        (t ^ (t >> 14)) as f64
    }
}

/// SFC32 (Small Fast Counter): three chaotic words plus a counter.
pub(crate) struct Sfc32 {
    a: u32,
    b: u32,
    c: u32,
    counter: u32,
}

impl Sfc32 {
    pub(crate) fn new(params: &Params) -> Self {
        Sfc32 {
            a: params.seed as u32,
            b: params.seed2 as u32,
            c: params.seed3 as u32,
            counter: 1,
        }
    }
}

impl Generator for Sfc32 {
    fn next(&mut self) -> f64 {
        let t = self
            .a
            .wrapping_add(self.b)
            .wrapping_add(self.counter);
        self.counter = self.counter.wrapping_add(1);
        self.a = self.b ^ (self.b >> 9);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(21).wrapping_add(t);
        t as f64
    }
}

/// Shared 64-bit LCG multiplier of the PCG family.
const PCG_MULT: u64 = 6364136223846793005;

/// PCG-XSH-RR (pcg32): 64-bit LCG core, 32-bit xorshift-high/random-rotate
/// output computed from the pre-advance state.
pub(crate) struct PcgXshRr {
    state: u64,
    inc: u64,
}

fn pcg_xsh_rr_output(state: u64) -> u32 {
    let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
    let rot = (state >> 59) as u32;
    xorshifted.rotate_right(rot)
}

impl PcgXshRr {
    pub(crate) fn new(params: &Params) -> Self {
        let inc = ((params.seed2 as u64) << 1) | 1;
        let state = inc.wrapping_add(params.seed as u64).wrapping_mul(PCG_MULT).wrapping_add(inc);
        PcgXshRr { state, inc }
    }
}

impl Generator for PcgXshRr {
    fn next(&mut self) -> f64 {
        let old = self.state;
        self.state = old.wrapping_mul(PCG_MULT).wrapping_add(self.inc);
        pcg_xsh_rr_output(old) as f64
    }
}

/// PCG-MCG: the same permutation on a multiplicative core (no increment).
/// The state must be odd; validation enforces this.
pub(crate) struct PcgMcg {
    state: u64,
}

impl PcgMcg {
    pub(crate) fn new(params: &Params) -> Self {
        PcgMcg {
            state: params.seed as u64,
        }
    }
}

impl Generator for PcgMcg {
    fn next(&mut self) -> f64 {
        let old = self.state;
        self.state = old.wrapping_mul(PCG_MULT);
        pcg_xsh_rr_output(old) as f64
    }
}

/// PCG-SPC: 32-bit RXS-M-XS ("small PCG"), 32-bit state and output.
pub(crate) struct PcgSpc {
    state: u32,
    inc: u32,
}

impl PcgSpc {
    pub(crate) fn new(params: &Params) -> Self {
        let inc = (params.seed2 as u32) | 1;
        PcgSpc {
            state: (params.seed as u32).wrapping_add(inc),
            inc,
        }
    }
}

impl Generator for PcgSpc {
    fn next(&mut self) -> f64 {
        let old = self.state;
        self.state = old.wrapping_mul(747796405).wrapping_add(self.inc);
        let word = ((old >> ((old >> 28) + 4)) ^ old).wrapping_mul(277803737);
        ((word >> 22) ^ word) as f64
    }
}

/// PCG-RXS-M-XS (64/64): statistically strongest single-word PCG. Emits
/// the low 32 bits of the 64-bit output.
pub(crate) struct PcgRxsMXs {
    state: u64,
    inc: u64,
}

impl PcgRxsMXs {
    pub(crate) fn new(params: &Params) -> Self {
        let inc = (params.seed2 as u64) | 1;
        PcgRxsMXs {
            state: (params.seed as u64).wrapping_add(inc),
            inc,
        }
    }
}

impl Generator for PcgRxsMXs {
    fn next(&mut self) -> f64 {
        let old = self.state;
        self.state = old.wrapping_mul(PCG_MULT).wrapping_add(self.inc);
        let word = ((old >> ((old >> 59) + 5)) ^ old).wrapping_mul(12605985483714917081);
        let out = (word >> 43) ^ word;
        (out & 0xFFFF_FFFF) as f64
    }
}

/// PCG-XSL-RR (128/64), the default "pcg64": 128-bit state, 64-bit
/// xorshift-low/random-rotate output. Emits the low 32 bits.
pub(crate) struct PcgXslRr {
    state: u128,
    inc: u128,
}

const PCG128_MULT: u128 = 0x2360ED051FC65DA44385DF649FCCF645;

impl PcgXslRr {
    pub(crate) fn new(params: &Params) -> Self {
        let inc = ((params.seed2 as u128) << 1) | 1;
        let state = inc
            .wrapping_add(params.seed as u128)
            .wrapping_mul(PCG128_MULT)
            .wrapping_add(inc);
        PcgXslRr { state, inc }
    }
}

impl Generator for PcgXslRr {
    fn next(&mut self) -> f64 {
        let old = self.state;
        self.state = old.wrapping_mul(PCG128_MULT).wrapping_add(self.inc);
        let xored = ((old >> 64) as u64) ^ (old as u64);
        let rot = (old >> 122) as u32;
        let out = xored.rotate_right(rot);
        (out & 0xFFFF_FFFF) as f64
    }
}

/// Xoroshiro128+: two 64-bit words, output is the pre-advance word sum.
pub(crate) struct Xoroshiro128Plus {
    s0: u64,
    s1: u64,
}

/// Seed words taken verbatim; the forbidden all-zero state is nudged to
/// the SplitMix gamma so the register never absorbs.
fn guard_zero2(s0: u64, s1: u64) -> (u64, u64) {
    if s0 | s1 == 0 {
        (SM64_GAMMA, 0)
    } else {
        (s0, s1)
    }
}

impl Xoroshiro128Plus {
    pub(crate) fn new(params: &Params) -> Self {
        let (s0, s1) = guard_zero2(params.seed as u64, params.seed2 as u64);
        Xoroshiro128Plus { s0, s1 }
    }

    fn advance(&mut self) {
        self.s1 ^= self.s0;
        self.s0 = self.s0.rotate_left(55) ^ self.s1 ^ (self.s1 << 14);
        self.s1 = self.s1.rotate_left(36);
    }
}

impl Generator for Xoroshiro128Plus {
    fn next(&mut self) -> f64 {
        let out = self.s0.wrapping_add(self.s1);
        self.advance();
        (out & 0xFFFF_FFFF) as f64
    }
}

/// Xoroshiro128++: the `++` scrambler on a 49/21/28 rotation core.
pub(crate) struct Xoroshiro128PlusPlus {
    s0: u64,
    s1: u64,
}

impl Xoroshiro128PlusPlus {
    pub(crate) fn new(params: &Params) -> Self {
        let (s0, s1) = guard_zero2(params.seed as u64, params.seed2 as u64);
        Xoroshiro128PlusPlus { s0, s1 }
    }
}

impl Generator for Xoroshiro128PlusPlus {
    fn next(&mut self) -> f64 {
        let out = self
            .s0
            .wrapping_add(self.s1)
            .rotate_left(17)
            .wrapping_add(self.s0);
        self.s1 ^= self.s0;
        self.s0 = self.s0.rotate_left(49) ^ self.s1 ^ (self.s1 << 21);
        self.s1 = self.s1.rotate_left(28);
        (out & 0xFFFF_FFFF) as f64
    }
}

/// Xoroshiro256++: four 64-bit words for large-scale parallel use.
pub(crate) struct Xoroshiro256PlusPlus {
    s: [u64; 4],
}

impl Xoroshiro256PlusPlus {
    pub(crate) fn new(params: &Params) -> Self {
        let mut s = [
            params.seed as u64,
            params.seed2 as u64,
            params.seed3 as u64,
            params.seed4 as u64,
        ];
        if s.iter().all(|&w| w == 0) {
            s[0] = SM64_GAMMA;
        }
        Xoroshiro256PlusPlus { s }
    }
}

impl Generator for Xoroshiro256PlusPlus {
    fn next(&mut self) -> f64 {
        let s = &mut self.s;
        let out = s[0].wrapping_add(s[3]).rotate_left(23).wrapping_add(s[0]);
        let t = s[1] << 17;
        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];
        s[2] ^= t;
        s[3] = s[3].rotate_left(45);
        (out & 0xFFFF_FFFF) as f64
    }
}

/// MT19937 (32-bit Mersenne Twister): 624-word state, standard seeding
/// and tempering constants.
pub(crate) struct Mt19937 {
    mt: [u32; 624],
    mti: usize,
}

const MT_N: usize = 624;
const MT_M: usize = 397;
const MT_MATRIX_A: u32 = 0x9908B0DF;
const MT_UPPER: u32 = 0x80000000;
const MT_LOWER: u32 = 0x7FFFFFFF;

impl Mt19937 {
    pub(crate) fn new(params: &Params) -> Self {
        let mut mt = [0u32; MT_N];
        mt[0] = params.seed as u32;
        for i in 1..MT_N {
            let prev = mt[i - 1];
            mt[i] = 1812433253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Mt19937 { mt, mti: MT_N }
    }

    fn twist(&mut self) {
        for i in 0..MT_N {
            let x = (self.mt[i] & MT_UPPER) | (self.mt[(i + 1) % MT_N] & MT_LOWER);
            let mut next = self.mt[(i + MT_M) % MT_N] ^ (x >> 1);
            if x & 1 == 1 {
                next ^= MT_MATRIX_A;
            }
            self.mt[i] = next;
        }
        self.mti = 0;
    }
}

impl Generator for Mt19937 {
    fn next(&mut self) -> f64 {
        if self.mti >= MT_N {
            self.twist();
        }
        let mut y = self.mt[self.mti];
        self.mti += 1;

        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C5680;
        y ^= (y << 15) & 0xEFC60000;
        y ^= y >> 18;

        y as f64
    }
}

/// Hardware-backed variant: one fresh 32-bit word per step from the
/// entropy boundary. Non-deterministic by design; tests inject a mock
/// source.
pub(crate) struct HwRandom {
    source: Box<dyn EntropySource>,
}

impl HwRandom {
    pub(crate) fn new(source: Box<dyn EntropySource>) -> Self {
        HwRandom { source }
    }
}

impl Generator for HwRandom {
    fn next(&mut self) -> f64 {
        let mut word = [0u32; 1];
        self.source.fill_u32s(&mut word);
        word[0] as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AlgorithmId, Params};

    #[test]
    fn test_splitmix_stream_known_vector() {
        // First word for seed 0 is mix(gamma); a widely published value.
        let mut stream = SplitMix64Stream::new(0);
        assert_eq!(stream.next_u64(), 0xE220A8397B1DCDAF);
    }

    #[test]
    fn test_splitmix_generator_emits_low32() {
        let params = Params::defaults_for(AlgorithmId::SplitMix64);
        let mut gen = SplitMix64::new(&params);
        let mut stream = SplitMix64Stream::new(params.seed as u64);
        for _ in 0..50 {
            assert_eq!(gen.next(), (stream.next_u64() & 0xFFFF_FFFF) as f64);
        }
    }

    #[test]
    fn test_mulberry32_deterministic() {
        let params = Params::defaults_for(AlgorithmId::Mulberry32);
        let mut g1 = Mulberry32::new(&params);
        let mut g2 = Mulberry32::new(&params);
        for _ in 0..200 {
            assert_eq!(g1.next(), g2.next());
        }
    }

    #[test]
    fn test_mulberry32_first_step() {
        let mut params = Params::defaults_for(AlgorithmId::Mulberry32);
        params.seed = 12345;
        let mut gen = Mulberry32::new(&params);

        let state = 12345u32.wrapping_add(0x6D2B79F5);
        let mut t = (state ^ (state >> 15)).wrapping_mul(state | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        assert_eq!(gen.next(), (t ^ (t >> 14)) as f64);
    }

    #[test]
    fn test_sfc32_counter_advances() {
        let params = Params::defaults_for(AlgorithmId::Sfc32);
        let mut gen = Sfc32::new(&params);
        // t = a + b + counter = 1 + 2 + 1
        assert_eq!(gen.next(), 4.0);
        assert_eq!(gen.counter, 2);
    }

    #[test]
    fn test_pcg_xsh_rr_stream_separation() {
        let mut p1 = Params::defaults_for(AlgorithmId::PcgXshRr);
        let mut p2 = p1.clone();
        p1.seed2 = 54;
        p2.seed2 = 55;
        let mut g1 = PcgXshRr::new(&p1);
        let mut g2 = PcgXshRr::new(&p2);
        let diverged = (0..20).any(|_| g1.next() != g2.next());
        assert!(diverged, "distinct streams must diverge");
    }

    #[test]
    fn test_pcg_mcg_preserves_oddness() {
        let params = Params::defaults_for(AlgorithmId::PcgMcg);
        let mut gen = PcgMcg::new(&params);
        for _ in 0..100 {
            gen.next();
            assert_eq!(gen.state & 1, 1, "odd state must stay odd");
        }
    }

    #[test]
    fn test_pcg_outputs_fit_u32() {
        let mut gens: Vec<Box<dyn Generator>> = vec![
            Box::new(PcgXshRr::new(&Params::defaults_for(AlgorithmId::PcgXshRr))),
            Box::new(PcgMcg::new(&Params::defaults_for(AlgorithmId::PcgMcg))),
            Box::new(PcgSpc::new(&Params::defaults_for(AlgorithmId::PcgSpc))),
            Box::new(PcgRxsMXs::new(&Params::defaults_for(AlgorithmId::PcgRxsMXs))),
            Box::new(PcgXslRr::new(&Params::defaults_for(AlgorithmId::PcgXslRr))),
        ];
        for gen in gens.iter_mut() {
            for _ in 0..200 {
                let v = gen.next();
                assert!((0.0..=u32::MAX as f64).contains(&v));
                assert_eq!(v.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_xoroshiro_zero_state_guard() {
        let mut params = Params::defaults_for(AlgorithmId::Xoroshiro128Plus);
        params.seed = 0;
        params.seed2 = 0;
        let mut gen = Xoroshiro128Plus::new(&params);
        let all_zero = (0..20).all(|_| gen.next() == 0.0);
        assert!(!all_zero, "zero state must not absorb");
    }

    #[test]
    fn test_xoroshiro256_deterministic() {
        let params = Params::defaults_for(AlgorithmId::Xoroshiro256PlusPlus);
        let mut g1 = Xoroshiro256PlusPlus::new(&params);
        let mut g2 = Xoroshiro256PlusPlus::new(&params);
        for _ in 0..200 {
            assert_eq!(g1.next(), g2.next());
        }
    }

    #[test]
    fn test_mt19937_known_first_output() {
        // MT19937 with the canonical seed 5489 emits 3499211612 first.
        let mut params = Params::defaults_for(AlgorithmId::Mt19937);
        params.seed = 5489;
        let mut gen = Mt19937::new(&params);
        assert_eq!(gen.next(), 3499211612.0);
        assert_eq!(gen.next(), 581869302.0);
    }

    #[test]
    fn test_hw_random_draws_from_source() {
        struct Fixed(u32);
        impl EntropySource for Fixed {
            fn fill_u32s(&mut self, dest: &mut [u32]) {
                for w in dest.iter_mut() {
                    *w = self.0;
                }
            }
        }
        let mut gen = HwRandom::new(Box::new(Fixed(777)));
        assert_eq!(gen.next(), 777.0);
        assert_eq!(gen.next(), 777.0);
    }
}
