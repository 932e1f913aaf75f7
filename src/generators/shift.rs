//! Shift-register family: combined Tausworthe, Galois LFSRs of four
//! widths, Xorshift32, and Xorshift1024*.
//!
//! Every operation here is fixed-width unsigned arithmetic; correctness
//! depends on exact bit patterns, so nothing on these paths touches
//! floating point until the final display conversion.

use crate::config::Params;
use crate::generators::modern::SplitMix64Stream;
use crate::generators::Generator;
use crate::utils::arith::parse_hex_tap;

/// Combined Tausworthe (taus88): three 32-bit registers with distinct
/// shift/mask/xor step formulas; output is `s1 ^ s2 ^ s3`.
pub(crate) struct Tausworthe {
    s1: u32,
    s2: u32,
    s3: u32,
}

impl Tausworthe {
    pub(crate) fn new(params: &Params) -> Self {
        Tausworthe {
            s1: params.seed as u32,
            s2: params.seed2 as u32,
            s3: params.seed3 as u32,
        }
    }
}

impl Generator for Tausworthe {
    fn next(&mut self) -> f64 {
        let out = self.s1 ^ self.s2 ^ self.s3;
        let b1 = (self.s1.wrapping_shl(13) ^ self.s1) >> 19;
        self.s1 = (self.s1 & 0xFFFF_FFFE).wrapping_shl(12) ^ b1;
        let b2 = (self.s2.wrapping_shl(2) ^ self.s2) >> 25;
        self.s2 = (self.s2 & 0xFFFF_FFF8).wrapping_shl(4) ^ b2;
        let b3 = (self.s3.wrapping_shl(3) ^ self.s3) >> 11;
        self.s3 = (self.s3 & 0xFFFF_FFF0).wrapping_shl(17) ^ b3;
        out as f64
    }
}

/// Galois-configuration LFSR, parameterized by register width.
///
/// Emits the register, then shifts right and XORs the tap mask in when
/// the dropped bit was set. The 64-bit variant emits only its low 32 bits
/// so every output stays exactly representable as an f64.
pub(crate) struct Lfsr {
    reg: u64,
    tap: u64,
    mask: u64,
    emit_low32: bool,
}

impl Lfsr {
    /// Builds an LFSR of `bits` width (8, 16, 32 or 64).
    ///
    /// An unparsable tap mask falls back to `default_tap`, and an
    /// unparsable 64-bit `string_seed` to 12345; validation rejects both
    /// forms before they reach this constructor, so the fallbacks only
    /// guard direct construction.
    pub(crate) fn new(params: &Params, bits: u32, default_tap: u64) -> Self {
        let mask = if bits == 64 {
            u64::MAX
        } else {
            (1u64 << bits) - 1
        };
        let tap = parse_hex_tap(&params.hex_tap).unwrap_or(default_tap) & mask;
        let reg = if bits == 64 {
            params.string_seed.parse::<u64>().unwrap_or(12345)
        } else {
            (params.seed as u64) & mask
        };
        Lfsr {
            reg,
            tap,
            mask,
            emit_low32: bits == 64,
        }
    }
}

impl Generator for Lfsr {
    fn next(&mut self) -> f64 {
        let out = if self.emit_low32 {
            self.reg & 0xFFFF_FFFF
        } else {
            self.reg
        };
        let lsb = self.reg & 1;
        self.reg >>= 1;
        if lsb == 1 {
            self.reg ^= self.tap;
        }
        self.reg &= self.mask;
        out as f64
    }
}

/// Marsaglia's Xorshift32: the register is the output.
pub(crate) struct Xorshift32 {
    x: u32,
}

impl Xorshift32 {
    pub(crate) fn new(params: &Params) -> Self {
        Xorshift32 {
            x: params.seed as u32,
        }
    }
}

impl Generator for Xorshift32 {
    fn next(&mut self) -> f64 {
        let out = self.x;
        self.x ^= self.x << 13;
        self.x ^= self.x >> 17;
        self.x ^= self.x << 5;
        out as f64
    }
}

/// Xorshift1024*: sixteen 64-bit words bootstrapped from a single master
/// seed via SplitMix64, with a fixed multiplier on the output word.
pub(crate) struct Xorshift1024 {
    s: [u64; 16],
    p: usize,
}

const XORSHIFT1024_MULT: u64 = 1181783497276652981;

impl Xorshift1024 {
    pub(crate) fn new(params: &Params) -> Self {
        let mut stream = SplitMix64Stream::new(params.seed as u64);
        let mut s = [0u64; 16];
        for word in s.iter_mut() {
            *word = stream.next_u64();
        }
        Xorshift1024 { s, p: 0 }
    }
}

impl Generator for Xorshift1024 {
    fn next(&mut self) -> f64 {
        let s0 = self.s[self.p];
        self.p = (self.p + 1) & 15;
        let mut s1 = self.s[self.p];
        s1 ^= s1 << 31;
        self.s[self.p] = s1 ^ s0 ^ (s1 >> 11) ^ (s0 >> 30);
        let out = self.s[self.p].wrapping_mul(XORSHIFT1024_MULT);
        (out & 0xFFFF_FFFF) as f64
    }
}
