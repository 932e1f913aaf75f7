//! Generator configuration: algorithm identifiers, the flexible parameter
//! record, and the per-algorithm default tables.
//!
//! A [`GeneratorConfig`] is a plain value: the engine never retains
//! references into it after a call returns, and a single `generate` run
//! treats it as immutable.

use serde::{Deserialize, Serialize};

/// Catalog category, mirroring the generator lab's grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Linear and multiplicative congruential generators.
    LcgMlcg,
    /// Shift-register and xorshift-family generators.
    ShiftRegister,
    /// Modern permuted and counter-based generators.
    Modern,
    /// Chaotic maps and cellular automata.
    Chaotic,
    /// Historical generators.
    Classical,
}

/// Identifies one generator recurrence in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmId {
    // LCG & MLCG
    Lcg,
    Randu,
    Zx81,
    NumericalRecipes,
    Minstd,
    Carbon,
    Ggl,
    Mwc64x,
    WichmannHill,
    // Shift registers
    Tausworthe,
    Lfsr8,
    Lfsr16,
    Lfsr32,
    Lfsr64,
    Xorshift32,
    Xorshift1024,
    // Modern & quality
    Xoroshiro128Plus,
    Xoroshiro128PlusPlus,
    Xoroshiro256PlusPlus,
    SplitMix64,
    Mulberry32,
    Sfc32,
    PcgXshRr,
    PcgMcg,
    PcgSpc,
    PcgRxsMXs,
    PcgXslRr,
    Mt19937,
    Rdrand,
    Rdseed,
    // Chaotic & cellular
    Logistic,
    Tent,
    Henon,
    Ikeda,
    Lorenz,
    Rossler,
    Rule30,
    // Classical
    Fibonacci,
    LaggedFibonacci,
    MiddleSquare,
}

impl AlgorithmId {
    /// Every algorithm in the catalog, in display order.
    pub const ALL: [AlgorithmId; 40] = [
        AlgorithmId::Lcg,
        AlgorithmId::Randu,
        AlgorithmId::Zx81,
        AlgorithmId::NumericalRecipes,
        AlgorithmId::Minstd,
        AlgorithmId::Carbon,
        AlgorithmId::Ggl,
        AlgorithmId::Mwc64x,
        AlgorithmId::WichmannHill,
        AlgorithmId::Tausworthe,
        AlgorithmId::Lfsr8,
        AlgorithmId::Lfsr16,
        AlgorithmId::Lfsr32,
        AlgorithmId::Lfsr64,
        AlgorithmId::Xorshift32,
        AlgorithmId::Xorshift1024,
        AlgorithmId::Xoroshiro128Plus,
        AlgorithmId::Xoroshiro128PlusPlus,
        AlgorithmId::Xoroshiro256PlusPlus,
        AlgorithmId::SplitMix64,
        AlgorithmId::Mulberry32,
        AlgorithmId::Sfc32,
        AlgorithmId::PcgXshRr,
        AlgorithmId::PcgMcg,
        AlgorithmId::PcgSpc,
        AlgorithmId::PcgRxsMXs,
        AlgorithmId::PcgXslRr,
        AlgorithmId::Mt19937,
        AlgorithmId::Rdrand,
        AlgorithmId::Rdseed,
        AlgorithmId::Logistic,
        AlgorithmId::Tent,
        AlgorithmId::Henon,
        AlgorithmId::Ikeda,
        AlgorithmId::Lorenz,
        AlgorithmId::Rossler,
        AlgorithmId::Rule30,
        AlgorithmId::Fibonacci,
        AlgorithmId::LaggedFibonacci,
        AlgorithmId::MiddleSquare,
    ];

    /// Human-readable display name.
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmId::Lcg => "Custom LCG",
            AlgorithmId::Randu => "RANDU",
            AlgorithmId::Zx81 => "ZX81 LCG",
            AlgorithmId::NumericalRecipes => "Numerical Recipes",
            AlgorithmId::Minstd => "MINSTD (MLCG)",
            AlgorithmId::Carbon => "Apple CarbonLib",
            AlgorithmId::Ggl => "GGL",
            AlgorithmId::Mwc64x => "MWC64X",
            AlgorithmId::WichmannHill => "Wichmann-Hill",
            AlgorithmId::Tausworthe => "Tausworthe",
            AlgorithmId::Lfsr8 => "LFSR (8-bit)",
            AlgorithmId::Lfsr16 => "LFSR (16-bit)",
            AlgorithmId::Lfsr32 => "LFSR (32-bit)",
            AlgorithmId::Lfsr64 => "LFSR (64-bit)",
            AlgorithmId::Xorshift32 => "Xorshift32",
            AlgorithmId::Xorshift1024 => "Xorshift1024*",
            AlgorithmId::Xoroshiro128Plus => "Xoroshiro128+",
            AlgorithmId::Xoroshiro128PlusPlus => "Xoroshiro128++",
            AlgorithmId::Xoroshiro256PlusPlus => "Xoroshiro256++",
            AlgorithmId::SplitMix64 => "SplitMix64",
            AlgorithmId::Mulberry32 => "Mulberry32",
            AlgorithmId::Sfc32 => "SFC32",
            AlgorithmId::PcgXshRr => "PCG-XSH-RR",
            AlgorithmId::PcgMcg => "PCG-MCG",
            AlgorithmId::PcgSpc => "PCG-SPC",
            AlgorithmId::PcgRxsMXs => "PCG-RXS-M-XS",
            AlgorithmId::PcgXslRr => "PCG-XSL-RR (128/64)",
            AlgorithmId::Mt19937 => "Mersenne Twister",
            AlgorithmId::Rdrand => "RDRAND (HW)",
            AlgorithmId::Rdseed => "RDSEED (HW)",
            AlgorithmId::Logistic => "Logistic Map",
            AlgorithmId::Tent => "Tent Map",
            AlgorithmId::Henon => "Hénon Map",
            AlgorithmId::Ikeda => "Ikeda Map",
            AlgorithmId::Lorenz => "Lorenz Attractor",
            AlgorithmId::Rossler => "Rössler Attractor",
            AlgorithmId::Rule30 => "Rule 30",
            AlgorithmId::Fibonacci => "Fibonacci",
            AlgorithmId::LaggedFibonacci => "Lagged Fibonacci",
            AlgorithmId::MiddleSquare => "Middle Square",
        }
    }

    /// Catalog category of the algorithm.
    pub fn category(self) -> Category {
        match self {
            AlgorithmId::Lcg
            | AlgorithmId::Randu
            | AlgorithmId::Zx81
            | AlgorithmId::NumericalRecipes
            | AlgorithmId::Minstd
            | AlgorithmId::Carbon
            | AlgorithmId::Ggl
            | AlgorithmId::Mwc64x => Category::LcgMlcg,
            AlgorithmId::Tausworthe
            | AlgorithmId::Lfsr8
            | AlgorithmId::Lfsr16
            | AlgorithmId::Lfsr32
            | AlgorithmId::Lfsr64
            | AlgorithmId::Xorshift32
            | AlgorithmId::Xorshift1024 => Category::ShiftRegister,
            AlgorithmId::Xoroshiro128Plus
            | AlgorithmId::Xoroshiro128PlusPlus
            | AlgorithmId::Xoroshiro256PlusPlus
            | AlgorithmId::SplitMix64
            | AlgorithmId::Mulberry32
            | AlgorithmId::Sfc32
            | AlgorithmId::PcgXshRr
            | AlgorithmId::PcgMcg
            | AlgorithmId::PcgSpc
            | AlgorithmId::PcgRxsMXs
            | AlgorithmId::PcgXslRr
            | AlgorithmId::Mt19937
            | AlgorithmId::Rdrand
            | AlgorithmId::Rdseed => Category::Modern,
            AlgorithmId::Logistic
            | AlgorithmId::Tent
            | AlgorithmId::Henon
            | AlgorithmId::Ikeda
            | AlgorithmId::Lorenz
            | AlgorithmId::Rossler
            | AlgorithmId::Rule30 => Category::Chaotic,
            AlgorithmId::Fibonacci
            | AlgorithmId::LaggedFibonacci
            | AlgorithmId::MiddleSquare
            | AlgorithmId::WichmannHill => Category::Classical,
        }
    }

    /// True for the plain LCG/MLCG recurrence family (shared parameter
    /// block and validation rules).
    pub fn is_lcg_family(self) -> bool {
        matches!(
            self,
            AlgorithmId::Lcg
                | AlgorithmId::Randu
                | AlgorithmId::Zx81
                | AlgorithmId::NumericalRecipes
                | AlgorithmId::Minstd
                | AlgorithmId::Carbon
                | AlgorithmId::Ggl
        )
    }

    /// True for multiplicative variants that require a nonzero seed.
    pub fn is_multiplicative_lcg(self) -> bool {
        matches!(
            self,
            AlgorithmId::Minstd | AlgorithmId::Carbon | AlgorithmId::Ggl
        )
    }

    /// True for any Galois LFSR width.
    pub fn is_lfsr(self) -> bool {
        matches!(
            self,
            AlgorithmId::Lfsr8 | AlgorithmId::Lfsr16 | AlgorithmId::Lfsr32 | AlgorithmId::Lfsr64
        )
    }
}

/// Flexible parameter record shared by every algorithm.
///
/// Not every algorithm reads every field; [`crate::validate::validate`]
/// checks only the subset the selected algorithm uses. Integer seeds are
/// `i64` so 64-bit defaults like the PCG increments fit; the LFSR-64 seed
/// travels as a decimal string because its full range exceeds `i64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    pub a: i64,
    pub c: i64,
    pub m: i64,
    pub seed: i64,
    pub seed2: i64,
    pub seed3: i64,
    pub seed4: i64,
    pub fib_seed1: i64,
    pub fib_seed2: i64,
    pub float_seed: f64,
    pub param_r: f64,
    pub param_a: f64,
    pub param_b: f64,
    pub param_c: f64,
    pub param_dt: f64,
    pub hex_tap: String,
    pub string_seed: String,
    pub count: i64,
}

impl Default for Params {
    /// The lab's baseline parameter state (custom LCG tuple).
    fn default() -> Self {
        Params {
            a: 1664525,
            c: 1013904223,
            m: 4294967296,
            seed: 12345,
            seed2: 54321,
            seed3: 9999,
            seed4: 10101,
            fib_seed1: 0,
            fib_seed2: 1,
            float_seed: 0.5,
            param_r: 3.99,
            param_a: 1.4,
            param_b: 0.3,
            param_c: 2.66,
            param_dt: 0.01,
            hex_tap: "B400".to_string(),
            string_seed: String::new(),
            count: 10,
        }
    }
}

impl Params {
    /// Returns the canonical default parameters for an algorithm.
    ///
    /// These are the values the lab loads when the algorithm is selected
    /// and the values the randomizer falls back to when its retry budget
    /// runs out.
    pub fn defaults_for(id: AlgorithmId) -> Params {
        let mut p = Params::default();
        match id {
            AlgorithmId::Lcg | AlgorithmId::NumericalRecipes => {}
            AlgorithmId::Randu => {
                p.a = 65539;
                p.c = 0;
                p.m = 2147483648;
                p.seed = 1;
            }
            AlgorithmId::Zx81 => {
                p.a = 75;
                p.c = 74;
                p.m = 65537;
                p.seed = 123;
            }
            AlgorithmId::Minstd => {
                p.a = 48271;
                p.c = 0;
                p.m = 2147483647;
            }
            AlgorithmId::Carbon => {
                p.a = 16807;
                p.c = 0;
                p.m = 2147483647;
                p.seed = 3;
            }
            AlgorithmId::Ggl => {
                p.a = 16807;
                p.c = 0;
                p.m = 2147483647;
            }
            AlgorithmId::Mwc64x => p.seed = 1234567890,
            AlgorithmId::WichmannHill => {
                p.seed = 100;
                p.seed2 = 200;
                p.seed3 = 300;
            }
            AlgorithmId::Tausworthe => {
                p.seed2 = 67890;
                p.seed3 = 54321;
            }
            AlgorithmId::Lfsr8 => {
                p.seed = 0x1F;
                p.hex_tap = "1D".to_string();
            }
            AlgorithmId::Lfsr16 => {
                p.seed = 0xACE1;
                p.hex_tap = "B400".to_string();
            }
            AlgorithmId::Lfsr32 => {
                p.seed = 0x12345678;
                p.hex_tap = "80200003".to_string();
            }
            AlgorithmId::Lfsr64 => {
                p.string_seed = "1234567890123456789".to_string();
                p.hex_tap = "D800000000000000".to_string();
            }
            AlgorithmId::Xorshift32 | AlgorithmId::Xorshift1024 => p.seed = 123456789,
            AlgorithmId::Xoroshiro128Plus => {
                p.seed = 123456789;
                p.seed2 = 987654321;
            }
            AlgorithmId::Xoroshiro128PlusPlus => {
                p.seed = 123;
                p.seed2 = 456;
            }
            AlgorithmId::Xoroshiro256PlusPlus => {
                p.seed = 123;
                p.seed2 = 456;
                p.seed3 = 789;
                p.seed4 = 101112;
            }
            AlgorithmId::SplitMix64 => p.seed = 1234567890,
            AlgorithmId::Mulberry32 => p.seed = 12345,
            AlgorithmId::Sfc32 => {
                p.seed = 1;
                p.seed2 = 2;
                p.seed3 = 3;
            }
            AlgorithmId::PcgXshRr => {
                p.seed = 42;
                p.seed2 = 54;
            }
            AlgorithmId::PcgMcg => p.seed = 123456789 | 1,
            AlgorithmId::PcgSpc | AlgorithmId::PcgRxsMXs => {
                p.seed = 123456789;
                p.seed2 = 1442695040888963407 | 1;
            }
            AlgorithmId::PcgXslRr => {
                p.seed = 123456789;
                p.seed2 = 987654321;
            }
            AlgorithmId::Mt19937 => p.seed = 5489,
            AlgorithmId::Rdrand | AlgorithmId::Rdseed => {}
            AlgorithmId::Logistic => {
                p.float_seed = 0.5;
                p.param_r = 3.99;
            }
            AlgorithmId::Tent => {
                p.float_seed = 0.4;
                p.param_r = 1.99;
            }
            AlgorithmId::Henon => {
                p.float_seed = 0.1;
                p.param_a = 1.4;
                p.param_b = 0.3;
            }
            AlgorithmId::Ikeda => {
                p.float_seed = 0.1;
                p.param_a = 0.9;
            }
            AlgorithmId::Lorenz => {
                p.float_seed = 0.1;
                p.param_a = 10.0;
                p.param_b = 28.0;
                p.param_c = 2.66;
                p.param_dt = 0.01;
            }
            AlgorithmId::Rossler => {
                p.float_seed = 0.1;
                p.param_a = 0.2;
                p.param_b = 0.2;
                p.param_c = 5.7;
                p.param_dt = 0.05;
            }
            AlgorithmId::Rule30 => p.seed = 123456,
            AlgorithmId::Fibonacci => {}
            AlgorithmId::LaggedFibonacci => {
                p.seed = 12345;
                p.m = 1000;
            }
            AlgorithmId::MiddleSquare => p.seed = 12345,
        }
        p
    }
}

/// A complete generator configuration: algorithm plus parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub algorithm: AlgorithmId,
    pub params: Params,
}

impl GeneratorConfig {
    /// Builds a configuration with the algorithm's canonical defaults.
    pub fn with_defaults(algorithm: AlgorithmId) -> Self {
        GeneratorConfig {
            algorithm,
            params: Params::defaults_for(algorithm),
        }
    }
}
