//! Pure parameter validation.
//!
//! [`validate`] maps a configuration to a list of field-scoped errors; an
//! empty list means the configuration is valid. It never fails and has no
//! side effects, so callers re-run it after every parameter change. It is
//! the single source of truth the engine consults before initializing a
//! generator, and the gate the secure randomizer checks its output against.

use serde::{Deserialize, Serialize};

use crate::config::{AlgorithmId, GeneratorConfig};
use crate::utils::arith::{gcd, is_hex_string};

/// The parameter a validation error is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ParamField {
    Count,
    A,
    M,
    Seed,
    Seed2,
    Seed3,
    FloatSeed,
    ParamR,
    HexTap,
    StringSeed,
}

/// One field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: ParamField,
    pub message: String,
}

/// Collects at most one error per field; a later rule for the same field
/// replaces the earlier message (the coprimality warning overrides the
/// plain range check on `a`).
#[derive(Default)]
struct Report {
    errors: Vec<ValidationError>,
}

impl Report {
    fn set(&mut self, field: ParamField, message: &str) {
        if let Some(existing) = self.errors.iter_mut().find(|e| e.field == field) {
            existing.message = message.to_string();
        } else {
            self.errors.push(ValidationError {
                field,
                message: message.to_string(),
            });
        }
    }
}

/// Validates a configuration against the rules of its algorithm.
///
/// # Returns
/// Field-scoped errors; empty means valid. Fields the algorithm does not
/// use are never reported.
pub fn validate(config: &GeneratorConfig) -> Vec<ValidationError> {
    let mut report = Report::default();
    let id = config.algorithm;
    let p = &config.params;

    if p.count <= 0 {
        report.set(ParamField::Count, "Count must be a positive integer.");
    }

    if id.is_lcg_family() {
        if p.m <= 0 {
            report.set(ParamField::M, "Modulus (m) must be > 0.");
        }
        if p.a < 0 {
            report.set(ParamField::A, "Multiplier (a) must be >= 0.");
        }
        // Full-period requirement for multiplicative LCGs.
        if p.c == 0 && gcd(p.a, p.m) != 1 {
            report.set(
                ParamField::A,
                "Warning: When c=0, 'a' and 'm' should be coprime.",
            );
        }
        if id.is_multiplicative_lcg() && p.seed == 0 {
            report.set(
                ParamField::Seed,
                "For Multiplicative LCGs (c=0), the Seed must not be 0.",
            );
        }
    }

    match id {
        AlgorithmId::Xorshift32 => {
            if p.seed == 0 {
                report.set(ParamField::Seed, "Xorshift seed must not be 0.");
            }
        }
        AlgorithmId::Xorshift1024 => {
            if p.seed == 0 {
                report.set(ParamField::Seed, "Master seed cannot be 0.");
            }
        }
        AlgorithmId::Tausworthe => {
            if p.seed < 128 {
                report.set(ParamField::Seed, "Seed 1 must be >= 128.");
            }
            if p.seed2 < 128 {
                report.set(ParamField::Seed2, "Seed 2 must be >= 128.");
            }
            if p.seed3 < 128 {
                report.set(ParamField::Seed3, "Seed 3 must be >= 128.");
            }
        }
        _ => {}
    }

    if id.is_lfsr() {
        // The all-zero register is absorbing; validation keeps it out
        // rather than patching it at runtime.
        if id != AlgorithmId::Lfsr64 && p.seed == 0 {
            report.set(ParamField::Seed, "LFSR seed cannot be 0.");
        }
        if !is_hex_string(&p.hex_tap) {
            report.set(ParamField::HexTap, "Tap mask must be a valid Hex string.");
        }
        if id == AlgorithmId::Lfsr64 {
            let digits_only = p.string_seed.bytes().all(|b| b.is_ascii_digit());
            match p.string_seed.parse::<u64>() {
                Ok(0) => report.set(ParamField::StringSeed, "LFSR64 seed must be non-zero."),
                Ok(_) if digits_only => {}
                _ if p.string_seed.is_empty() => {
                    report.set(ParamField::StringSeed, "LFSR64 seed must be non-zero.");
                }
                _ => report.set(
                    ParamField::StringSeed,
                    "LFSR64 seed must be a decimal integer that fits in 64 bits.",
                ),
            }
        }
    }

    match id {
        AlgorithmId::PcgMcg => {
            if p.seed % 2 == 0 {
                report.set(ParamField::Seed, "PCG-MCG state must be odd.");
            }
        }
        AlgorithmId::PcgSpc | AlgorithmId::PcgRxsMXs => {
            if p.seed2 % 2 == 0 {
                report.set(ParamField::Seed2, "Increment must be odd for full period.");
            }
        }
        _ => {}
    }

    match id {
        AlgorithmId::Logistic | AlgorithmId::Tent => {
            if p.float_seed <= 0.0 || p.float_seed >= 1.0 {
                report.set(
                    ParamField::FloatSeed,
                    "Initial state must be strictly between 0.0 and 1.0.",
                );
            }
        }
        _ => {}
    }
    if id == AlgorithmId::Logistic && !(2.0..=4.0).contains(&p.param_r) {
        report.set(
            ParamField::ParamR,
            "Logistic Map r should be between 2.0 and 4.0.",
        );
    }
    if id == AlgorithmId::Tent && !(1.0..=2.0).contains(&p.param_r) {
        report.set(
            ParamField::ParamR,
            "Tent Map mu should be between 1.0 and 2.0.",
        );
    }

    report.errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeneratorConfig, Params};

    fn config(id: AlgorithmId) -> GeneratorConfig {
        GeneratorConfig::with_defaults(id)
    }

    fn fields(errors: &[ValidationError]) -> Vec<ParamField> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_default_lcg_is_valid() {
        assert!(validate(&config(AlgorithmId::Lcg)).is_empty());
    }

    #[test]
    fn test_count_must_be_positive() {
        let mut c = config(AlgorithmId::Lcg);
        c.params.count = 0;
        assert_eq!(fields(&validate(&c)), vec![ParamField::Count]);
        c.params.count = -5;
        assert_eq!(fields(&validate(&c)), vec![ParamField::Count]);
    }

    #[test]
    fn test_lcg_rejects_zero_modulus() {
        let mut c = config(AlgorithmId::Lcg);
        c.params.m = 0;
        let errors = validate(&c);
        assert!(fields(&errors).contains(&ParamField::M));
    }

    #[test]
    fn test_lcg_rejects_negative_multiplier() {
        let mut c = config(AlgorithmId::Lcg);
        c.params.a = -1;
        assert!(fields(&validate(&c)).contains(&ParamField::A));
    }

    #[test]
    fn test_multiplicative_coprimality_overrides() {
        // c=0 with gcd(a, m) != 1 reports on 'a', replacing any earlier
        // message for the same field.
        let mut c = config(AlgorithmId::Lcg);
        c.params.c = 0;
        c.params.a = 6;
        c.params.m = 9;
        let errors = validate(&c);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, ParamField::A);
        assert!(errors[0].message.contains("coprime"));
    }

    #[test]
    fn test_multiplicative_lcg_needs_nonzero_seed() {
        for id in [AlgorithmId::Minstd, AlgorithmId::Carbon, AlgorithmId::Ggl] {
            let mut c = config(id);
            c.params.seed = 0;
            assert!(
                fields(&validate(&c)).contains(&ParamField::Seed),
                "{:?}",
                id
            );
        }
    }

    #[test]
    fn test_xorshift_rejects_zero_seed() {
        let mut c = config(AlgorithmId::Xorshift32);
        c.params.seed = 0;
        assert_eq!(fields(&validate(&c)), vec![ParamField::Seed]);
        let mut c = config(AlgorithmId::Xorshift1024);
        c.params.seed = 0;
        assert_eq!(fields(&validate(&c)), vec![ParamField::Seed]);
    }

    #[test]
    fn test_tausworthe_floor() {
        let mut c = config(AlgorithmId::Tausworthe);
        c.params.seed = 127;
        c.params.seed2 = 127;
        c.params.seed3 = 127;
        assert_eq!(
            fields(&validate(&c)),
            vec![ParamField::Seed, ParamField::Seed2, ParamField::Seed3]
        );
    }

    #[test]
    fn test_lfsr_zero_seed_and_bad_tap() {
        let mut c = config(AlgorithmId::Lfsr16);
        c.params.seed = 0;
        c.params.hex_tap = "ZZZZ".to_string();
        let f = fields(&validate(&c));
        assert!(f.contains(&ParamField::Seed));
        assert!(f.contains(&ParamField::HexTap));
    }

    #[test]
    fn test_lfsr64_string_seed() {
        let mut c = config(AlgorithmId::Lfsr64);
        c.params.string_seed = "0".to_string();
        assert!(fields(&validate(&c)).contains(&ParamField::StringSeed));
        c.params.string_seed = String::new();
        assert!(fields(&validate(&c)).contains(&ParamField::StringSeed));
        // Zero integer seed field is not an error for the 64-bit variant.
        c.params.string_seed = "42".to_string();
        c.params.seed = 0;
        assert!(validate(&c).is_empty());
    }

    #[test]
    fn test_lfsr64_string_seed_must_be_decimal_u64() {
        let mut c = config(AlgorithmId::Lfsr64);
        for bad in ["abc", "12x4", "+5", "-1", " 42", "99999999999999999999"] {
            c.params.string_seed = bad.to_string();
            let errors = validate(&c);
            assert_eq!(fields(&errors), vec![ParamField::StringSeed], "{bad:?}");
            assert!(errors[0].message.contains("decimal"), "{bad:?}");
        }
        // Padded zero is still the zero register.
        c.params.string_seed = "000".to_string();
        let errors = validate(&c);
        assert!(errors[0].message.contains("non-zero"));

        c.params.string_seed = u64::MAX.to_string();
        assert!(validate(&c).is_empty());
    }

    #[test]
    fn test_pcg_oddness_rules() {
        let mut c = config(AlgorithmId::PcgMcg);
        c.params.seed = 4;
        assert_eq!(fields(&validate(&c)), vec![ParamField::Seed]);

        for id in [AlgorithmId::PcgSpc, AlgorithmId::PcgRxsMXs] {
            let mut c = config(id);
            c.params.seed2 = 8;
            assert_eq!(fields(&validate(&c)), vec![ParamField::Seed2], "{:?}", id);
        }
    }

    #[test]
    fn test_chaotic_open_interval() {
        let mut c = config(AlgorithmId::Logistic);
        c.params.float_seed = 0.0;
        assert!(fields(&validate(&c)).contains(&ParamField::FloatSeed));
        c.params.float_seed = 1.0;
        assert!(fields(&validate(&c)).contains(&ParamField::FloatSeed));
        c.params.float_seed = 0.5;
        assert!(validate(&c).is_empty());
    }

    #[test]
    fn test_chaotic_parameter_ranges() {
        let mut c = config(AlgorithmId::Logistic);
        c.params.param_r = 4.5;
        assert!(fields(&validate(&c)).contains(&ParamField::ParamR));

        let mut c = config(AlgorithmId::Tent);
        c.params.param_r = 0.5;
        assert!(fields(&validate(&c)).contains(&ParamField::ParamR));
        c.params.param_r = 2.0;
        assert!(validate(&c).is_empty());
    }

    #[test]
    fn test_numerical_recipes_tuple_accepted() {
        let mut c = config(AlgorithmId::Lcg);
        c.params = Params {
            a: 1664525,
            c: 1013904223,
            m: 4294967296,
            ..c.params
        };
        assert!(validate(&c).is_empty());
    }
}
