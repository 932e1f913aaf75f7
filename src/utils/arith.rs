//! Small numeric helpers shared across the generator families:
//! gcd for the coprimality checks, hex tap parsing for the LFSRs, and
//! decimal display rounding for the chaotic maps.

/// Computes the greatest common divisor of two integers (Euclidean).
///
/// Operates on absolute values; `gcd(0, 0) == 0`.
///
/// # Parameters
/// - `a`, `b`: The two operands.
///
/// # Returns
/// The non-negative GCD.
pub fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a as i64
}

/// Parses a tap mask supplied as a bare hexadecimal string (no `0x`).
///
/// Returns `None` when the string is empty, longer than 16 digits, or
/// contains a non-hex character. Validation rejects such masks before
/// generation reaches this parser.
pub fn parse_hex_tap(hex: &str) -> Option<u64> {
    if hex.is_empty() || hex.len() > 16 {
        return None;
    }
    u64::from_str_radix(hex, 16).ok()
}

/// Returns true when every character of `s` is a hexadecimal digit.
pub fn is_hex_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Rounds a float to `digits` decimal places for display.
///
/// Chaotic maps emit rounded values while the feedback loop keeps full
/// f64 precision internally. Non-finite inputs pass through unchanged so
/// numeric anomalies stay observable.
pub fn round_display(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
