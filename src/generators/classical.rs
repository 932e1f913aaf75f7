//! Classical and historical generators: the plain Fibonacci sequence,
//! the subtractive lagged Fibonacci generator, von Neumann's middle
//! square, and the Rule 30 cellular automaton.

use crate::config::Params;
use crate::generators::modern::SplitMix64Stream;
use crate::generators::Generator;

/// Plain Fibonacci recurrence. The accumulator is `i128`, so the sum
/// stays exact far past 64-bit range; terms beyond 2^53 lose precision
/// only at the `f64` display boundary. The addition wraps rather than
/// panics once even `i128` runs out.
pub(crate) struct Fibonacci {
    f1: i128,
    f2: i128,
}

impl Fibonacci {
    pub(crate) fn new(params: &Params) -> Self {
        Fibonacci {
            f1: params.fib_seed1 as i128,
            f2: params.fib_seed2 as i128,
        }
    }
}

impl Generator for Fibonacci {
    fn next(&mut self) -> f64 {
        let out = self.f1;
        let sum = self.f1.wrapping_add(self.f2);
        self.f1 = self.f2;
        self.f2 = sum;
        out as f64
    }
}

/// Additive lagged Fibonacci generator with lags (24, 55), reduced
/// modulo `m`. The 55-entry history ring is bootstrapped from the
/// master seed through SplitMix64.
pub(crate) struct LaggedFibonacci {
    history: [i64; 55],
    pos: usize,
    m: i64,
}

const LAG_SHORT: usize = 24;
const LAG_LONG: usize = 55;

impl LaggedFibonacci {
    pub(crate) fn new(params: &Params) -> Self {
        let m = if params.m > 0 { params.m } else { 1 };
        let mut stream = SplitMix64Stream::new(params.seed as u64);
        let mut history = [0i64; LAG_LONG];
        for slot in history.iter_mut() {
            *slot = (stream.next_u64() % m as u64) as i64;
        }
        LaggedFibonacci {
            history,
            pos: 0,
            m,
        }
    }
}

impl Generator for LaggedFibonacci {
    fn next(&mut self) -> f64 {
        // x[n] = (x[n-24] + x[n-55]) mod m; the ring holds the last 55 terms.
        let a = self.history[(self.pos + LAG_LONG - LAG_SHORT) % LAG_LONG];
        let out = self.history[self.pos];
        // Sum in i128: two entries just under i64::MAX overflow an i64 add.
        self.history[self.pos] = ((a as i128 + out as i128).rem_euclid(self.m as i128)) as i64;
        self.pos = (self.pos + 1) % LAG_LONG;
        out as f64
    }
}

/// Von Neumann's middle square. The digit width is taken from the seed,
/// clamped to 4..=8 digits, and kept fixed for the run.
pub(crate) struct MiddleSquare {
    value: u64,
    digits: usize,
}

impl MiddleSquare {
    pub(crate) fn new(params: &Params) -> Self {
        let seed = params.seed.unsigned_abs();
        let digits = seed.to_string().len().clamp(4, 8);
        // Truncate to the digit width so the square always fits in u64.
        MiddleSquare {
            value: seed % 10u64.pow(digits as u32),
            digits,
        }
    }
}

impl Generator for MiddleSquare {
    fn next(&mut self) -> f64 {
        let square = format!("{:0width$}", self.value * self.value, width = 2 * self.digits);
        let start = (square.len() - self.digits) / 2;
        let middle = &square[start..start + self.digits];
        // The slice is all ASCII digits by construction.
        self.value = middle.parse::<u64>().unwrap_or(0);
        self.value as f64
    }
}

/// Rule 30 cellular automaton on a 64-cell circular row. Each step
/// emits the low 32 cells of the current row as an integer, then
/// applies `left XOR (center OR right)` to every cell at once.
pub(crate) struct Rule30 {
    row: u64,
}

impl Rule30 {
    pub(crate) fn new(params: &Params) -> Self {
        let seed = params.seed as u64;
        Rule30 {
            row: if seed == 0 { 1 << 32 } else { seed },
        }
    }
}

impl Generator for Rule30 {
    fn next(&mut self) -> f64 {
        let out = self.row & 0xFFFF_FFFF;
        let left = self.row.rotate_left(1);
        let right = self.row.rotate_right(1);
        self.row = left ^ (self.row | right);
        out as f64
    }
}
