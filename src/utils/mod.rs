//! Shared helper utilities.

pub mod arith;
