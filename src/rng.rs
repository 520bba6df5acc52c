// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Seeded linear congruential generator.
//!
//! The partitioner needs draws that reproduce bit-for-bit across runs, machines
//! and languages, so this is the classic `(s * 9301 + 49297) mod 233280`
//! recurrence rather than anything from an RNG crate. Every font built from the
//! same seed gets the same partitions, and therefore the same feature code.
//!
//! With a `u32` seed the largest intermediate product is below 2^53, so the
//! `f64` division in [`SeededRandom::next_f64`] is exact and matches what a
//! double-precision implementation of the same recurrence would produce.

/// LCG multiplier.
pub const MULTIPLIER: u64 = 9301;

/// LCG increment.
pub const INCREMENT: u64 = 49297;

/// LCG modulus. Every draw is `state / MODULUS`.
pub const MODULUS: u64 = 233_280;

/// Deterministic sequence generator.
///
/// Owned by exactly one partitioner run. Cloning forks the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed),
        }
    }

    /// Current internal state (the last value produced by the recurrence).
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance the recurrence and return a fraction in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Draw an integer in `[0, n)` as `floor(next * n)`.
    ///
    /// `n` must be positive. Callers never draw from an empty range.
    pub fn randrange(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "randrange called with an empty range");
        (self.next_f64() * n as f64).floor() as usize
    }
}

impl Iterator for SeededRandom {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}
