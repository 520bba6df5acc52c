// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the pseudocalt generator arithmetic.
//!
//! This standalone crate extracts the LCG recurrence and the partition
//! sizing arithmetic and proves them with Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No overflow**: one recurrence step never overflows for any `u32` seed
//! 2. **State bound**: every state after the first step is below `MODULUS`
//! 3. **Draw bound**: `randrange(n)` is always in `[0, n)`
//! 4. **Sizing**: partitions never consume more glyphs than exist, and drop
//!    fewer than `k`
//! 5. **Successor**: the rotation successor stays in range and wraps to 0

/// LCG multiplier.
pub const MULTIPLIER: u64 = 9301;

/// LCG increment.
pub const INCREMENT: u64 = 49297;

/// LCG modulus.
pub const MODULUS: u64 = 233_280;

// ============================================================================
// GENERATOR ARITHMETIC (copied from src/rng.rs, src/partition.rs, src/rotation.rs)
// ============================================================================

/// One step of the recurrence.
pub fn step(state: u64) -> u64 {
    (state * MULTIPLIER + INCREMENT) % MODULUS
}

/// Draw in `[0, n)` from an already-advanced state.
pub fn draw(state: u64, n: usize) -> usize {
    let fraction = state as f64 / MODULUS as f64;
    (fraction * n as f64).floor() as usize
}

/// Glyphs placed into `k` partitions of a `total`-glyph universe.
pub fn assigned_count(total: usize, k: usize) -> usize {
    if k == 0 {
        0
    } else {
        (total / k) * k
    }
}

pub fn successor(index: usize, len: usize) -> usize {
    (index + 1) % len
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// The first step takes a raw `u32` seed; the product must fit.
    #[kani::proof]
    fn verify_step_no_overflow() {
        let seed: u32 = kani::any();
        let next = step(u64::from(seed));
        kani::assert(next < MODULUS, "step must reduce below MODULUS");
    }

    /// State and product stay below 2^53, so the f64 division is exact.
    #[kani::proof]
    fn verify_state_exact_in_f64() {
        let seed: u32 = kani::any();
        let product = u64::from(seed) * MULTIPLIER + INCREMENT;
        kani::assert(product < (1u64 << 53), "product must be exact in f64");
    }

    /// Every draw lands in `[0, n)`.
    #[kani::proof]
    fn verify_draw_in_range() {
        let state: u64 = kani::any_where(|&s| s < MODULUS);
        let n: usize = kani::any_where(|&n| n > 0 && n <= 1 << 20);
        let value = draw(state, n);
        kani::assert(value < n, "draw must be below n");
    }

    /// Partition sizing never overdraws and drops fewer than `k` glyphs.
    #[kani::proof]
    fn verify_assigned_count_bounds() {
        let total: usize = kani::any_where(|&t| t <= 1 << 16);
        let k: usize = kani::any_where(|&k| k > 0 && k <= 1 << 10);
        let assigned = assigned_count(total, k);
        kani::assert(assigned <= total, "cannot assign more glyphs than exist");
        kani::assert(total - assigned < k, "remainder must be below k");
        kani::assert(assigned % k == 0, "partitions must be equal sized");
    }

    /// Successor stays in range and the last state wraps to the first.
    #[kani::proof]
    fn verify_successor_wraps() {
        let len: usize = kani::any_where(|&l| l > 0 && l <= 1 << 16);
        let index: usize = kani::any_where(|&i| i < len);
        let next = successor(index, len);
        kani::assert(next < len, "successor must stay in range");
        if index == len - 1 {
            kani::assert(next == 0, "last state must wrap to the first");
        }
    }
}
