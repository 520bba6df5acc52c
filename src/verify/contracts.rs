// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-build contracts for the generation pipeline.
//!
//! Every check here is a `debug_assert!`: free in release builds, loud in tests.
//! The builders call them on their own output right before returning it.
//!
//! | Contract                    | Property                                        |
//! |-----------------------------|-------------------------------------------------|
//! | `check_partitions_disjoint` | partitions draw each universe slot at most once |
//! | `check_layer_shape`         | `depth` layers of one rule per rotation         |

use std::collections::HashMap;

use crate::catalogue::Glyph;
use crate::lookup::LookupLayer;
use crate::partition::Partition;
use crate::rng::{INCREMENT, MODULUS, MULTIPLIER};

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

/// The first step from any `u32` seed must stay exact in `f64` arithmetic,
/// otherwise draws would diverge from a double-precision implementation.
const _: () = {
    const MAX_FIRST_STEP: u64 = (u32::MAX as u64) * MULTIPLIER + INCREMENT;
    const MAX_STEADY_STEP: u64 = (MODULUS - 1) * MULTIPLIER + INCREMENT;
    const F64_EXACT: u64 = 1 << 53;
    assert!(MAX_FIRST_STEP < F64_EXACT);
    assert!(MAX_STEADY_STEP < F64_EXACT);
};

// ============================================================================
// PARTITION CONTRACTS
// ============================================================================

/// Check that partitions use each universe slot at most once.
///
/// With a duplicate-free universe this is plain disjointness. Duplicated
/// glyphs may appear as often as they occur in the universe.
///
/// # Panics (debug builds only)
/// Panics if some glyph is assigned more often than the universe holds it.
#[inline]
pub fn check_partitions_disjoint(partitions: &[Partition], universe: &[Glyph]) {
    if !cfg!(debug_assertions) {
        return;
    }

    let mut available: HashMap<&str, usize> = HashMap::new();
    for glyph in universe {
        *available.entry(glyph.as_str()).or_insert(0) += 1;
    }

    for partition in partitions {
        for glyph in &partition.glyphs {
            let remaining = available.entry(glyph.as_str()).or_insert(0);
            debug_assert!(
                *remaining > 0,
                "Contract violation: Partition.Disjoint - '{}' in {} exceeds its universe count",
                glyph,
                partition.name()
            );
            *remaining = remaining.saturating_sub(1);
        }
    }
}

// ============================================================================
// LOOKUP CONTRACTS
// ============================================================================

/// Check that the lookup chain has `depth` layers of `rotations` rules.
///
/// # Panics (debug builds only)
/// Panics on a missing layer, a misnumbered layer, or a short layer.
#[inline]
pub fn check_layer_shape(layers: &[LookupLayer], depth: usize, rotations: usize) {
    debug_assert_eq!(
        layers.len(),
        depth,
        "Contract violation: LookupChain.Shape - {} layers for depth {}",
        layers.len(),
        depth
    );
    for (d, layer) in layers.iter().enumerate() {
        debug_assert_eq!(
            layer.depth, d,
            "Contract violation: LookupChain.Shape - layer {} labelled depth {}",
            d, layer.depth
        );
        debug_assert_eq!(
            layer.rules.len(),
            rotations,
            "Contract violation: LookupChain.Shape - layer {} has {} rules, expected {}",
            d,
            layer.rules.len(),
            rotations
        );
    }
}
