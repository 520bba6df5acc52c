// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random partitions of the glyph universe.
//!
//! Partitions are the lookahead contexts that trigger a transition. Splitting
//! the universe into `k` random, disjoint subsets means a glyph changes state
//! only when the glyph before it falls in the right subset. That breaks up the
//! regular a-b-c-a-b-c rhythm a plain cycle would produce.
//!
//! # Algorithm
//!
//! Sampling without replacement, round-robin over partitions:
//!
//! ```text
//! group_size = total / k            (floor)
//! repeat group_size times:
//!     for each partition p in 0..k:
//!         i = rng.randrange(pool.len())
//!         p.push(pool.remove(i))     (order-preserving removal)
//! sort every partition
//! ```
//!
//! Exactly `k * group_size` glyphs are assigned. The `total % k` glyphs left in
//! the pool are dropped, and `k > total` gives `k` empty partitions. Both shapes
//! are part of the output contract for a given seed.
//!
//! Removal must keep pool order: the index drawn for the next slot is
//! interpreted against the shrunken pool, so a swap-remove would pick
//! different glyphs from the same draw sequence.

use crate::catalogue::Glyph;
use crate::rng::SeededRandom;
use crate::verify::contracts::check_partitions_disjoint;

/// A randomly assembled lookahead context, sorted for stable output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub index: usize,
    pub glyphs: Vec<Glyph>,
}

impl Partition {
    /// `@partition{index}`
    pub fn name(&self) -> String {
        format!("@partition{}", self.index)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Number of glyphs a `k`-way split of `total` slots actually assigns.
pub fn assigned_count(total: usize, k: usize) -> usize {
    if k == 0 {
        0
    } else {
        (total / k) * k
    }
}

/// Split `universe` into `k` disjoint partitions using draws from `rng`.
///
/// `k == 0` yields no partitions.
pub fn partition_glyphs(universe: &[Glyph], k: usize, rng: &mut SeededRandom) -> Vec<Partition> {
    if k == 0 {
        return Vec::new();
    }

    let mut pool: Vec<Glyph> = universe.to_vec();
    let group_size = pool.len() / k;
    let mut buckets: Vec<Vec<Glyph>> = vec![Vec::with_capacity(group_size); k];

    for _ in 0..group_size {
        for bucket in &mut buckets {
            if pool.is_empty() {
                break;
            }
            let index = rng.randrange(pool.len());
            bucket.push(pool.remove(index));
        }
    }

    let partitions: Vec<Partition> = buckets
        .into_iter()
        .enumerate()
        .map(|(index, mut glyphs)| {
            glyphs.sort();
            Partition { index, glyphs }
        })
        .collect();

    check_partitions_disjoint(&partitions, universe);
    partitions
}
