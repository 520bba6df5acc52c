// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Depth-chained contextual substitution rules.
//!
//! Each layer `d` holds one rule per rotation. A rule reads "if the glyph `d + 1`
//! positions back is in partition P, move this glyph from state i to state i+1":
//!
//! ```text
//! lookup skip2_partition1 {
//!     sub @partition2 @skip @skip @state1' by @state2;
//! } skip2_partition1;
//! ```
//!
//! The skip terms match any glyph (`@skip = [@All]`), so deeper layers look
//! further back before the partition test applies.
//!
//! # Context selection
//!
//! Transition `i` uses `partitions[P - 1 - (i % P)]`, counting from the last
//! partition. The reversal decides which random subset gates which transition,
//! so changing it changes every generated font.
//!
//! # Emission order
//!
//! Layers are built shallow-to-deep but must be emitted deep-to-shallow
//! ([`emission_order`]). Within a layer, rules keep transition order.

use crate::partition::Partition;
use crate::rotation::{transition_pairs, RotationEntry};
use crate::verify::contracts::check_layer_shape;

/// One contextual substitution, named `skip{depth}_partition{transition}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRule {
    pub depth: usize,
    pub transition: usize,
    /// Name of the context partition.
    pub context: String,
    /// Name of the skip class, repeated `depth` times.
    pub skip: String,
    pub from: String,
    pub to: String,
}

impl LookupRule {
    pub fn name(&self) -> String {
        format!("skip{}_partition{}", self.depth, self.transition)
    }

    /// The skip prefix, one term per skipped position.
    pub fn skip_terms(&self) -> impl Iterator<Item = &str> {
        std::iter::repeat(self.skip.as_str()).take(self.depth)
    }
}

/// All rules sharing one lookahead distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupLayer {
    pub depth: usize,
    pub rules: Vec<LookupRule>,
}

/// Index of the context partition for a transition.
///
/// `partition_count` must be positive.
#[inline]
pub fn context_partition_index(transition: usize, partition_count: usize) -> usize {
    partition_count - 1 - (transition % partition_count)
}

/// Build `depth` layers of rules, one rule per rotation in each layer.
///
/// Yields no layers when there are no rotations or no partitions to draw
/// contexts from.
pub fn build_lookup_chain(
    rotations: &[RotationEntry],
    partitions: &[Partition],
    skip_name: &str,
    depth: usize,
) -> Vec<LookupLayer> {
    if rotations.is_empty() || partitions.is_empty() {
        return Vec::new();
    }

    let pairs = transition_pairs(rotations);
    let layers: Vec<LookupLayer> = (0..depth)
        .map(|d| LookupLayer {
            depth: d,
            rules: pairs
                .iter()
                .enumerate()
                .map(|(i, (from, to))| LookupRule {
                    depth: d,
                    transition: i,
                    context: partitions[context_partition_index(i, partitions.len())].name(),
                    skip: skip_name.to_string(),
                    from: from.clone(),
                    to: to.clone(),
                })
                .collect(),
        })
        .collect();

    check_layer_shape(&layers, depth, rotations.len());
    layers
}

/// Layers in the order they must appear in the feature: deepest first.
pub fn emission_order(layers: &[LookupLayer]) -> impl Iterator<Item = &LookupLayer> {
    layers.iter().rev()
}

/// Total rule count across layers.
pub fn rule_count(layers: &[LookupLayer]) -> usize {
    layers.iter().map(|layer| layer.rules.len()).sum()
}
