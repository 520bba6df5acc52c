// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rotated class-name aliases that drive state transitions.
//!
//! For `n` state classes there are `n` rotations. Rotation `i` lists every class
//! name starting at class `i` and wrapping around:
//!
//! ```text
//! @state0 = [@transformation0 @transformation1 @transformation2];
//! @state1 = [@transformation1 @transformation2 @transformation0];
//! @state2 = [@transformation2 @transformation0 @transformation1];
//! ```
//!
//! Substituting `@state{i}` by `@state{i+1}` maps every class onto its follower
//! in one rule, and following successors `n` times returns to the start.

/// A class alias listing all class names, rotated left by `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationEntry {
    pub index: usize,
    pub classes: Vec<String>,
}

impl RotationEntry {
    /// `@state{index}`
    pub fn name(&self) -> String {
        format!("@state{}", self.index)
    }
}

/// Build one rotation per class name.
pub fn build_rotations(class_names: &[String]) -> Vec<RotationEntry> {
    (0..class_names.len())
        .map(|index| {
            let mut classes = class_names.to_vec();
            classes.rotate_left(index);
            RotationEntry { index, classes }
        })
        .collect()
}

/// Index of the rotation that follows `index` in a cycle of length `len`.
#[inline]
pub fn successor(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// `(from, to)` rotation-name pairs, one per rotation, closing the cycle.
pub fn transition_pairs(rotations: &[RotationEntry]) -> Vec<(String, String)> {
    rotations
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let next = &rotations[successor(position, rotations.len())];
            (entry.name(), next.name())
        })
        .collect()
}
