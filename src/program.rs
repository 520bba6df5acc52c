// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The assembled generation pipeline.
//!
//! ```text
//! Catalogue ──▶ StateClass ──▶ RotationEntry ─┐
//!     │                                       ├──▶ LookupLayer
//!     └──▶ universe ──▶ Partition ────────────┘
//!              │
//!              └──▶ @All ──▶ @skip
//! ```
//!
//! A [`Program`] is built once per run and never mutated. Turning it into text
//! is [`crate::compile`]'s job.

use std::collections::HashSet;

use crate::catalogue::{Catalogue, Glyph, StateClass};
use crate::config::{ConfigError, GeneratorConfig};
use crate::lookup::{build_lookup_chain, rule_count, LookupLayer};
use crate::partition::{partition_glyphs, Partition};
use crate::rng::SeededRandom;
use crate::rotation::{build_rotations, RotationEntry};

/// Name of the catch-all class.
pub const ALL_CLASS: &str = "@All";

/// Name of the skip class.
pub const SKIP_CLASS: &str = "@skip";

/// Every glyph of the universe, de-duplicated in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatchAllClass {
    pub glyphs: Vec<Glyph>,
}

impl CatchAllClass {
    pub fn from_universe(universe: &[Glyph]) -> Self {
        let mut seen = HashSet::with_capacity(universe.len());
        let glyphs = universe
            .iter()
            .filter(|glyph| seen.insert(glyph.as_str()))
            .cloned()
            .collect();
        Self { glyphs }
    }
}

/// `@skip = [@All];`, the "any glyph" term of the lookahead padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkipClass;

/// Everything the feature block declares, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub states: Vec<StateClass>,
    pub rotations: Vec<RotationEntry>,
    pub partitions: Vec<Partition>,
    pub all: CatchAllClass,
    pub skip: SkipClass,
    /// Shallowest layer first. Emit with [`crate::lookup::emission_order`].
    pub layers: Vec<LookupLayer>,
    /// Size of the glyph universe the partitions were drawn from.
    pub universe_len: usize,
}

impl Program {
    /// Validate the configuration and run the whole pipeline.
    pub fn build(catalogue: &Catalogue, config: &GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate(catalogue)?;

        let states = catalogue.state_classes();
        let class_names: Vec<String> = states.iter().map(StateClass::name).collect();
        let rotations = build_rotations(&class_names);

        let universe = catalogue.universe();
        let mut rng = SeededRandom::new(config.seed);
        let partitions = partition_glyphs(&universe, config.partitions, &mut rng);

        let all = CatchAllClass::from_universe(&universe);
        let layers = build_lookup_chain(&rotations, &partitions, SKIP_CLASS, config.depth);

        Ok(Self {
            states,
            rotations,
            partitions,
            all,
            skip: SkipClass,
            layers,
            universe_len: universe.len(),
        })
    }

    pub fn rule_count(&self) -> usize {
        rule_count(&self.layers)
    }

    /// Glyphs assigned to any partition.
    pub fn partitioned_count(&self) -> usize {
        self.partitions.iter().map(Partition::len).sum()
    }

    /// Universe slots left out of every partition.
    pub fn dropped_count(&self) -> usize {
        self.universe_len - self.partitioned_count()
    }
}
