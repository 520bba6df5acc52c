// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime invariant checks over catalogues, programs and compiled text.
//!
//! Generation itself never calls these. They back the `verify` subcommand and
//! the test suite, where a violated invariant should be reported, not panicked.
//!
//! | Check                    | Invariant                                           |
//! |--------------------------|-----------------------------------------------------|
//! | `validate_catalogue`     | classes are duplicate-free and pairwise disjoint    |
//! | `check_partitions`       | disjoint, sorted, `floor(total / k) * k` glyphs     |
//! | `check_rotation_cycle`   | successors form one cycle through every class       |
//! | `check_rule_count`       | `depth * classes` rules                             |
//! | `check_balanced`         | every `{` has exactly one matching `}`              |
//! | `check_deterministic`    | rebuilding gives byte-identical text                |

use std::collections::HashMap;
use std::fmt;

use crate::catalogue::Catalogue;
use crate::compile::compile_program;
use crate::config::{ConfigError, GeneratorConfig};
use crate::partition::assigned_count;
use crate::program::Program;
use crate::rotation::{transition_pairs, RotationEntry};

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A glyph appears twice within one state class.
    DuplicateGlyph { class: usize, glyph: String },
    /// A glyph belongs to two state classes.
    OverlappingClasses {
        glyph: String,
        first: usize,
        second: usize,
    },
    /// A glyph was assigned more often than the universe holds it.
    OverlappingPartitions { glyph: String, partition: usize },
    /// Partition members are not in lexicographic order.
    UnsortedPartition { partition: usize },
    /// Partitions hold the wrong number of glyphs in total.
    PartitionSizeMismatch { expected: usize, actual: usize },
    /// Following successors from `start` does not return after exactly `len` steps.
    OpenRotationCycle { start: usize, len: usize },
    /// Lookup rule count differs from `depth * classes`.
    RuleCountMismatch { expected: usize, actual: usize },
    /// Braces do not pair up.
    UnbalancedBlocks { openers: usize, closers: usize },
    /// Two builds of the same configuration produced different text.
    NonDeterministic { first_crc: u32, second_crc: u32 },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::DuplicateGlyph { class, glyph } => {
                write!(f, "glyph '{}' appears twice in class {}", glyph, class)
            }
            InvariantError::OverlappingClasses {
                glyph,
                first,
                second,
            } => {
                write!(
                    f,
                    "glyph '{}' belongs to classes {} and {}",
                    glyph, first, second
                )
            }
            InvariantError::OverlappingPartitions { glyph, partition } => {
                write!(
                    f,
                    "glyph '{}' in partition {} was already assigned",
                    glyph, partition
                )
            }
            InvariantError::UnsortedPartition { partition } => {
                write!(f, "partition {} is not sorted", partition)
            }
            InvariantError::PartitionSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "partitions hold {} glyphs, expected {}",
                    actual, expected
                )
            }
            InvariantError::OpenRotationCycle { start, len } => {
                write!(
                    f,
                    "rotation cycle from state {} does not close after {} steps",
                    start, len
                )
            }
            InvariantError::RuleCountMismatch { expected, actual } => {
                write!(f, "{} lookup rules, expected {}", actual, expected)
            }
            InvariantError::UnbalancedBlocks { openers, closers } => {
                write!(f, "{} block openers but {} closers", openers, closers)
            }
            InvariantError::NonDeterministic {
                first_crc,
                second_crc,
            } => {
                write!(
                    f,
                    "rebuild changed output: crc32 {:08x} vs {:08x}",
                    first_crc, second_crc
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check that state classes are duplicate-free and pairwise disjoint.
///
/// Context glyphs are not part of any class and are ignored.
pub fn validate_catalogue(catalogue: &Catalogue) -> Result<(), InvariantError> {
    let mut owner: HashMap<&str, usize> = HashMap::new();
    for (class, glyphs) in catalogue.class_glyphs().iter().enumerate() {
        for glyph in glyphs {
            if let Some(&first) = owner.get(glyph.as_str()) {
                return Err(if first == class {
                    InvariantError::DuplicateGlyph {
                        class,
                        glyph: glyph.clone(),
                    }
                } else {
                    InvariantError::OverlappingClasses {
                        glyph: glyph.clone(),
                        first,
                        second: class,
                    }
                });
            }
            owner.insert(glyph.as_str(), class);
        }
    }
    Ok(())
}

/// Check partition disjointness, ordering and total size against the universe.
pub fn check_partitions(program: &Program, catalogue: &Catalogue) -> Result<(), InvariantError> {
    let universe = catalogue.universe();
    let mut available: HashMap<&str, usize> = HashMap::new();
    for glyph in &universe {
        *available.entry(glyph.as_str()).or_insert(0) += 1;
    }

    for partition in &program.partitions {
        if partition.glyphs.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(InvariantError::UnsortedPartition {
                partition: partition.index,
            });
        }
        for glyph in &partition.glyphs {
            match available.get_mut(glyph.as_str()) {
                Some(count) if *count > 0 => *count -= 1,
                _ => {
                    return Err(InvariantError::OverlappingPartitions {
                        glyph: glyph.clone(),
                        partition: partition.index,
                    })
                }
            }
        }
    }

    let expected = assigned_count(universe.len(), program.partitions.len());
    let actual = program.partitioned_count();
    if expected != actual {
        return Err(InvariantError::PartitionSizeMismatch { expected, actual });
    }
    Ok(())
}

/// Check that successor links form a single closed cycle over all rotations.
pub fn check_rotation_cycle(rotations: &[RotationEntry]) -> Result<(), InvariantError> {
    let len = rotations.len();
    let next: HashMap<String, String> = transition_pairs(rotations).into_iter().collect();

    for (start, entry) in rotations.iter().enumerate() {
        let origin = entry.name();
        let mut current = origin.clone();
        for step in 1..=len {
            current = match next.get(&current) {
                Some(to) => to.clone(),
                None => return Err(InvariantError::OpenRotationCycle { start, len }),
            };
            let back_home = current == origin;
            if back_home != (step == len) {
                return Err(InvariantError::OpenRotationCycle { start, len });
            }
        }
    }
    Ok(())
}

pub fn check_rule_count(program: &Program, depth: usize) -> Result<(), InvariantError> {
    let expected = depth * program.rotations.len();
    let actual = program.rule_count();
    if expected == actual {
        Ok(())
    } else {
        Err(InvariantError::RuleCountMismatch { expected, actual })
    }
}

/// Check that braces pair up and never close before they open.
pub fn check_balanced(text: &str) -> Result<(), InvariantError> {
    let mut openers = 0usize;
    let mut closers = 0usize;
    for c in text.chars() {
        match c {
            '{' => openers += 1,
            '}' => {
                closers += 1;
                if closers > openers {
                    break;
                }
            }
            _ => {}
        }
    }
    if openers == closers {
        Ok(())
    } else {
        Err(InvariantError::UnbalancedBlocks { openers, closers })
    }
}

/// Build and compile twice; the texts must match byte for byte.
pub fn check_deterministic(
    catalogue: &Catalogue,
    config: &GeneratorConfig,
) -> Result<(), InvariantError> {
    let render = || {
        Program::build(catalogue, config)
            .map(|program| crc32fast::hash(compile_program(&program, config).as_bytes()))
            .unwrap_or_default()
    };
    let first_crc = render();
    let second_crc = render();
    if first_crc == second_crc {
        Ok(())
    } else {
        Err(InvariantError::NonDeterministic {
            first_crc,
            second_crc,
        })
    }
}

/// Outcome of every invariant check for one configuration.
#[derive(Debug, Clone)]
pub struct VerificationReport {
    pub checks: Vec<(&'static str, Result<(), InvariantError>)>,
}

impl VerificationReport {
    /// Run all checks against a catalogue and configuration.
    pub fn generate(catalogue: &Catalogue, config: &GeneratorConfig) -> Result<Self, ConfigError> {
        let program = Program::build(catalogue, config)?;
        let text = compile_program(&program, config);

        let checks = vec![
            ("state classes disjoint", validate_catalogue(catalogue)),
            ("partitions disjoint and sized", check_partitions(&program, catalogue)),
            ("rotation cycle closed", check_rotation_cycle(&program.rotations)),
            ("rule count", check_rule_count(&program, config.depth)),
            ("balanced blocks", check_balanced(&text)),
            ("deterministic output", check_deterministic(catalogue, config)),
        ];
        Ok(Self { checks })
    }

    pub fn passed(&self) -> bool {
        self.checks.iter().all(|(_, result)| result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &InvariantError)> {
        self.checks
            .iter()
            .filter_map(|(label, result)| result.as_ref().err().map(|e| (*label, e)))
    }
}
