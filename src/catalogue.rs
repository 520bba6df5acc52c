// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! State classes and the glyph catalogue they are built from.
//!
//! A catalogue is an ordered list of glyph groups. The first group is the base
//! set and every following group is one stylistic variant of it. Each group
//! becomes one `@transformationN` class, and the generated lookups cycle a
//! glyph from one class to the next.
//!
//! Classes are expected to be disjoint and duplicate-free. Generation does not
//! check this (see [`crate::verify::validate_catalogue`] for the opt-in check).

use serde::{Deserialize, Serialize};

/// Opaque glyph identifier. Compared by exact name.
pub type Glyph = String;

/// Base glyphs of the built-in catalogue: lowercase Latin and the digits.
pub const BUILTIN_BASE: &[&str] = &[
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
    "s", "t", "u", "v", "w", "x", "y", "z", "zero", "one", "two", "three", "four", "five", "six",
    "seven", "eight", "nine",
];

/// Stylistic-set suffixes of the built-in variant classes, in cycle order.
pub const BUILTIN_VARIANTS: &[&str] = &["ss01", "ss02", "ss03"];

/// One stage of the substitution cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateClass {
    /// Position in the catalogue; the class is named after it.
    pub index: usize,
    pub glyphs: Vec<Glyph>,
}

impl StateClass {
    pub fn new(index: usize, glyphs: Vec<Glyph>) -> Self {
        Self { index, glyphs }
    }

    /// `@transformation{index}`
    pub fn name(&self) -> String {
        format!("@transformation{}", self.index)
    }
}

/// Ordered state-class definitions plus optional context-only glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    classes: Vec<Vec<Glyph>>,
    /// Glyphs that take part in partitions and `@All` without being substituted.
    #[serde(default)]
    context: Vec<Glyph>,
}

impl Catalogue {
    pub fn new(classes: Vec<Vec<Glyph>>) -> Self {
        Self {
            classes,
            context: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: Vec<Glyph>) -> Self {
        self.context = context;
        self
    }

    /// The base set and its `.ss01`-`.ss03` variants.
    pub fn builtin() -> Self {
        let base: Vec<Glyph> = BUILTIN_BASE.iter().map(|g| (*g).to_string()).collect();
        let mut classes = vec![base];
        for suffix in BUILTIN_VARIANTS {
            classes.push(
                BUILTIN_BASE
                    .iter()
                    .map(|g| format!("{}.{}", g, suffix))
                    .collect(),
            );
        }
        Self::new(classes)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Raw glyph lists, base set first.
    pub fn class_glyphs(&self) -> &[Vec<Glyph>] {
        &self.classes
    }

    pub fn context(&self) -> &[Glyph] {
        &self.context
    }

    /// Build the named state classes, preserving input order.
    pub fn state_classes(&self) -> Vec<StateClass> {
        self.classes
            .iter()
            .enumerate()
            .map(|(index, glyphs)| StateClass::new(index, glyphs.clone()))
            .collect()
    }

    /// Every glyph slot in catalogue order: all classes, then context glyphs.
    ///
    /// Duplicates are kept. The partitioner draws each slot at most once.
    pub fn universe(&self) -> Vec<Glyph> {
        self.classes
            .iter()
            .flatten()
            .chain(self.context.iter())
            .cloned()
            .collect()
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::builtin()
    }
}
