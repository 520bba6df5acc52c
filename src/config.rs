// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Generator parameters, the JSON manifest, and their validation.
//!
//! Resolution order, lowest to highest priority:
//!
//! 1. [`GeneratorConfig::default`] (seed 0, depth 10, 4 partitions, `calt`)
//! 2. values present in a manifest file
//! 3. command-line overrides
//!
//! A manifest looks like:
//!
//! ```json
//! {
//!   "version": 1,
//!   "classes": [["a", "b"], ["a.alt", "b.alt"]],
//!   "context": ["period", "comma"],
//!   "seed": 7,
//!   "depth": 6,
//!   "partitions": 3,
//!   "feature": "calt",
//!   "header": true
//! }
//! ```
//!
//! Only `classes` is required.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::catalogue::Catalogue;

/// Manifest format version this build understands.
pub const MANIFEST_VERSION: u32 = 1;

/// Characters that would break the structure of a class declaration.
const RESERVED_GLYPH_CHARS: &[char] = &['[', ']', '{', '}', ';', '\'', '@', '#'];

/// Configuration error, raised before any generation work happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Contexts are drawn modulo the partition count.
    ZeroPartitions,
    /// The rotation cycle needs at least one class.
    EmptyCatalogue,
    /// A class with no glyphs would declare `[]` as a substitution target.
    EmptyClass { index: usize },
    /// Glyph name is empty or contains whitespace or reserved characters.
    InvalidGlyph { glyph: String },
    /// Feature tags are one to four ASCII alphanumerics.
    InvalidFeatureTag { tag: String },
    UnsupportedVersion { version: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroPartitions => write!(f, "partition count must be at least 1"),
            ConfigError::EmptyCatalogue => write!(f, "catalogue has no state classes"),
            ConfigError::EmptyClass { index } => {
                write!(f, "state class {} has no glyphs", index)
            }
            ConfigError::InvalidGlyph { glyph } => {
                write!(f, "invalid glyph name '{}'", glyph)
            }
            ConfigError::InvalidFeatureTag { tag } => {
                write!(
                    f,
                    "invalid feature tag '{}' (expected 1-4 ASCII letters or digits)",
                    tag
                )
            }
            ConfigError::UnsupportedVersion { version } => {
                write!(
                    f,
                    "unsupported manifest version {} (expected {})",
                    version, MANIFEST_VERSION
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parameters of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub seed: u32,
    /// Number of lookahead layers.
    pub depth: usize,
    /// Number of random context partitions.
    pub partitions: usize,
    /// Feature tag wrapping the generated block.
    pub feature: String,
    /// Emit the comment header before the feature block.
    pub header: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            depth: 10,
            partitions: 4,
            feature: "calt".to_string(),
            header: true,
        }
    }
}

impl GeneratorConfig {
    /// Check the parameters against a catalogue.
    ///
    /// Class disjointness is not checked here; see
    /// [`crate::verify::validate_catalogue`].
    pub fn validate(&self, catalogue: &Catalogue) -> Result<(), ConfigError> {
        if self.partitions == 0 {
            return Err(ConfigError::ZeroPartitions);
        }
        if !is_valid_feature_tag(&self.feature) {
            return Err(ConfigError::InvalidFeatureTag {
                tag: self.feature.clone(),
            });
        }
        if catalogue.is_empty() {
            return Err(ConfigError::EmptyCatalogue);
        }
        for (index, class) in catalogue.class_glyphs().iter().enumerate() {
            if class.is_empty() {
                return Err(ConfigError::EmptyClass { index });
            }
        }
        let all_glyphs = catalogue
            .class_glyphs()
            .iter()
            .flatten()
            .chain(catalogue.context());
        for glyph in all_glyphs {
            if !is_valid_glyph_name(glyph) {
                return Err(ConfigError::InvalidGlyph {
                    glyph: glyph.clone(),
                });
            }
        }
        Ok(())
    }
}

/// A glyph name that can be dropped into a class declaration verbatim.
pub fn is_valid_glyph_name(glyph: &str) -> bool {
    !glyph.is_empty()
        && !glyph
            .chars()
            .any(|c| c.is_whitespace() || RESERVED_GLYPH_CHARS.contains(&c))
}

pub fn is_valid_feature_tag(tag: &str) -> bool {
    (1..=4).contains(&tag.len()) && tag.chars().all(|c| c.is_ascii_alphanumeric())
}

fn default_version() -> u32 {
    MANIFEST_VERSION
}

/// On-disk description of a catalogue and, optionally, its parameters.
#[derive(Deserialize, Clone, Debug)]
pub struct Manifest {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(flatten)]
    pub catalogue: Catalogue,
    pub seed: Option<u32>,
    pub depth: Option<usize>,
    pub partitions: Option<usize>,
    pub feature: Option<String>,
    pub header: Option<bool>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read manifest {}: {}", path.display(), e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| format!("Invalid manifest JSON: {}", e))
    }

    /// Split into the catalogue and the config it specifies on top of defaults.
    pub fn into_parts(self) -> Result<(Catalogue, GeneratorConfig), ConfigError> {
        if self.version != MANIFEST_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                version: self.version,
            });
        }
        let defaults = GeneratorConfig::default();
        let config = GeneratorConfig {
            seed: self.seed.unwrap_or(defaults.seed),
            depth: self.depth.unwrap_or(defaults.depth),
            partitions: self.partitions.unwrap_or(defaults.partitions),
            feature: self.feature.unwrap_or(defaults.feature),
            header: self.header.unwrap_or(defaults.header),
        };
        Ok((self.catalogue, config))
    }
}

/// Command-line values that take precedence over the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub seed: Option<u32>,
    pub depth: Option<usize>,
    pub partitions: Option<usize>,
    pub feature: Option<String>,
    pub no_header: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(partitions) = self.partitions {
            config.partitions = partitions;
        }
        if let Some(feature) = &self.feature {
            config.feature = feature.clone();
        }
        if self.no_header {
            config.header = false;
        }
    }
}
