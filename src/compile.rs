// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Serialization of a [`Program`] into feature-file text.
//!
//! The layout is fixed so that a seed/depth/partition triple always produces
//! the same bytes:
//!
//! ```text
//! feature calt {
//!
//!     @transformation0 = [a b c];
//!     ...
//!                                         <- blank line between groups
//!     @state0 = [@transformation0 @transformation1];
//!     ...
//!     @skip = [@All];
//!
//!     lookup skip1_partition0 {
//!         sub @partition1 @skip @state0' by @state1;
//!     } skip1_partition0;
//!     ...
//! } calt;
//! ```
//!
//! A rule without skip terms keeps both separators around the empty skip run
//! (`sub @partition1  @state0' by @state1;`). Existing generated features
//! carry that spacing, so it stays.

use crate::catalogue::StateClass;
use crate::config::GeneratorConfig;
use crate::lookup::{emission_order, LookupLayer, LookupRule};
use crate::partition::Partition;
use crate::program::{CatchAllClass, Program, SkipClass, ALL_CLASS, SKIP_CLASS};
use crate::rotation::RotationEntry;

/// Indentation added per nesting level.
pub const INDENT: &str = "\t";

/// Anything emitted as `@name = [members];`.
pub trait ClassDeclaration {
    fn class_name(&self) -> String;
    fn members(&self) -> Vec<&str>;

    /// `@name = [a b c]` without indentation or terminator.
    fn declaration(&self) -> String {
        format!("{} = [{}]", self.class_name(), self.members().join(" "))
    }
}

impl ClassDeclaration for StateClass {
    fn class_name(&self) -> String {
        self.name()
    }

    fn members(&self) -> Vec<&str> {
        self.glyphs.iter().map(String::as_str).collect()
    }
}

impl ClassDeclaration for RotationEntry {
    fn class_name(&self) -> String {
        self.name()
    }

    fn members(&self) -> Vec<&str> {
        self.classes.iter().map(String::as_str).collect()
    }
}

impl ClassDeclaration for Partition {
    fn class_name(&self) -> String {
        self.name()
    }

    fn members(&self) -> Vec<&str> {
        self.glyphs.iter().map(String::as_str).collect()
    }
}

impl ClassDeclaration for CatchAllClass {
    fn class_name(&self) -> String {
        ALL_CLASS.to_string()
    }

    fn members(&self) -> Vec<&str> {
        self.glyphs.iter().map(String::as_str).collect()
    }
}

impl ClassDeclaration for SkipClass {
    fn class_name(&self) -> String {
        SKIP_CLASS.to_string()
    }

    fn members(&self) -> Vec<&str> {
        vec![ALL_CLASS]
    }
}

/// One declaration per line, each terminated by `;\n`.
pub fn compile_class_definitions<D: ClassDeclaration>(classes: &[D], indent: &str) -> String {
    classes.iter().fold(String::new(), |mut acc, class| {
        acc.push_str(indent);
        acc.push_str(&class.declaration());
        acc.push_str(";\n");
        acc
    })
}

/// A named lookup block holding a single substitution.
pub fn compile_lookup(rule: &LookupRule, indent: &str) -> String {
    let name = rule.name();
    let skips: Vec<&str> = rule.skip_terms().collect();
    format!(
        "{indent}lookup {name} {{\n{indent}{INDENT}sub {context} {skips} {from}' by {to};\n{indent}}} {name};\n\n",
        indent = indent,
        name = name,
        context = rule.context,
        skips = skips.join(" "),
        from = rule.from,
        to = rule.to,
    )
}

/// All layers, deepest first, separated by blank lines.
pub fn compile_lookup_definitions(layers: &[LookupLayer], indent: &str) -> String {
    emission_order(layers)
        .map(|layer| {
            layer
                .rules
                .iter()
                .map(|rule| compile_lookup(rule, indent))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Everything between the feature braces.
pub fn compile_feature_body(program: &Program, indent: &str) -> String {
    [
        compile_class_definitions(&program.states, indent),
        compile_class_definitions(&program.rotations, indent),
        compile_class_definitions(&program.partitions, indent),
        compile_class_definitions(std::slice::from_ref(&program.all), indent),
        compile_class_definitions(std::slice::from_ref(&program.skip), indent),
        compile_lookup_definitions(&program.layers, indent),
    ]
    .join("\n")
}

/// The complete `feature <tag> { ... } <tag>;` block, without trailing newline.
pub fn compile_feature(program: &Program, feature: &str) -> String {
    format!(
        "feature {feature} {{\n\n{body}\n}} {feature};",
        feature = feature,
        body = compile_feature_body(program, INDENT)
    )
}

/// Comment lines placed above the feature block.
pub fn render_header(config: &GeneratorConfig) -> String {
    format!(
        "# OpenType Pseudorandom {upper} Feature\n\
         # Generated by pseudocalt (seed {seed}, depth {depth}, partitions {partitions})\n\
         # Copy this code into your font's {tag} feature\n\n",
        upper = config.feature.to_uppercase(),
        seed = config.seed,
        depth = config.depth,
        partitions = config.partitions,
        tag = config.feature,
    )
}

/// Final output text: optional header, feature block, trailing newline.
pub fn compile_program(program: &Program, config: &GeneratorConfig) -> String {
    let mut output = String::new();
    if config.header {
        output.push_str(&render_header(config));
    }
    output.push_str(&compile_feature(program, &config.feature));
    output.push('\n');
    output
}
