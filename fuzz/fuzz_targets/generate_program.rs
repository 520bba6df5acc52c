// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the full build-and-compile pipeline.
//!
//! Arbitrary catalogue shapes and parameters go in. Generation must either
//! reject the configuration up front or produce text that satisfies every
//! structural invariant.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pseudocalt::verify::{check_balanced, check_partitions, check_rule_count};
use pseudocalt::{compile_program, Catalogue, GeneratorConfig, Program};

#[derive(Arbitrary, Debug)]
struct Input {
    classes: Vec<Vec<String>>,
    context: Vec<String>,
    seed: u32,
    depth: u8,
    partitions: u8,
}

fuzz_target!(|input: Input| {
    // Keep the output size bounded
    if input.classes.len() > 16 || input.classes.iter().any(|c| c.len() > 64) {
        return;
    }

    let catalogue = Catalogue::new(input.classes).with_context(input.context);
    let config = GeneratorConfig {
        seed: input.seed,
        depth: usize::from(input.depth % 16),
        partitions: usize::from(input.partitions),
        header: false,
        ..GeneratorConfig::default()
    };

    // Property 1: invalid configurations are rejected, never panic
    let Ok(program) = Program::build(&catalogue, &config) else {
        return;
    };
    let text = compile_program(&program, &config);

    // Property 2: partitions drawn without replacement, equal sized
    assert!(check_partitions(&program, &catalogue).is_ok());

    // Property 3: one rule per class per layer
    assert!(check_rule_count(&program, config.depth).is_ok());

    // Property 4: every block closes
    assert!(check_balanced(&text).is_ok(), "unbalanced output");

    // Property 5: same inputs, same bytes
    let again = compile_program(&Program::build(&catalogue, &config).unwrap(), &config);
    assert_eq!(text, again);
});
