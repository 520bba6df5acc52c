// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for manifest parsing.
//!
//! Manifests come from users' font repositories. Malformed JSON, wrong
//! versions and hostile glyph names must come back as errors.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pseudocalt::Manifest;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(manifest) = Manifest::parse(content) else {
        return;
    };
    if let Ok((catalogue, config)) = manifest.into_parts() {
        let _ = config.validate(&catalogue);
    }
});
