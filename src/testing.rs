//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::catalogue::{Catalogue, Glyph};
use crate::config::GeneratorConfig;

/// Turn string literals into owned glyph names.
pub fn glyphs(names: &[&str]) -> Vec<Glyph> {
    names.iter().map(|name| (*name).to_string()).collect()
}

/// The two-class catalogue `[a b]`, `[a.alt b.alt]`.
pub fn make_small_catalogue() -> Catalogue {
    Catalogue::new(vec![glyphs(&["a", "b"]), glyphs(&["a.alt", "b.alt"])])
}

/// `classes` classes of `width` glyphs each: `g0 g1 ...`, `g0.v1 g1.v1 ...`, ...
pub fn make_catalogue(classes: usize, width: usize) -> Catalogue {
    Catalogue::new(
        (0..classes)
            .map(|class| {
                (0..width)
                    .map(|g| {
                        if class == 0 {
                            format!("g{}", g)
                        } else {
                            format!("g{}.v{}", g, class)
                        }
                    })
                    .collect()
            })
            .collect(),
    )
}

/// Header-less config with the given parameters.
pub fn make_config(seed: u32, depth: usize, partitions: usize) -> GeneratorConfig {
    GeneratorConfig {
        seed,
        depth,
        partitions,
        header: false,
        ..GeneratorConfig::default()
    }
}
