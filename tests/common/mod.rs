//! Shared test utilities and fixtures.

#![allow(dead_code)]

use pseudocalt::{compile_program, Catalogue, GeneratorConfig, Manifest, Program};
use std::fs;
use std::path::PathBuf;

// Re-export canonical test utilities from pseudocalt::testing
pub use pseudocalt::testing::{glyphs, make_catalogue, make_config, make_small_catalogue};

// ============================================================================
// FIXTURE DIRECTORIES
// ============================================================================

/// Feature text produced by the reference generator, header stripped.
pub const GOLDEN_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/golden");

/// Manifests used by the build and CLI tests.
pub const MANIFEST_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/manifests");

pub fn golden_path(name: &str) -> PathBuf {
    PathBuf::from(GOLDEN_DIR).join(name)
}

pub fn manifest_path(name: &str) -> PathBuf {
    PathBuf::from(MANIFEST_DIR).join(name)
}

pub fn read_golden(name: &str) -> String {
    fs::read_to_string(golden_path(name))
        .unwrap_or_else(|e| panic!("Failed to read golden file {}: {}", name, e))
}

pub fn load_manifest(name: &str) -> (Catalogue, GeneratorConfig) {
    Manifest::load(&manifest_path(name))
        .expect("Failed to load manifest")
        .into_parts()
        .expect("Manifest should be valid")
}

// ============================================================================
// BUILD HELPERS
// ============================================================================

/// Build and compile, panicking on configuration errors.
pub fn build(catalogue: &Catalogue, config: &GeneratorConfig) -> (Program, String) {
    let program = Program::build(catalogue, config).expect("Configuration should be valid");
    let text = compile_program(&program, config);
    (program, text)
}

/// Header-less text for the built-in catalogue.
pub fn builtin_text(seed: u32, depth: usize, partitions: usize) -> String {
    build(&Catalogue::builtin(), &make_config(seed, depth, partitions)).1
}

/// Every `sub ...;` line, trimmed.
pub fn sub_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("sub "))
        .collect()
}

/// Every `lookup NAME {` name, in emission order.
pub fn lookup_names(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix("lookup "))
        .filter_map(|rest| rest.strip_suffix(" {"))
        .collect()
}

/// Members of the `@name = [...]` declaration.
pub fn declared_members<'a>(text: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let prefix = format!("{} = [", name);
    text.lines().map(str::trim).find_map(|line| {
        line.strip_prefix(prefix.as_str())
            .and_then(|rest| rest.strip_suffix("];"))
            .map(|members| members.split_whitespace().collect())
    })
}
