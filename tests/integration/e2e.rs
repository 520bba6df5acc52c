//! End-to-end generation into temporary directories.

use super::common::{manifest_path, read_golden};
use pseudocalt::{run_generate, ConfigOverrides, GenerateRequest};
use std::fs;
use tempfile::TempDir;

fn overrides(seed: u32, depth: usize, partitions: usize) -> ConfigOverrides {
    ConfigOverrides {
        seed: Some(seed),
        depth: Some(depth),
        partitions: Some(partitions),
        feature: None,
        no_header: true,
    }
}

#[test]
fn test_builtin_written_to_file() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("calt.fea");

    let summary = run_generate(&GenerateRequest {
        manifest: None,
        output: Some(output.clone()),
        overrides: overrides(7, 3, 5),
    })
    .unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, read_golden("seed7_depth3_partitions5.fea"));
    assert_eq!(summary.bytes, written.len());
    assert_eq!(summary.crc32, crc32fast::hash(written.as_bytes()));
    assert_eq!(summary.classes, 4);
    assert_eq!(summary.partitions, 5);
    assert_eq!(summary.rules, 12);
    // 144 glyphs into 5 partitions of 28
    assert_eq!(summary.partitioned_glyphs, 140);
    assert_eq!(summary.dropped_glyphs, 4);
}

#[test]
fn test_creates_missing_output_dirs() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("build").join("features").join("calt.fea");

    run_generate(&GenerateRequest {
        manifest: None,
        output: Some(output.clone()),
        overrides: overrides(0, 1, 2),
    })
    .unwrap();

    assert!(output.exists());
}

#[test]
fn test_manifest_written_to_file() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("smallcaps.fea");

    let summary = run_generate(&GenerateRequest {
        manifest: Some(manifest_path("smallcaps.json")),
        output: Some(output.clone()),
        overrides: ConfigOverrides::default(),
    })
    .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), read_golden("smallcaps.fea"));
    assert_eq!(summary.rules, 6);
    assert_eq!(summary.dropped_glyphs, 0);
}

#[test]
fn test_header_written_by_default() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("calt.fea");

    run_generate(&GenerateRequest {
        manifest: None,
        output: Some(output.clone()),
        overrides: ConfigOverrides::default(),
    })
    .unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("# OpenType Pseudorandom CALT Feature\n"));
    assert!(written.ends_with(&read_golden("seed0_depth10_partitions4.fea")));
}

#[test]
fn test_repeated_runs_identical() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("first.fea");
    let second = temp.path().join("second.fea");

    for output in [&first, &second] {
        run_generate(&GenerateRequest {
            manifest: None,
            output: Some(output.clone()),
            overrides: overrides(31337, 4, 6),
        })
        .unwrap();
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}
