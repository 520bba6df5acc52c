//! Manifest loading, override precedence and rejection paths.

use super::common::{load_manifest, manifest_path};
use pseudocalt::{
    resolve_inputs, ConfigError, ConfigOverrides, InvariantError, Manifest, VerificationReport,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_manifest_parameters_loaded() {
    let (catalogue, config) = load_manifest("smallcaps.json");
    assert_eq!(catalogue.class_count(), 3);
    assert_eq!(catalogue.context().len(), 3);
    assert_eq!(config.seed, 3);
    assert_eq!(config.depth, 2);
    assert_eq!(config.partitions, 2);
    assert_eq!(config.feature, "calt");
}

#[test]
fn test_overrides_beat_manifest() {
    let path = manifest_path("smallcaps.json");
    let overrides = ConfigOverrides {
        seed: Some(99),
        depth: None,
        partitions: Some(3),
        feature: Some("rclt".to_string()),
        no_header: false,
    };
    let (_, config) = resolve_inputs(Some(&path), &overrides).unwrap();
    assert_eq!(config.seed, 99);
    assert_eq!(config.depth, 2);
    assert_eq!(config.partitions, 3);
    assert_eq!(config.feature, "rclt");
    // Manifest turned the header off; no_header=false does not turn it back on.
    assert!(!config.header);
}

#[test]
fn test_invalid_json_rejected() {
    let err = resolve_inputs(Some(&manifest_path("invalid.json")), &ConfigOverrides::default())
        .unwrap_err();
    assert!(err.contains("Invalid manifest JSON"), "{}", err);
}

#[test]
fn test_missing_manifest_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.json");
    let err = resolve_inputs(Some(&path), &ConfigOverrides::default()).unwrap_err();
    assert!(err.contains("Failed to read manifest"), "{}", err);
}

#[test]
fn test_zero_partitions_rejected_before_generation() {
    let (catalogue, config) = load_manifest("zero-partitions.json");
    let err = VerificationReport::generate(&catalogue, &config).unwrap_err();
    assert_eq!(err, ConfigError::ZeroPartitions);
}

#[test]
fn test_overlapping_classes_fail_verification() {
    let (catalogue, config) = load_manifest("overlapping.json");
    let report = VerificationReport::generate(&catalogue, &config).unwrap();
    assert!(!report.passed());

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "state classes disjoint");
    assert_eq!(
        failures[0].1,
        &InvariantError::OverlappingClasses {
            glyph: "a".to_string(),
            first: 0,
            second: 1,
        }
    );
}

#[test]
fn test_unsupported_version_rejected() {
    let manifest = Manifest::parse(r#"{ "version": 2, "classes": [["a"]] }"#).unwrap();
    assert_eq!(
        manifest.into_parts().unwrap_err(),
        ConfigError::UnsupportedVersion { version: 2 }
    );
}

#[test]
fn test_context_defaults_to_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("plain.json");
    fs::write(&path, r#"{ "classes": [["x", "y"], ["x.alt", "y.alt"]] }"#).unwrap();

    let (catalogue, config) = resolve_inputs(Some(&path), &ConfigOverrides::default()).unwrap();
    assert!(catalogue.context().is_empty());
    assert_eq!(config.depth, 10);
    assert!(config.header);
}

#[test]
fn test_invalid_glyph_rejected() {
    let manifest = Manifest::parse(r#"{ "classes": [["a b"]] }"#).unwrap();
    let (catalogue, config) = manifest.into_parts().unwrap();
    assert_eq!(
        config.validate(&catalogue),
        Err(ConfigError::InvalidGlyph {
            glyph: "a b".to_string()
        })
    );
}
