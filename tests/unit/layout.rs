//! Structure of the generated text for hand-checkable catalogues.

use super::common::{
    build, builtin_text, declared_members, lookup_names, make_config, make_small_catalogue,
    sub_lines,
};
use pseudocalt::{Catalogue, GeneratorConfig};

#[test]
fn test_small_catalogue_single_partition() {
    let (program, text) = build(&make_small_catalogue(), &make_config(0, 1, 1));

    assert_eq!(program.rotations.len(), 2);
    assert!(text.contains("\t@state0 = [@transformation0 @transformation1];\n"));
    assert!(text.contains("\t@state1 = [@transformation1 @transformation0];\n"));
    assert!(declared_members(&text, "@state2").is_none());

    assert_eq!(
        declared_members(&text, "@partition0").unwrap(),
        vec!["a", "a.alt", "b", "b.alt"]
    );
    assert!(declared_members(&text, "@partition1").is_none());

    assert_eq!(
        declared_members(&text, "@All").unwrap(),
        vec!["a", "b", "a.alt", "b.alt"]
    );

    assert_eq!(
        sub_lines(&text),
        vec![
            "sub @partition0  @state0' by @state1;",
            "sub @partition0  @state1' by @state0;",
        ]
    );
    assert_eq!(
        lookup_names(&text),
        vec!["skip0_partition0", "skip0_partition1"]
    );
}

#[test]
fn test_depth_zero_has_no_lookups() {
    for (seed, partitions) in [(0, 1), (99, 4), (u32::MAX, 40)] {
        let text = builtin_text(seed, 0, partitions);
        assert!(!text.contains("lookup"), "seed {} emitted a lookup", seed);
        assert!(text.contains("@skip = [@All];"));
        assert!(text.ends_with("} calt;\n"));
    }
}

#[test]
fn test_layers_emitted_deepest_first() {
    let text = builtin_text(3, 3, 4);
    let names = lookup_names(&text);
    assert_eq!(names.len(), 12);
    assert_eq!(names[0], "skip2_partition0");
    assert_eq!(names[4], "skip1_partition0");
    assert_eq!(names[11], "skip0_partition3");
}

#[test]
fn test_skip_terms_match_layer_depth() {
    let text = builtin_text(5, 4, 3);
    for line in sub_lines(&text) {
        let skips = line.matches("@skip").count();
        assert!(skips < 4, "too many skips in {}", line);
    }
    assert!(text.contains("sub @partition2 @skip @skip @skip @state0' by @state1;"));
}

#[test]
fn test_context_partitions_reversed() {
    // Three classes, two partitions: i=0 -> P1, i=1 -> P0, i=2 -> P1
    let catalogue = Catalogue::new(vec![
        vec!["a".into(), "b".into()],
        vec!["a.1".into(), "b.1".into()],
        vec!["a.2".into(), "b.2".into()],
    ]);
    let (_, text) = build(&catalogue, &make_config(1, 1, 2));
    assert_eq!(
        sub_lines(&text),
        vec![
            "sub @partition1  @state0' by @state1;",
            "sub @partition0  @state1' by @state2;",
            "sub @partition1  @state2' by @state0;",
        ]
    );
}

#[test]
fn test_header_records_parameters() {
    let config = GeneratorConfig {
        seed: 11,
        depth: 2,
        partitions: 3,
        ..GeneratorConfig::default()
    };
    let (_, text) = build(&Catalogue::builtin(), &config);
    assert!(text.starts_with("# OpenType Pseudorandom CALT Feature\n"));
    assert!(text.contains("(seed 11, depth 2, partitions 3)"));
    assert!(text.contains("\n\nfeature calt {\n\n"));
}

#[test]
fn test_custom_feature_tag() {
    let config = GeneratorConfig {
        feature: "rclt".to_string(),
        ..make_config(0, 1, 2)
    };
    let (_, text) = build(&make_small_catalogue(), &config);
    assert!(text.starts_with("feature rclt {\n\n"));
    assert!(text.ends_with("\n} rclt;\n"));
}
