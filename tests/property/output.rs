//! Whole-output properties: determinism, rule count, balanced blocks.

use super::common::{build, lookup_names, make_catalogue, make_config, sub_lines};
use proptest::prelude::*;
use pseudocalt::verify::check_balanced;
use pseudocalt::VerificationReport;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_output_deterministic(
        classes in 1usize..5,
        width in 1usize..12,
        depth in 0usize..4,
        partitions in 1usize..8,
        seed in any::<u32>(),
    ) {
        let catalogue = make_catalogue(classes, width);
        let config = make_config(seed, depth, partitions);
        prop_assert_eq!(build(&catalogue, &config).1, build(&catalogue, &config).1);
    }

    #[test]
    fn prop_rule_count_matches_lookups(
        classes in 1usize..5,
        width in 1usize..12,
        depth in 0usize..5,
        partitions in 1usize..8,
        seed in any::<u32>(),
    ) {
        let (_, text) = build(&make_catalogue(classes, width), &make_config(seed, depth, partitions));
        prop_assert_eq!(sub_lines(&text).len(), depth * classes);
        prop_assert_eq!(lookup_names(&text).len(), depth * classes);
    }

    #[test]
    fn prop_output_balanced(
        classes in 1usize..5,
        width in 1usize..12,
        depth in 0usize..4,
        partitions in 1usize..30,
        seed in any::<u32>(),
    ) {
        let (_, text) = build(&make_catalogue(classes, width), &make_config(seed, depth, partitions));
        prop_assert!(check_balanced(&text).is_ok());
        prop_assert_eq!(text.matches('[').count(), text.matches(']').count());
    }

    #[test]
    fn prop_generated_catalogues_verify(
        classes in 1usize..4,
        width in 1usize..10,
        depth in 0usize..3,
        partitions in 1usize..6,
        seed in any::<u32>(),
    ) {
        let report = VerificationReport::generate(
            &make_catalogue(classes, width),
            &make_config(seed, depth, partitions),
        ).unwrap();
        prop_assert!(report.passed());
    }
}
