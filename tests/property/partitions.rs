//! Partitioner properties: determinism, disjointness, size bound.

use super::common::glyphs;
use proptest::prelude::*;
use pseudocalt::{partition_glyphs, Glyph, SeededRandom};
use std::collections::HashMap;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Distinct glyph-like names.
fn universe_strategy() -> impl Strategy<Value = Vec<Glyph>> {
    prop::collection::hash_set("[a-z]{1,4}(\\.[a-z0-9]{2,4})?", 0..60)
        .prop_map(|set| set.into_iter().collect())
}

fn counts(glyphs: &[Glyph]) -> HashMap<&str, usize> {
    let mut map = HashMap::new();
    for glyph in glyphs {
        *map.entry(glyph.as_str()).or_insert(0) += 1;
    }
    map
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_same_seed_same_partitions(
        universe in universe_strategy(),
        k in 1usize..12,
        seed in any::<u32>(),
    ) {
        let first = partition_glyphs(&universe, k, &mut SeededRandom::new(seed));
        let second = partition_glyphs(&universe, k, &mut SeededRandom::new(seed));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_partitions_disjoint_subsets(
        universe in universe_strategy(),
        k in 1usize..12,
        seed in any::<u32>(),
    ) {
        let partitions = partition_glyphs(&universe, k, &mut SeededRandom::new(seed));
        let all: Vec<Glyph> = partitions.iter().flat_map(|p| p.glyphs.clone()).collect();
        let available = counts(&universe);
        for (glyph, n) in counts(&all) {
            prop_assert!(n <= available.get(glyph).copied().unwrap_or(0), "{} drawn {} times", glyph, n);
        }
    }

    #[test]
    fn prop_partitions_equal_size_and_sorted(
        universe in universe_strategy(),
        k in 1usize..12,
        seed in any::<u32>(),
    ) {
        let partitions = partition_glyphs(&universe, k, &mut SeededRandom::new(seed));
        prop_assert_eq!(partitions.len(), k);
        let group = universe.len() / k;
        for (i, partition) in partitions.iter().enumerate() {
            prop_assert_eq!(partition.index, i);
            prop_assert_eq!(partition.len(), group);
            prop_assert!(partition.glyphs.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn prop_dropped_below_partition_count(
        universe in universe_strategy(),
        k in 1usize..12,
        seed in any::<u32>(),
    ) {
        let partitions = partition_glyphs(&universe, k, &mut SeededRandom::new(seed));
        let used: usize = partitions.iter().map(|p| p.len()).sum();
        prop_assert!(universe.len() - used < k);
    }

    #[test]
    fn prop_duplicates_never_overdrawn(
        names in prop::collection::vec(prop::sample::select(vec!["a", "b", "c"]), 0..30),
        k in 1usize..6,
        seed in any::<u32>(),
    ) {
        let universe = glyphs(&names);
        let partitions = partition_glyphs(&universe, k, &mut SeededRandom::new(seed));
        let available = counts(&universe);
        let all: Vec<Glyph> = partitions.into_iter().flat_map(|p| p.glyphs).collect();
        for (glyph, n) in counts(&all) {
            prop_assert!(n <= available[glyph]);
        }
    }
}

#[test]
fn test_randrange_stays_in_bounds() {
    let mut rng = SeededRandom::new(2024);
    for n in 1..500 {
        assert!(rng.randrange(n) < n);
    }
}
