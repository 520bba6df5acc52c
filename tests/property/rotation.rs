//! Rotation cycle properties.

use proptest::prelude::*;
use pseudocalt::rotation::{successor, transition_pairs};
use pseudocalt::build_rotations;

fn class_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("@transformation{}", i)).collect()
}

proptest! {
    #[test]
    fn prop_rotation_i_starts_with_class_i(n in 1usize..16) {
        let names = class_names(n);
        let rotations = build_rotations(&names);
        prop_assert_eq!(rotations.len(), n);
        for (i, rotation) in rotations.iter().enumerate() {
            prop_assert_eq!(&rotation.classes[0], &names[i]);
            prop_assert_eq!(rotation.classes.len(), n);
            prop_assert_eq!(&rotation.classes[n - 1], &names[(i + n - 1) % n]);
        }
    }

    #[test]
    fn prop_transitions_close_the_cycle(n in 1usize..16) {
        let rotations = build_rotations(&class_names(n));
        let pairs = transition_pairs(&rotations);
        prop_assert_eq!(pairs.len(), n);
        prop_assert_eq!(&pairs[n - 1].1, "@state0");

        // Following successors from state 0 visits every state once.
        let mut seen = vec![false; n];
        let mut state = 0;
        for _ in 0..n {
            prop_assert!(!seen[state]);
            seen[state] = true;
            state = successor(state, n);
        }
        prop_assert_eq!(state, 0);
    }
}

#[test]
fn test_single_class_maps_to_itself() {
    let rotations = build_rotations(&class_names(1));
    assert_eq!(
        transition_pairs(&rotations),
        vec![("@state0".to_string(), "@state0".to_string())]
    );
}
