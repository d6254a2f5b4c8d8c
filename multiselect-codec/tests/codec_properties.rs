//! Property-based tests for the selection codec.
//!
//! - Round-trip: decode(encode(s)) == s for duplicate-free, delimiter-free selections
//! - Toggle output always follows the canonical order of the available options
//! - Removing an option removes it entirely

use multiselect_codec::{Delimiter, Selection, decode, encode, toggle};
use proptest::prelude::*;
use std::collections::BTreeSet;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn option_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{1,12}").unwrap()
}

fn available_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(option_strategy(), 0..10).prop_map(|set| set.into_iter().collect())
}

fn delimiter_strategy() -> impl Strategy<Value = Delimiter> {
    prop::sample::select(vec![",", ";", "|", "::"]).prop_map(|d| Delimiter::new(d).unwrap())
}

/// Available options plus a duplicate-free subset, in canonical order.
fn available_and_selection() -> impl Strategy<Value = (Vec<String>, Selection)> {
    available_strategy().prop_flat_map(|available| {
        let len = available.len();
        (
            Just(available),
            prop::collection::vec(any::<bool>(), len),
        )
            .prop_map(|(available, mask)| {
                let selection: Selection = available
                    .iter()
                    .zip(mask)
                    .filter(|(_, keep)| *keep)
                    .map(|(o, _)| o.clone())
                    .collect();
                (available, selection)
            })
    })
}

fn positions(selection: &Selection, available: &[String]) -> Vec<Option<usize>> {
    selection
        .iter()
        .map(|item| available.iter().position(|a| a == item))
        .collect()
}

proptest! {
    #[test]
    fn decode_inverts_encode(
        (_, selection) in available_and_selection(),
        delimiter in delimiter_strategy(),
    ) {
        let encoded = encode(&selection, &delimiter);
        prop_assert_eq!(decode(Some(&encoded), &delimiter), selection);
    }

    #[test]
    fn toggle_output_is_in_canonical_order(
        (available, selection) in available_and_selection(),
        pick in any::<prop::sample::Index>(),
        include in any::<bool>(),
    ) {
        prop_assume!(!available.is_empty());
        let option = available[pick.index(available.len())].clone();
        let next = toggle(&selection, &available, &option, include);

        let pos = positions(&next, &available);
        prop_assert!(pos.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn toggle_off_removes_option(
        (available, selection) in available_and_selection(),
        option in option_strategy(),
    ) {
        let next = toggle(&selection, &available, &option, false);
        prop_assert!(!next.contains(&option));
        prop_assert!(next.len() <= selection.len());
    }

    #[test]
    fn toggle_on_then_off_restores_duplicate_free_selection(
        (available, selection) in available_and_selection(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!available.is_empty());
        let option = available[pick.index(available.len())].clone();
        prop_assume!(!selection.contains(&option));

        let added = toggle(&selection, &available, &option, true);
        prop_assert!(added.contains(&option));
        let removed = toggle(&added, &available, &option, false);
        prop_assert_eq!(removed, selection);
    }

    #[test]
    fn toggle_on_keeps_every_prior_entry(
        (available, selection) in available_and_selection(),
        option in option_strategy(),
    ) {
        let next = toggle(&selection, &available, &option, true);
        let mut expected: BTreeSet<&str> = selection.iter().map(String::as_str).collect();
        expected.insert(&option);
        let actual: BTreeSet<&str> = next.iter().map(String::as_str).collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(next.len(), selection.len() + 1);
    }
}
