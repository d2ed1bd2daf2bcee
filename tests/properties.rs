use std::cmp::Ordering;

use classic_sorts::compare::natural_order;
use classic_sorts::{Algorithm, SortOptions};
use proptest::prelude::*;

fn is_sorted_by<T, F>(values: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    values
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

fn any_algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

proptest! {
    #[test]
    fn sorted_permutation(algorithm in any_algorithm(), input in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut values = input.clone();
        let sorted = algorithm.sort_by(&mut values, natural_order).into_vec();
        prop_assert!(is_sorted_by(&sorted, natural_order));
        let mut expected = input;
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn idempotent(algorithm in any_algorithm(), input in prop::collection::vec(-8i32..8, 0..48)) {
        let mut values = input;
        let once = algorithm.sort_with(&mut values, natural_order, SortOptions::COPY).into_vec();
        let mut again = once.clone();
        let twice = algorithm.sort_with(&mut again, natural_order, SortOptions::COPY).into_vec();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn mutable_sorts_the_input(algorithm in any_algorithm(), input in prop::collection::vec(any::<u16>(), 0..48)) {
        let mut values = input.clone();
        let ptr = values.as_ptr();
        let sorted = algorithm.sort_with(&mut values, natural_order, SortOptions::IN_PLACE);
        prop_assert!(sorted.is_in_place());
        prop_assert_eq!(sorted.as_ptr(), ptr);
        let mut expected = input;
        expected.sort();
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn copy_leaves_the_input(algorithm in any_algorithm(), input in prop::collection::vec(any::<u16>(), 1..48)) {
        let mut values = input.clone();
        let ptr = values.as_ptr();
        let sorted = algorithm.sort_with(&mut values, natural_order, SortOptions::COPY);
        prop_assert!(!sorted.is_in_place());
        prop_assert_ne!(sorted.as_ptr(), ptr);
        prop_assert!(is_sorted_by(&sorted, natural_order));
        prop_assert_eq!(values, input);
    }

    #[test]
    fn stable_sorts_keep_ties(keys in prop::collection::vec(0u8..4, 0..64)) {
        let records = keys.into_iter().enumerate().map(|(id, key)| (key, id)).collect::<Vec<_>>();
        for algorithm in Algorithm::ALL.into_iter().filter(|algorithm| algorithm.is_stable()) {
            let mut values = records.clone();
            let sorted = algorithm.sort_by(&mut values, |a, b| a.0.cmp(&b.0));
            // Sorting by key alone must give the same result as sorting by (key, id)
            prop_assert!(is_sorted_by(&sorted, natural_order), "{} reordered ties", algorithm);
        }
    }

    #[test]
    fn broken_comparator_terminates(algorithm in any_algorithm(), input in prop::collection::vec(any::<i32>(), 0..32), seed in any::<u64>()) {
        let mut state = seed;
        let mut values = input.clone();
        let sorted = algorithm.sort_by(&mut values, |_, _| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            match state >> 62 {
                0 => Ordering::Less,
                1 => Ordering::Equal,
                _ => Ordering::Greater,
            }
        });
        let mut permuted = sorted.into_vec();
        permuted.sort();
        let mut expected = input;
        expected.sort();
        prop_assert_eq!(permuted, expected);
    }
}
