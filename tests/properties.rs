use std::collections::BTreeSet;

use bit_packed::collections::DynamicBitSet;
use proptest::prelude::*;

fn elements() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..300, 0..40)
}

fn model(elements: &[usize]) -> BTreeSet<usize> {
    elements.iter().copied().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_insert_then_contains(elements in elements(), element in 0usize..1_000) {
        let mut set = DynamicBitSet::from_values(elements);

        set.insert(element);

        prop_assert!(set.contains(element));
    }

    #[test]
    fn prop_remove_then_absent(elements in elements(), element in 0usize..1_000) {
        let mut set = DynamicBitSet::from_values(elements.iter().copied());

        set.remove(element);

        prop_assert!(!set.contains(element));

        let mut expected = model(&elements);
        expected.remove(&element);

        prop_assert_eq!(expected.into_iter().collect::<Vec<_>>(), set.to_vec());
    }

    #[test]
    fn prop_matches_model(elements in elements()) {
        let set = DynamicBitSet::from_values(elements.iter().copied());
        let expected = model(&elements);

        prop_assert_eq!(expected.len(), set.len());
        prop_assert_eq!(expected.is_empty(), set.is_empty());
        prop_assert_eq!(expected.first().copied(), set.first());
        prop_assert_eq!(expected.iter().copied().collect::<Vec<_>>(), set.to_vec());

        for index in 0..320 {
            prop_assert_eq!(expected.contains(&index), set.contains(index));
        }
    }

    #[test]
    fn prop_to_vec_sorted(elements in elements()) {
        let set = DynamicBitSet::from_values(elements);
        let values = set.to_vec();

        prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(values.iter().all(|v| set.contains(*v)));
    }

    #[test]
    fn prop_clone_is_independent(elements in elements(), element in 0usize..300) {
        let original = DynamicBitSet::from_values(elements);
        let before = original.to_vec();

        let mut clone = original.clone();
        clone.insert(element);
        clone.remove(element.saturating_add(1));
        clone.not_in_place();

        prop_assert_eq!(before, original.to_vec());
    }

    #[test]
    fn prop_original_is_independent(elements in elements(), element in 0usize..300) {
        let mut original = DynamicBitSet::from_values(elements);

        let clone = original.clone();
        let before = clone.to_vec();

        original.insert(element);
        original.remove(element.saturating_add(1));
        original.not_in_place_upto(element);

        prop_assert_eq!(before, clone.to_vec());
    }

    #[test]
    fn prop_or_commutes(left in elements(), right in elements()) {
        let left = DynamicBitSet::from_values(left);
        let right = DynamicBitSet::from_values(right);

        prop_assert_eq!(left.or(&right), right.or(&left));
        prop_assert_eq!(left.or(&left), left.clone());
    }

    #[test]
    fn prop_and_commutes(left in elements(), right in elements()) {
        let left = DynamicBitSet::from_values(left);
        let right = DynamicBitSet::from_values(right);

        prop_assert_eq!(left.and(&right), right.and(&left));
        prop_assert_eq!(left.and(&left), left.clone());
    }

    #[test]
    fn prop_algebra_matches_model(left in elements(), right in elements()) {
        let (left_model, right_model) = (model(&left), model(&right));
        let left = DynamicBitSet::from_values(left);
        let right = DynamicBitSet::from_values(right);

        let union: Vec<_> = left_model.union(&right_model).copied().collect();
        let intersection: Vec<_> = left_model.intersection(&right_model).copied().collect();
        let difference: Vec<_> = left_model.difference(&right_model).copied().collect();

        prop_assert_eq!(union, (&left | &right).to_vec());
        prop_assert_eq!(intersection, (&left & &right).to_vec());
        prop_assert_eq!(difference, (&left - &right).to_vec());
        prop_assert_eq!(left_model.is_subset(&right_model), left.is_subset_of(&right));
    }

    #[test]
    fn prop_double_complement(elements in elements(), max_bit in 300usize..400) {
        let set = DynamicBitSet::from_values(elements);

        let mut twice = set.clone();
        twice.not_in_place_upto(max_bit);
        twice.not_in_place_upto(max_bit);

        prop_assert_eq!(&set, &twice);
        prop_assert_eq!(set.clone(), !&!&set);
    }

    #[test]
    fn prop_trailing_zeros_insignificant(elements in elements(), extra in 0usize..16) {
        let set = DynamicBitSet::from_values(elements);

        let mut padded = set.clone();
        padded.set_size(set.len_in_words() + extra);

        prop_assert_eq!(&set, &padded);
        prop_assert_eq!(set.to_string(), padded.to_string());
        prop_assert_eq!(set.len(), padded.len());
    }
}

#[test]
fn scenarios() {
    let range = DynamicBitSet::from_range(2..=5);

    assert_eq!(vec![2, 3, 4, 5], range.to_vec());
    assert_eq!("{2,3,4,5}", range.to_string());

    let empty = DynamicBitSet::new();

    assert!(empty.is_empty());
    assert_eq!("{}", empty.to_string());
    assert_eq!(None, empty.first());

    let union = DynamicBitSet::from_value(40).or(&DynamicBitSet::from_value(3));

    assert!(union.contains(40));
    assert!(union.contains(3));
    assert_eq!(2, union.len());

    let intersection = DynamicBitSet::from_range(0..=63).and(&DynamicBitSet::from_range(32..=95));

    assert_eq!((32..=63).collect::<Vec<_>>(), intersection.to_vec());

    assert!(DynamicBitSet::from_value(5).subtract(&DynamicBitSet::from_value(5)).is_empty());

    let vocabulary = ["A", "B", "C"];

    assert_eq!("A,C", DynamicBitSet::from_values([0, 2]).join_with(",", &vocabulary).to_string());
    assert_eq!("A,'5'", DynamicBitSet::from_values([0, 5]).join_with(",", &vocabulary).to_string());
}
