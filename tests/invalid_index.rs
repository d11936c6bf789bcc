use indexsort::prelude::*;

const VALUES: [i32; 10] = [7, 45, 18, 33, 77, 96, 83, 80, 4, 51];
const SORTED_INDEX: [i32; 10] = [8, 0, 2, 3, 1, 9, 4, 7, 6, 5];

#[test]
fn test_vector_pair_sort_ignores_garbage_index() {
    let garbage_indexes: [[i32; 10]; 3] = [
        [0; 10],
        [9, 9, 9, 1, 1, 1, -5, -5, 42, 42],
        [i32::MAX; 10],
    ];

    for garbage in garbage_indexes {
        let mut values = VALUES.to_vec();
        let mut index = garbage.to_vec();
        vector_pair_sort(&mut values, &mut index, |a, b| a.cmp(b)).unwrap();
        assert_eq!(index, SORTED_INDEX);

        let mut values = VALUES.to_vec();
        let mut index = garbage.to_vec();
        vector_pair_sort2(&mut values, &mut index, |a, b| a.cmp(b)).unwrap();
        assert_eq!(index, SORTED_INDEX);
    }
}

#[test]
fn test_length_is_checked_before_labels() {
    // A malformed index of the wrong length is reported as a length mismatch.
    for algorithm in Algorithm::ALL {
        let mut values = VALUES.to_vec();
        let mut index = vec![0i32; 3];
        let err = algorithm.sort(&mut values, &mut index).unwrap_err();
        assert_eq!(err, Error::LengthMismatch { values: 10, index: 3 });
    }
}

#[cfg(debug_assertions)]
mod debug_checks {
    use super::*;

    fn sort_with_zeroed_index(algorithm: Algorithm) {
        let mut values = VALUES.to_vec();
        let mut index = vec![0i32; VALUES.len()];
        let _ = algorithm.sort(&mut values, &mut index);
    }

    #[test]
    #[should_panic(expected = "index must be a permutation")]
    fn test_double_sort_rejects_zeroed_index() {
        sort_with_zeroed_index(Algorithm::DoubleSort);
    }

    #[test]
    #[should_panic(expected = "index must be a permutation")]
    fn test_index_apply_sort_rejects_zeroed_index() {
        sort_with_zeroed_index(Algorithm::IndexApplySort);
    }

    #[test]
    #[should_panic(expected = "index must be a permutation")]
    fn test_index_apply_sort2_rejects_zeroed_index() {
        sort_with_zeroed_index(Algorithm::IndexApplySort2);
    }

    #[test]
    #[should_panic(expected = "index must be a permutation")]
    fn test_permutate_in_place_sort_rejects_zeroed_index() {
        sort_with_zeroed_index(Algorithm::PermutateInPlaceSort);
    }

    #[test]
    #[should_panic(expected = "index must be a permutation")]
    fn test_out_of_range_label() {
        let mut values = VALUES.to_vec();
        let mut index: Vec<i32> = (0..10).map(|i| i * 2).collect();
        let _ = permutate_in_place_sort(&mut values, &mut index, |a, b| a.cmp(b));
    }
}

#[test]
fn test_position_overflowing_label_type_panics_untouched() {
    let original: Vec<i32> = (0..300).rev().collect();

    for algorithm in [Algorithm::VectorPairSort, Algorithm::VectorPairSort2] {
        let mut values = original.clone();
        let mut index = vec![0u8; original.len()];

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            algorithm.sort(&mut values, &mut index)
        }));

        assert!(result.is_err(), "{algorithm}: 300 positions cannot fit u8 labels");
        assert_eq!(values, original, "{algorithm}");
        assert_eq!(index, vec![0u8; original.len()], "{algorithm}");
    }
}

#[test]
#[should_panic(expected = "position 128 does not fit the index label type i8")]
fn test_identity_index_overflow() {
    let _: Vec<i8> = identity_index(129);
}

#[test]
fn test_largest_fitting_label_type() {
    // 256 positions are exactly 0..=255.
    let original: Vec<i32> = (0..256).rev().collect();
    let mut values = original.clone();
    let mut index: Vec<u8> = identity_index(original.len());

    vector_pair_sort(&mut values, &mut index, |a, b| a.cmp(b)).unwrap();

    for (k, &label) in index.iter().enumerate() {
        assert_eq!(values[k], original[label as usize]);
    }
    assert_eq!(index[0], 255);
}
