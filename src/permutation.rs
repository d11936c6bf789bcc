//! Permutation helpers used by the index sorts.
//!
//! Throughout the crate an order `p` is read as "slot `k` receives the element
//! that used to live at `p[k]`", so applying it yields `values[k] = old[p[k]]`.

use crate::core::{SortIndex, check_lengths, compare_by_label};
use crate::error::Result;
use std::cmp::Ordering;

/// Returns `true` if `index` holds every label `0..index.len()` exactly once.
///
/// Runs in O(n) time with an O(n) seen-map. None of the sorts call this in
/// release builds.
///
/// ```
/// use indexsort::permutation::is_permutation;
///
/// assert!(is_permutation(&[2u32, 0, 1]));
/// assert!(!is_permutation(&[0u32, 0, 1]));
/// assert!(!is_permutation(&[0i32, -1]));
/// ```
pub fn is_permutation<I: SortIndex>(index: &[I]) -> bool {
    let mut seen = vec![false; index.len()];
    index.iter().all(|label| {
        let n = label.to_usize();
        n < seen.len() && !std::mem::replace(&mut seen[n], true)
    })
}

/// Applies `order` to `values`, consuming `order` as scratch space.
///
/// Each cycle of the permutation is walked once, swapping elements into
/// place and marking visited slots by resetting them to their own position.
/// That marking is what destroys `order`, so callers hand in a copy they
/// no longer need.
pub fn apply_permutation<T, I: SortIndex>(values: &mut [T], mut order: Vec<I>) -> Result<()> {
    check_lengths(values.len(), order.len())?;

    for i in 0..values.len() {
        let mut current = i;
        while order[current].to_usize() != i {
            let next = order[current].to_usize();
            values.swap(current, next);
            order[current] = I::from_usize(current); // Mark as visited/placed
            current = next;
        }
        order[current] = I::from_usize(current);
    }
    Ok(())
}

/// Applies `order` to `values` without any auxiliary storage.
///
/// For every slot `i` the chain `order[i], order[order[i]], ...` is followed
/// while it points below `i`: those slots were already filled, and the chain
/// leads to where their original occupant was swapped to. `order` is only
/// read.
///
/// A malformed `order` can make the chain walk forever.
pub fn apply_permutation_in_place<T, I: SortIndex>(values: &mut [T], order: &[I]) -> Result<()> {
    check_lengths(values.len(), order.len())?;

    for i in 0..values.len() {
        let mut source = order[i].to_usize();
        while source < i {
            source = order[source].to_usize();
        }
        values.swap(i, source);
    }
    Ok(())
}

/// Sorts only `index`, ordering labels by the values they point at.
///
/// `values` is left untouched. Afterwards `index` is the permutation that
/// would sort `values`.
///
/// ```
/// use indexsort::permutation::sort_index_by_values;
///
/// let values = [30, 10, 20];
/// let mut index = [0usize, 1, 2];
/// sort_index_by_values(&values, &mut index, |a, b| a.cmp(b)).unwrap();
/// assert_eq!(index, [1, 2, 0]);
/// ```
pub fn sort_index_by_values<V, I, F>(values: &[V], index: &mut [I], mut compare: F) -> Result<()>
where
    I: SortIndex,
    F: FnMut(&V, &V) -> Ordering,
{
    check_lengths(values.len(), index.len())?;
    index.sort_unstable_by(|a, b| compare_by_label(values, &mut compare, a, b));
    Ok(())
}
