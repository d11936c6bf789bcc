//! Index sort algorithms.
//!
//! Every function here has the same contract:
//!
//! - `values` and `index` must have the same length, otherwise
//!   [`Error::LengthMismatch`](crate::Error::LengthMismatch) is returned and
//!   neither slice is touched.
//! - `index` must hold a permutation of `0..n` (usually the identity from
//!   [`identity_index`](crate::core::identity_index)). This is **not** checked
//!   in release builds; debug builds assert it for the strategies that read
//!   the labels.
//! - On success `values` is sorted by `compare`, and `index[k]` is the
//!   position `values[k]` had before the call.
//!
//! None of the strategies is stable: the relative order of elements that
//! compare equal is unspecified.
//!
//! They differ only in how they get there:
//!
//! | Function | Technique |
//! |---|---|
//! | [`vector_pair_sort`] | Sort `(value, position)` pairs, write back by position. |
//! | [`vector_pair_sort2`] | Same, write back by walking iterators. |
//! | [`double_sort`] | Sort the index indirectly, then sort the values again directly. |
//! | [`index_apply_sort`] | Sort the index indirectly, apply a copy of it to the values. |
//! | [`index_apply_sort2`] | Sort a copy of the index, copy it back, apply another copy. |
//! | [`permutate_in_place_sort`] | Sort the index indirectly, apply it with no extra buffer. |

use crate::core::{SortIndex, check_lengths, compare_by_label};
use crate::error::Result;
use crate::permutation::{apply_permutation, apply_permutation_in_place, is_permutation};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sorts `(value, position)` pairs and scatters them back by position.
///
/// The values are cloned into a temporary `Vec` of pairs together with their
/// position, that vector is sorted comparing only the values, and both slices
/// are then rebuilt from it with indexed writes.
///
/// The incoming contents of `index` are ignored: positions are recomputed
/// from `0`, so this is the one strategy that is correct even when `index`
/// holds garbage.
///
/// # Panics
///
/// Panics if a position does not fit `I` (more than 256 values with `u8`
/// labels, say). Labels are computed before anything is written back, so
/// both slices are still untouched at that point.
///
/// # Examples
///
/// ```
/// use indexsort::vector_pair_sort;
///
/// let mut values = vec![7, 45, 18, 33];
/// let mut index = vec![0u32, 1, 2, 3];
/// vector_pair_sort(&mut values, &mut index, |a, b| a.cmp(b)).unwrap();
///
/// assert_eq!(values, vec![7, 18, 33, 45]);
/// assert_eq!(index, vec![0, 2, 3, 1]);
/// ```
pub fn vector_pair_sort<V, I, F>(values: &mut [V], index: &mut [I], mut compare: F) -> Result<()>
where
    V: Clone,
    I: SortIndex,
    F: FnMut(&V, &V) -> Ordering,
{
    check_lengths(values.len(), index.len())?;
    log::trace!("vector_pair_sort: {} elements", values.len());

    let pairs = sorted_pairs(values, &mut compare);

    for (k, (value, label)) in pairs.into_iter().enumerate() {
        values[k] = value;
        index[k] = label;
    }
    Ok(())
}

/// Variation of [`vector_pair_sort`] that writes back by iteration.
///
/// Instead of indexing into `values` and `index`, both are walked in lockstep
/// with the sorted pairs. The result is identical; this exists to compare the
/// two write-back styles.
pub fn vector_pair_sort2<V, I, F>(values: &mut [V], index: &mut [I], mut compare: F) -> Result<()>
where
    V: Clone,
    I: SortIndex,
    F: FnMut(&V, &V) -> Ordering,
{
    check_lengths(values.len(), index.len())?;
    log::trace!("vector_pair_sort2: {} elements", values.len());

    let pairs = sorted_pairs(values, &mut compare);

    values
        .iter_mut()
        .zip(index.iter_mut())
        .zip(pairs)
        .for_each(|((value_slot, label_slot), (value, label))| {
            *value_slot = value;
            *label_slot = label;
        });
    Ok(())
}

/// Builds `(value, position)` pairs and sorts them by value.
fn sorted_pairs<V, I, F>(values: &[V], compare: &mut F) -> Vec<(V, I)>
where
    V: Clone,
    I: SortIndex,
    F: FnMut(&V, &V) -> Ordering,
{
    // Positions are counted here rather than read from the caller's index.
    let mut pairs: Vec<(V, I)> = values
        .iter()
        .enumerate()
        .map(|(n, value)| (value.clone(), I::from_usize(n)))
        .collect();

    pairs.sort_unstable_by(|a, b| compare(&a.0, &b.0));
    pairs
}

/// Sorts the index by the values it points at, then sorts the values directly.
///
/// Two independent unstable sorts over the same input; no permutation is
/// applied. When keys compare equal but are distinguishable (records sorted
/// by one field, say), `values[k]` and `index[k]` may come from different
/// original records, because nothing ties the two sorts' handling of equal
/// keys together. With fully distinct keys, or keys whose equality means
/// identity, the result matches every other strategy.
pub fn double_sort<V, I, F>(values: &mut [V], index: &mut [I], mut compare: F) -> Result<()>
where
    I: SortIndex,
    F: FnMut(&V, &V) -> Ordering,
{
    check_lengths(values.len(), index.len())?;
    debug_assert!(is_permutation(index), "index must be a permutation of 0..n");
    log::trace!("double_sort: {} elements", values.len());

    index.sort_unstable_by(|a, b| compare_by_label(values, &mut compare, a, b));
    values.sort_unstable_by(|a, b| compare(a, b));
    Ok(())
}

/// Sorts the index by the values it points at, then applies it to the values.
///
/// Applying a permutation consumes it, so the sorted index is copied and the
/// copy drives [`apply_permutation`]. The caller's `index` is never used as
/// scratch space.
///
/// # Examples
///
/// ```
/// use indexsort::index_apply_sort;
///
/// let mut values = vec!["pear", "apple", "fig"];
/// let mut index = vec![0usize, 1, 2];
/// index_apply_sort(&mut values, &mut index, |a, b| a.len().cmp(&b.len())).unwrap();
///
/// assert_eq!(values, vec!["fig", "pear", "apple"]);
/// assert_eq!(index, vec![2, 0, 1]);
/// ```
pub fn index_apply_sort<V, I, F>(values: &mut [V], index: &mut [I], mut compare: F) -> Result<()>
where
    I: SortIndex,
    F: FnMut(&V, &V) -> Ordering,
{
    check_lengths(values.len(), index.len())?;
    debug_assert!(is_permutation(index), "index must be a permutation of 0..n");
    log::trace!("index_apply_sort: {} elements", values.len());

    index.sort_unstable_by(|a, b| compare_by_label(values, &mut compare, a, b));

    let order = index.to_vec();
    apply_permutation(values, order)
}

/// Variation of [`index_apply_sort`] that sorts a private copy of the index.
///
/// The copy is sorted, written back into `index`, and then handed to
/// [`apply_permutation`]. Output is identical to [`index_apply_sort`]; this
/// exists to compare a copy-back against copying up front.
pub fn index_apply_sort2<V, I, F>(values: &mut [V], index: &mut [I], mut compare: F) -> Result<()>
where
    I: SortIndex,
    F: FnMut(&V, &V) -> Ordering,
{
    check_lengths(values.len(), index.len())?;
    debug_assert!(is_permutation(index), "index must be a permutation of 0..n");
    log::trace!("index_apply_sort2: {} elements", values.len());

    let mut order = index.to_vec();
    order.sort_unstable_by(|a, b| compare_by_label(values, &mut compare, a, b));

    index.copy_from_slice(&order);
    apply_permutation(values, order)
}

/// Sorts the index by the values it points at, then applies it in place.
///
/// The apply step uses [`apply_permutation_in_place`], which follows
/// permutation chains instead of consuming a copy. Beyond the sort itself
/// no memory is allocated.
///
/// A malformed `index` can make the apply step loop forever in release
/// builds.
pub fn permutate_in_place_sort<V, I, F>(
    values: &mut [V],
    index: &mut [I],
    mut compare: F,
) -> Result<()>
where
    I: SortIndex,
    F: FnMut(&V, &V) -> Ordering,
{
    check_lengths(values.len(), index.len())?;
    debug_assert!(is_permutation(index), "index must be a permutation of 0..n");
    log::trace!("permutate_in_place_sort: {} elements", values.len());

    index.sort_unstable_by(|a, b| compare_by_label(values, &mut compare, a, b));
    apply_permutation_in_place(values, index)
}

/// Selects one of the index sort strategies at runtime.
///
/// Dispatch is a plain `match` over monomorphized calls.
///
/// ```
/// use indexsort::Algorithm;
///
/// let algorithm: Algorithm = "permutate_in_place_sort".parse().unwrap();
///
/// let mut values = vec![3, 1, 2];
/// let mut index = vec![0u8, 1, 2];
/// algorithm.sort(&mut values, &mut index).unwrap();
///
/// assert_eq!(values, vec![1, 2, 3]);
/// assert_eq!(index, vec![1, 2, 0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    VectorPairSort,
    VectorPairSort2,
    DoubleSort,
    IndexApplySort,
    IndexApplySort2,
    PermutateInPlaceSort,
}

impl Algorithm {
    /// Every strategy, reference implementation first.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::VectorPairSort,
        Algorithm::VectorPairSort2,
        Algorithm::DoubleSort,
        Algorithm::IndexApplySort,
        Algorithm::IndexApplySort2,
        Algorithm::PermutateInPlaceSort,
    ];

    /// Name of the function implementing this strategy.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::VectorPairSort => "vector_pair_sort",
            Algorithm::VectorPairSort2 => "vector_pair_sort2",
            Algorithm::DoubleSort => "double_sort",
            Algorithm::IndexApplySort => "index_apply_sort",
            Algorithm::IndexApplySort2 => "index_apply_sort2",
            Algorithm::PermutateInPlaceSort => "permutate_in_place_sort",
        }
    }

    /// Whether the strategy ignores the incoming contents of `index`.
    pub fn ignores_input_index(self) -> bool {
        matches!(self, Algorithm::VectorPairSort | Algorithm::VectorPairSort2)
    }

    /// Runs this strategy with a custom comparator.
    pub fn sort_by<V, I, F>(self, values: &mut [V], index: &mut [I], compare: F) -> Result<()>
    where
        V: Clone,
        I: SortIndex,
        F: FnMut(&V, &V) -> Ordering,
    {
        match self {
            Algorithm::VectorPairSort => vector_pair_sort(values, index, compare),
            Algorithm::VectorPairSort2 => vector_pair_sort2(values, index, compare),
            Algorithm::DoubleSort => double_sort(values, index, compare),
            Algorithm::IndexApplySort => index_apply_sort(values, index, compare),
            Algorithm::IndexApplySort2 => index_apply_sort2(values, index, compare),
            Algorithm::PermutateInPlaceSort => permutate_in_place_sort(values, index, compare),
        }
    }

    /// Runs this strategy in ascending [`Ord`] order.
    pub fn sort<V, I>(self, values: &mut [V], index: &mut [I]) -> Result<()>
    where
        V: Ord + Clone,
        I: SortIndex,
    {
        self.sort_by(values, index, V::cmp)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown [`Algorithm`] name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown index sort algorithm \"{0}\"")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
