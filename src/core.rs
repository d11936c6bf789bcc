//! Core traits and helpers shared by every index sort.
//!
//! This module defines:
//! - [`SortIndex`]: Integer types usable as permutation labels.
//! - [`check_lengths`]: The one precondition every algorithm validates.

use crate::error::{Error, Result};
use std::cmp::Ordering;

/// An integer type that can label a position in the values slice.
///
/// Every index sort reads labels from the index slice and uses them to address
/// the values slice, so a label has to convert losslessly to and from `usize`
/// for every position `0..n`.
///
/// A label read from the index that does not name a valid position (negative,
/// or `>= n`) makes the sort panic on slice access; it is never silently
/// accepted.
///
/// # Panics
///
/// [`from_usize`](SortIndex::from_usize) panics when `n` does not fit the
/// label type, e.g. position 256 as a `u8`. The sorts that compute labels
/// do so before writing to either slice, so such a panic leaves the
/// caller's data untouched.
///
/// # Examples
///
/// ```
/// use indexsort::core::SortIndex;
///
/// assert_eq!(7u32.to_usize(), 7);
/// assert_eq!(<i16 as SortIndex>::from_usize(3), 3i16);
/// ```
pub trait SortIndex: Copy {
    /// Position in the values slice this label refers to.
    ///
    /// Labels with no `usize` counterpart map to `usize::MAX`, which is never
    /// a valid position.
    fn to_usize(self) -> usize;

    /// Label for position `n`.
    fn from_usize(n: usize) -> Self;
}

macro_rules! impl_sort_index {
    ($($t:ty),* $(,)?) => {
        $(
            impl SortIndex for $t {
                #[inline(always)]
                fn to_usize(self) -> usize {
                    usize::try_from(self).unwrap_or(usize::MAX)
                }

                #[inline(always)]
                fn from_usize(n: usize) -> Self {
                    match <$t>::try_from(n) {
                        Ok(label) => label,
                        Err(_) => panic!(
                            "position {n} does not fit the index label type {}",
                            stringify!($t)
                        ),
                    }
                }
            }
        )*
    };
}

impl_sort_index!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Fails with [`Error::LengthMismatch`] unless both lengths are equal.
pub fn check_lengths(values: usize, index: usize) -> Result<()> {
    if values != index {
        log::debug!("rejecting index sort: {values} values but {index} index labels");
        return Err(Error::LengthMismatch { values, index });
    }
    Ok(())
}

/// Builds the identity permutation `0..n` as labels of type `I`.
///
/// This is the index every sort in this crate expects on entry.
///
/// # Panics
///
/// Panics if `n - 1` does not fit `I`.
///
/// ```
/// use indexsort::core::identity_index;
///
/// let index: Vec<u32> = identity_index(4);
/// assert_eq!(index, vec![0, 1, 2, 3]);
/// ```
pub fn identity_index<I: SortIndex>(n: usize) -> Vec<I> {
    (0..n).map(I::from_usize).collect()
}

/// Compares two labels by the values they point at.
#[inline(always)]
pub(crate) fn compare_by_label<V, I, F>(values: &[V], compare: &mut F, a: &I, b: &I) -> Ordering
where
    I: SortIndex,
    F: FnMut(&V, &V) -> Ordering,
{
    compare(&values[a.to_usize()], &values[b.to_usize()])
}
