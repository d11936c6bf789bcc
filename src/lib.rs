//! # indexsort
//!
//! `indexsort` sorts a slice of values by a comparator and, in the same call, produces the
//! permutation that sorted it. Given `values` and an `index` slice holding `0..n`, every
//! algorithm leaves `values` sorted and `index[k]` naming the position `values[k]` came from.
//!
//! That permutation is what you need to sort records "by reference" of a key column, or to
//! reorder other parallel arrays the same way later on.
//!
//! ## Algorithms
//!
//! Six interchangeable strategies share one contract and differ only in technique:
//!
//! - [`vector_pair_sort`] / [`vector_pair_sort2`]: sort `(value, position)` pairs once and
//!   scatter them back. The reference implementation; ignores the incoming index contents.
//! - [`double_sort`]: sort the index indirectly and sort the values again directly.
//! - [`index_apply_sort`] / [`index_apply_sort2`]: sort the index indirectly, then apply a copy
//!   of it to the values.
//! - [`permutate_in_place_sort`]: sort the index indirectly, then apply it without allocating.
//!
//! [`Algorithm`] selects one of them at runtime.
//!
//! ## Usage
//!
//! ```rust
//! use indexsort::prelude::*;
//!
//! let mut values = vec![7, 45, 18, 33, 77, 96, 83, 80, 4, 51];
//! let mut index: Vec<u32> = identity_index(values.len());
//!
//! vector_pair_sort(&mut values, &mut index, |a, b| a.cmp(b)).unwrap();
//!
//! assert_eq!(values, vec![4, 7, 18, 33, 45, 51, 77, 80, 83, 96]);
//! assert_eq!(index, vec![8, 0, 2, 3, 1, 9, 4, 7, 6, 5]);
//! ```
//!
//! ### Errors
//!
//! The only checked precondition is that both slices have the same length. A mismatch returns
//! [`Error::LengthMismatch`] before anything is modified.
//!
//! ```rust
//! use indexsort::{Error, double_sort};
//!
//! let mut values = vec![3, 2, 1];
//! let mut index = vec![0usize, 1];
//!
//! let err = double_sort(&mut values, &mut index, |a, b| a.cmp(b)).unwrap_err();
//! assert_eq!(err, Error::LengthMismatch { values: 3, index: 2 });
//! assert_eq!(values, vec![3, 2, 1]);
//! ```
//!
//! Whether `index` is really a permutation of `0..n` is not checked in release builds. Debug
//! builds assert it for every algorithm that reads the labels.
//!
//! ## Performance Characteristics
//!
//! - **Time**: O(N log N) comparisons for every algorithm, plus O(N) data movement.
//! - **Memory**: O(N) auxiliary. [`permutate_in_place_sort`] and [`double_sort`] allocate
//!   nothing beyond what the standard library's unstable sort uses.

pub mod algo;
pub mod core;
pub mod error;
pub mod permutation;

pub use crate::algo::{
    Algorithm, UnknownAlgorithm, double_sort, index_apply_sort, index_apply_sort2,
    permutate_in_place_sort, vector_pair_sort, vector_pair_sort2,
};
pub use crate::core::SortIndex;
pub use crate::error::{Error, Result};

pub mod prelude {
    pub use crate::algo::{
        Algorithm, double_sort, index_apply_sort, index_apply_sort2, permutate_in_place_sort,
        vector_pair_sort, vector_pair_sort2,
    };
    pub use crate::core::{SortIndex, identity_index};
    pub use crate::error::{Error, Result};
}
