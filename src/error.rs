//! Result and Error types for indexsort.

/// Type alias for `Result<T, indexsort::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `indexsort` crate.
///
/// Returned before either sequence is touched, so on `Err` both slices are
/// exactly as the caller passed them.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("length of both sequences must match (values: {values}, index: {index})")]
    LengthMismatch { values: usize, index: usize },
}
