//! Error type shared by every fallible view operation.

use thiserror::Error;

/// The error type for operations on a [`View`](crate::View).
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ViewError {
    /// A logical index fell outside `[-len, len)`.
    #[error("index {index} out of range for view of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// A range assignment was given the wrong number of values.
    #[error("attempt to assign sequence of size {found} to range of size {expected}")]
    LengthMismatch { expected: usize, found: usize },

    /// The operation is deliberately not provided.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// A key of one kind was paired with a value of another kind.
    #[error("expected {expected} key, found {found} key")]
    KeyKind {
        expected: &'static str,
        found: &'static str,
    },

    /// No element of the view compared equal to the value searched for.
    #[error("value not found in view")]
    NotFound,

    /// Slice step cannot be zero.
    #[error("slice step cannot be zero")]
    ZeroStep,

    /// The view addresses a physical position its origin no longer has.
    ///
    /// Raised after the origin shrank out-of-band; call `align()` first.
    #[error("view is stale: physical index {physical} but origin has length {origin_len}")]
    Stale { physical: usize, origin_len: usize },
}
