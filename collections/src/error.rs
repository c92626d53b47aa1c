//! Error types for list operations.
//!
//! Every failure is a local contract violation reported to the immediate
//! caller. Nothing is retried, and a failed operation leaves the list exactly
//! as it was.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors produced by [`List`](crate::List) implementations and enumerators.
#[derive(Error, Debug)]
pub enum ListError {
    /// An argument is outside its allowed domain (e.g. a capacity below the
    /// current length, or a unique view over a list that has duplicates).
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    /// An index is outside `[0, len)` (or `[0, len]` for insertion).
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A `(index, count)` pair describes a slice past the end of the list.
    #[error("range starting at {index} with {count} element(s) exceeds length {len}")]
    InvalidRange {
        index: usize,
        count: usize,
        len: usize,
    },

    /// The operation is rejected by a view (read-only or uniqueness constraint).
    #[error("`{operation}` is not supported: {reason}")]
    Unsupported {
        operation: &'static str,
        reason: &'static str,
    },

    /// An enumerator was used after its list changed, or while not positioned
    /// on an element.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// The allocator could not provide a buffer of the requested capacity.
    #[error("cannot allocate list buffer: {0}")]
    Allocation(TryReserveError),

    /// Encoding or decoding a persisted list failed.
    #[error("list codec error: {0}")]
    Codec(postcard::Error),
}

impl ListError {
    pub(crate) fn read_only(operation: &'static str) -> Self {
        ListError::Unsupported {
            operation,
            reason: "the list is read-only",
        }
    }

    pub(crate) fn duplicate(operation: &'static str) -> Self {
        ListError::Unsupported {
            operation,
            reason: "unique lists cannot contain duplicate elements",
        }
    }
}

/// Convenience alias used throughout the crate.
pub type ListResult<T> = Result<T, ListError>;
