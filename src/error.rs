use std::fmt;

use thiserror::Error;

/// One of the two ends of a [`Deque`](crate::Deque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum End {
    Front,
    Back,
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            End::Front => f.write_str("front"),
            End::Back => f.write_str("back"),
        }
    }
}

/// Errors returned by the fallible operations of [`Deque`](crate::Deque) and its cursors.
///
/// Every error is reported before the deque changes its logical content, so a failed call leaves
/// the elements exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DequeError {
    /// `pop_*`, `front` or `back` was called on an empty deque.
    #[error("deque is empty")]
    Empty,
    /// An index or cursor offset does not refer to an element.
    ///
    /// `index` is signed so that cursor offsets before the front can be reported. A `usize` index
    /// above `isize::MAX` is reported as `isize::MAX`.
    #[error("index out of range: the len is {len} but the index is {index}")]
    OutOfRange { index: isize, len: usize },
    /// A write was attempted past the physical edge of the buffer at the given end.
    ///
    /// The reallocation policy always leaves a free slot at the end that is about to be written,
    /// so this is only reported if that invariant is broken.
    #[error("no free slot left at the {0} of the buffer")]
    Full(End),
    /// The buffer for `capacity` slots could not be allocated.
    #[error("failed to allocate a buffer of {capacity} slots")]
    Allocation { capacity: usize },
}

impl DequeError {
    /// Builds [`DequeError::OutOfRange`] for a `usize` index, saturating it at `isize::MAX`.
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        DequeError::OutOfRange { index: isize::try_from(index).unwrap_or(isize::MAX), len }
    }
}
