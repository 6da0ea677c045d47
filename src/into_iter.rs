use std::fmt;
use std::iter::FusedIterator;
use std::vec;

use super::Deque;

/// An owning iterator over the elements of a `Deque`.
///
/// This `struct` is created by the [`into_iter`] method on [`Deque`] (provided by the
/// [`IntoIterator`] trait).
///
/// The window is moved out of the buffer once, up front; the iterator then never relocates.
///
/// [`into_iter`]: Deque::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
#[derive(Clone)]
pub struct IntoIter<T> {
    remaining: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(deque: Deque<T>) -> Self {
        IntoIter { remaining: Vec::from(deque).into_iter() }
    }

    /// Returns the elements not yet yielded as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.remaining.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.remaining.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining.size_hint()
    }

    fn count(self) -> usize {
        self.remaining.len()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.remaining.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
