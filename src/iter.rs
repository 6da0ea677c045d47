use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::Cursor;

/// A mutable front-to-back iterator over the elements of a `Deque`.
///
/// The elements of a deque are contiguous, so this is the slice iterator over its window.
pub type IterMut<'a, T> = slice::IterMut<'a, T>;

/// A front-to-back iterator over the elements of a `Deque`.
///
/// This `struct` is created by the [`iter`] method on [`Deque`]. It walks a pair of cursors towards
/// each other and reads every element through the deque's indexing.
///
/// [`iter`]: crate::Deque::iter
/// [`Deque`]: crate::Deque
pub struct Iter<'a, T> {
    front: Cursor<'a, T>,
    back: Cursor<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(front: Cursor<'a, T>, back: Cursor<'a, T>) -> Self {
        Iter { front, back }
    }

    /// Creates an iterator over the elements from `front` up to, but not including, `back`.
    ///
    /// Returns `None` if the cursors belong to different deques or if `back` comes before
    /// `front`. Positions without an element are skipped: both cursors are clamped to
    /// `begin()..=end()` up front.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::{Deque, Iter};
    /// let deque = Deque::from([1, 2, 3, 4, 5]);
    /// let iter = Iter::between(deque.begin() + 1, deque.end() - 1).unwrap();
    /// assert_eq!(iter.copied().collect::<Vec<_>>(), [2, 3, 4]);
    /// ```
    pub fn between(front: Cursor<'a, T>, back: Cursor<'a, T>) -> Option<Self> {
        match back.distance(&front) {
            Some(distance) if distance >= 0 => {
                let deque = front.deque();
                let len = deque.end().offset();
                let start = front.offset().clamp(0, len);
                let end = back.offset().clamp(start, len);
                Some(Iter { front: Cursor::new(deque, start), back: Cursor::new(deque, end) })
            }
            _ => None,
        }
    }

    /// Returns the cursors delimiting the elements not yet yielded.
    pub fn cursors(&self) -> (Cursor<'a, T>, Cursor<'a, T>) {
        (self.front, self.back)
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { front: self.front, back: self.back }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

// front..back always lies within 0..=len, so every position holds an element
impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get().ok();
        self.front.move_next();
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.move_prev();
        self.back.get().ok()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        (self.back - self.front) as usize
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
