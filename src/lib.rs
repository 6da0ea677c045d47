//! A double-ended queue kept centered in one contiguous buffer.
//!
//! [`Deque`] stores its elements as a single contiguous run (the *logical window*) inside a
//! heap-allocated buffer whose capacity is always a power of two. Free slots are kept on both
//! sides of the window, so pushing at either end is a plain cursor move most of the time. When an
//! end runs out of slack, or when the deque has become sparse after pops, the window is moved
//! into a freshly allocated buffer and re-centered:
//!
//! ```text
//!                    capacity / 4
//!                  |<--------->|
//! +---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+
//! |   |   |   |   | 0 | 1 | 2 | 3 | 4 | 5 |   |   |   |   |   |   |
//! +---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+
//!               ^                       ^
//!   l_pointer --+                       +-- r_pointer
//! ```
//!
//! Because the window is never wrapped around the buffer:
//! - indexing is a single addition, no masks or modular arithmetic
//! - the whole content is available as one slice, see [`Deque::as_slice`]
//!
//! The price is that every slot holds a valid `T`, so most operations require `T: Default`, and
//! that a relocation moves every element.
//!
//! Pushing, popping and indexing report failures through [`DequeError`] instead of panicking:
//!
//! ```
//! use centered_deque::{Deque, DequeError};
//!
//! let mut deque = Deque::new();
//! deque.push_back(2)?;
//! deque.push_back(3)?;
//! deque.push_front(1)?;
//! assert_eq!(deque, [1, 2, 3]);
//!
//! assert_eq!(deque.pop_front(), Ok(1));
//! assert_eq!(deque.at(5), Err(DequeError::OutOfRange { index: 5, len: 2 }));
//! # Ok::<(), DequeError>(())
//! ```
//!
//! Positions inside a deque are described by random-access [cursors](cursor), which follow the
//! conventions of C++ sequence iterators: `begin`/`end`, reverse cursors and offset arithmetic.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use std::fmt;
use std::mem;

#[macro_use]
mod macros;

mod buffer;
pub mod cursor;
mod error;
mod into_iter;
mod iter;

use buffer::Buffer;
pub use cursor::{Cursor, CursorMut, Position, RevCursor};
pub use error::{DequeError, End};
pub use into_iter::IntoIter;
pub use iter::{Iter, IterMut};


/// Capacity of a fresh deque and the floor below which it never shrinks.
const MIN_CAPACITY: usize = 2;

/// Value of `l_pointer` when the window starts at slot 0, i.e. "one before index 0".
const BEFORE_BEGIN: usize = usize::MAX;

/// Outcome of the reallocation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reallocation {
    /// Halve the capacity.
    Shrink,
    /// Keep the capacity but re-center the window.
    Stay,
    /// Double the capacity.
    Grow,
    None,
}

/// A double-ended queue backed by one contiguous buffer.
///
/// See the [crate-level documentation](crate) for an overview of the layout.
pub struct Deque<T> {
    // l_pointer is the slot right before the first element and r_pointer the slot of the last
    // one. Both use wrapping arithmetic: l_pointer is BEFORE_BEGIN when the window starts at
    // slot 0, and an empty deque centered at slot 0 has both pointers there.
    // len == r_pointer - l_pointer (wrapping), elements live in l_pointer + 1 ..= r_pointer.
    // 2 <= capacity, capacity is a power of two, l_pointer + 1 + len <= capacity
    l_pointer: usize,
    r_pointer: usize,
    buf: Buffer<T>,
}

impl<T: Default> Deque<T> {
    /// Creates an empty deque with the minimum capacity of two slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use centered_deque::Deque;
    ///
    /// let deque: Deque<i32> = Deque::new();
    /// assert_eq!(deque.capacity(), 2);
    /// ```
    pub fn new() -> Self {
        Self { l_pointer: 0, r_pointer: 0, buf: Buffer::with_capacity(MIN_CAPACITY) }
    }

    /// Appends an element to the back of the deque.
    ///
    /// This is amortized *O(1)*; a call that has to relocate the elements takes *O(n)*.
    ///
    /// # Errors
    ///
    /// Fails with [`DequeError::Allocation`] if a larger buffer is needed but cannot be allocated.
    /// The deque keeps all of its elements in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_back(1).unwrap();
    /// deque.push_back(2).unwrap();
    /// deque.push_back(3).unwrap();
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn push_back(&mut self, value: T) -> Result<(), DequeError> {
        self.make_room(End::Back)?;
        self.place_back(value)
    }

    /// Prepends an element to the front of the deque.
    ///
    /// # Errors
    ///
    /// Fails with [`DequeError::Allocation`] if a larger buffer is needed but cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_front(1).unwrap();
    /// deque.push_front(2).unwrap();
    /// deque.push_front(3).unwrap();
    /// assert_eq!(deque, [3, 2, 1]);
    /// ```
    pub fn push_front(&mut self, value: T) -> Result<(), DequeError> {
        self.make_room(End::Front)?;
        self.place_front(value)
    }

    /// Removes the first element and returns it.
    ///
    /// The buffer may shrink afterwards if the deque has become sparse.
    ///
    /// # Errors
    ///
    /// Fails with [`DequeError::Empty`] if the deque is empty, without changing it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::{Deque, DequeError};
    /// let mut deque = Deque::from([1, 2]);
    /// assert_eq!(deque.pop_front(), Ok(1));
    /// assert_eq!(deque.pop_front(), Ok(2));
    /// assert_eq!(deque.pop_front(), Err(DequeError::Empty));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::Empty);
        }
        self.l_pointer = self.l_pointer.wrapping_add(1);
        let value = mem::take(&mut self.buf[self.l_pointer]);
        self.settle();
        Ok(value)
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// Fails with [`DequeError::Empty`] if the deque is empty, without changing it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::{Deque, DequeError};
    /// let mut deque = Deque::from([1, 2]);
    /// assert_eq!(deque.pop_back(), Ok(2));
    /// assert_eq!(deque.pop_back(), Ok(1));
    /// assert_eq!(deque.pop_back(), Err(DequeError::Empty));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::Empty);
        }
        let value = mem::take(&mut self.buf[self.r_pointer]);
        self.r_pointer = self.r_pointer.wrapping_sub(1);
        self.settle();
        Ok(value)
    }

    /// Removes all elements and goes back to the minimum capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::Deque;
    /// let mut deque: Deque<_> = (0..100).collect();
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 2);
    /// ```
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Decides whether the buffer has to change before a write at `edge`, or after a pop when
    /// `edge` is `None`.
    fn reallocation(&self, edge: Option<End>) -> Reallocation {
        let len = self.len();
        let cap = self.capacity();
        if len <= cap / 4 && cap > MIN_CAPACITY {
            return Reallocation::Shrink;
        }
        match edge {
            // at the minimum capacity the centering offset is 0, re-centering frees nothing
            Some(end) if self.at_edge(end) => {
                if len < cap / 2 && cap > MIN_CAPACITY {
                    Reallocation::Stay
                } else {
                    Reallocation::Grow
                }
            }
            _ => Reallocation::None,
        }
    }

    /// Moves the window into a new buffer sized according to `kind` and centers it there.
    fn reallocate(&mut self, kind: Reallocation) -> Result<(), DequeError> {
        let cap = self.capacity();
        let new_cap = match kind {
            Reallocation::None => return Ok(()),
            Reallocation::Shrink => cap / 2,
            Reallocation::Stay => cap,
            Reallocation::Grow => {
                cap.checked_mul(2).ok_or(DequeError::Allocation { capacity: usize::MAX })?
            }
        };

        let len = self.len();
        let first = self.l_pointer.wrapping_add(1);
        let offset = new_cap / 4;
        self.buf.relocate(first..first + len, new_cap, offset)?;
        self.l_pointer = offset.wrapping_sub(1);
        self.r_pointer = self.l_pointer.wrapping_add(len);
        Ok(())
    }

    /// Runs the policy ahead of a write at `end`.
    fn make_room(&mut self, end: End) -> Result<(), DequeError> {
        self.reallocate(self.reallocation(Some(end)))?;
        if self.at_edge(end) {
            // a shrink down to MIN_CAPACITY can leave no slack at either end
            self.reallocate(Reallocation::Grow)?;
        }
        Ok(())
    }

    /// Runs the policy after a pop.
    fn settle(&mut self) {
        // a failed shrink keeps the current buffer, which still holds every element
        let _ = self.reallocate(self.reallocation(None));
    }
}

impl<T> Deque<T> {
    /// Returns the number of slots in the buffer.
    ///
    /// The capacity is always a power of two and at least 2. It is not the number of elements
    /// the deque can take before reallocating, since slack is kept at both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::Deque;
    /// let deque = Deque::from([1, 2, 3]);
    /// assert!(deque.capacity() >= 3);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of elements in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::Deque;
    /// let deque = Deque::from([1, 2, 3]);
    /// assert_eq!(deque.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.r_pointer.wrapping_sub(self.l_pointer)
    }

    /// Returns whether the deque is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the elements of the deque, front to back, as one slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_back(2).unwrap();
    /// deque.push_front(1).unwrap();
    /// assert_eq!(deque.as_slice(), &[1, 2]);
    /// ```
    pub fn as_slice(&self) -> &[T] {
        let first = self.l_pointer.wrapping_add(1);
        &self.buf[first..first + self.len()]
    }

    /// Returns the elements of the deque, front to back, as one mutable slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::Deque;
    /// let mut deque = Deque::from([3, 1, 2]);
    /// deque.as_mut_slice().sort();
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let first = self.l_pointer.wrapping_add(1);
        let len = self.len();
        &mut self.buf[first..first + len]
    }

    /// Provides a reference to the element at the given index, or `None` if it is out of range.
    ///
    /// Element at index 0 is the front of the deque.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Provides a mutable reference to the element at the given index, or `None` if it is out of
    /// range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Provides a reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Fails with [`DequeError::OutOfRange`] if `index >= len`. An index above `isize::MAX` is
    /// reported as `isize::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::{Deque, DequeError};
    /// let deque = Deque::from([1, 2, 3]);
    /// assert_eq!(deque.at(1), Ok(&2));
    /// assert_eq!(deque.at(3), Err(DequeError::OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, DequeError> {
        let len = self.len();
        self.get(index).ok_or_else(|| DequeError::out_of_range(index, len))
    }

    /// Provides a mutable reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Fails with [`DequeError::OutOfRange`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, DequeError> {
        let len = self.len();
        self.get_mut(index).ok_or_else(|| DequeError::out_of_range(index, len))
    }

    /// Provides a reference to the front element.
    ///
    /// # Errors
    ///
    /// Fails with [`DequeError::Empty`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::{Deque, DequeError};
    /// let mut deque = Deque::new();
    /// assert_eq!(deque.front(), Err(DequeError::Empty));
    /// deque.push_back(1).unwrap();
    /// deque.push_back(2).unwrap();
    /// assert_eq!(deque.front(), Ok(&1));
    /// ```
    pub fn front(&self) -> Result<&T, DequeError> {
        self.as_slice().first().ok_or(DequeError::Empty)
    }

    /// Provides a mutable reference to the front element.
    ///
    /// # Errors
    ///
    /// Fails with [`DequeError::Empty`] if the deque is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, DequeError> {
        self.as_mut_slice().first_mut().ok_or(DequeError::Empty)
    }

    /// Provides a reference to the back element.
    ///
    /// # Errors
    ///
    /// Fails with [`DequeError::Empty`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::{Deque, DequeError};
    /// let mut deque = Deque::new();
    /// assert_eq!(deque.back(), Err(DequeError::Empty));
    /// deque.push_back(1).unwrap();
    /// deque.push_back(2).unwrap();
    /// assert_eq!(deque.back(), Ok(&2));
    /// ```
    pub fn back(&self) -> Result<&T, DequeError> {
        self.as_slice().last().ok_or(DequeError::Empty)
    }

    /// Provides a mutable reference to the back element.
    ///
    /// # Errors
    ///
    /// Fails with [`DequeError::Empty`] if the deque is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, DequeError> {
        self.as_mut_slice().last_mut().ok_or(DequeError::Empty)
    }

    /// Returns `true` if the deque contains an element equal to the given value.
    ///
    /// This operation is *O(n)*.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.as_slice().contains(x)
    }

    /// Returns a cursor at the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::Deque;
    /// let deque = Deque::from([1, 2, 3]);
    /// let begin = deque.begin();
    /// assert_eq!(begin.get(), Ok(&1));
    /// assert_eq!((begin + 2).get(), Ok(&3));
    /// ```
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Returns a cursor one past the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::Deque;
    /// let deque = Deque::from([1, 2, 3]);
    /// assert_eq!(deque.end() - deque.begin(), 3);
    /// assert!(deque.end().get().is_err());
    /// ```
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.signed_len())
    }

    /// Same as [`begin`](Deque::begin).
    pub fn cbegin(&self) -> Cursor<'_, T> {
        self.begin()
    }

    /// Same as [`end`](Deque::end).
    pub fn cend(&self) -> Cursor<'_, T> {
        self.end()
    }

    /// Returns a reverse cursor at the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::Deque;
    /// let deque = Deque::from([1, 2, 3]);
    /// let mut cursor = deque.rbegin();
    /// let mut reversed = Vec::new();
    /// while cursor != deque.rend() {
    ///     reversed.push(*cursor.get().unwrap());
    ///     cursor.move_next();
    /// }
    /// assert_eq!(reversed, [3, 2, 1]);
    /// ```
    pub fn rbegin(&self) -> RevCursor<Cursor<'_, T>> {
        RevCursor::new(self.end())
    }

    /// Returns a reverse cursor one before the first element.
    pub fn rend(&self) -> RevCursor<Cursor<'_, T>> {
        RevCursor::new(self.begin())
    }

    /// Same as [`rbegin`](Deque::rbegin).
    pub fn crbegin(&self) -> RevCursor<Cursor<'_, T>> {
        self.rbegin()
    }

    /// Same as [`rend`](Deque::rend).
    pub fn crend(&self) -> RevCursor<Cursor<'_, T>> {
        self.rend()
    }

    /// Returns a mutable cursor at the first element.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// Returns a mutable cursor one past the last element.
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.signed_len();
        CursorMut::new(self, len)
    }

    /// Returns a mutable reverse cursor at the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::Deque;
    /// let mut deque = Deque::from([1, 2, 3]);
    /// let mut cursor = deque.rbegin_mut();
    /// *cursor.get_mut().unwrap() *= 10;
    /// cursor += 1;
    /// *cursor.get_mut().unwrap() *= 10;
    /// assert_eq!(deque, [1, 20, 30]);
    /// ```
    pub fn rbegin_mut(&mut self) -> RevCursor<CursorMut<'_, T>> {
        RevCursor::new(self.end_mut())
    }

    /// Returns a mutable reverse cursor one before the first element.
    pub fn rend_mut(&mut self) -> RevCursor<CursorMut<'_, T>> {
        RevCursor::new(self.begin_mut())
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::Deque;
    /// let deque = Deque::from([5, 3, 4]);
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = deque.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.begin(), self.end())
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::Deque;
    /// let mut deque = Deque::from([5, 3, 4]);
    /// for num in deque.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// assert_eq!(deque, [3, 1, 2]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    pub(crate) fn resolve(&self, offset: isize) -> Result<&T, DequeError> {
        usize::try_from(offset)
            .ok()
            .and_then(|index| self.get(index))
            .ok_or(DequeError::OutOfRange { index: offset, len: self.len() })
    }

    pub(crate) fn resolve_mut(&mut self, offset: isize) -> Result<&mut T, DequeError> {
        let len = self.len();
        usize::try_from(offset)
            .ok()
            .and_then(|index| self.get_mut(index))
            .ok_or(DequeError::OutOfRange { index: offset, len })
    }

    fn signed_len(&self) -> isize {
        // a buffer never holds more than isize::MAX bytes, so this only saturates for ZSTs
        isize::try_from(self.len()).unwrap_or(isize::MAX)
    }

    /// Returns whether the next write at `end` would leave the buffer.
    fn at_edge(&self, end: End) -> bool {
        match end {
            End::Front => self.l_pointer == BEFORE_BEGIN,
            End::Back => self.r_pointer.wrapping_add(1) == self.capacity(),
        }
    }

    /// Writes `value` into the slot after the window without consulting the policy.
    fn place_back(&mut self, value: T) -> Result<(), DequeError> {
        let slot = self.r_pointer.wrapping_add(1);
        if slot >= self.capacity() {
            return Err(DequeError::Full(End::Back));
        }
        self.buf[slot] = value;
        self.r_pointer = slot;
        Ok(())
    }

    /// Writes `value` into the slot before the window without consulting the policy.
    fn place_front(&mut self, value: T) -> Result<(), DequeError> {
        if self.l_pointer == BEFORE_BEGIN {
            return Err(DequeError::Full(End::Front));
        }
        self.buf[self.l_pointer] = value;
        self.l_pointer = self.l_pointer.wrapping_sub(1);
        Ok(())
    }
}

impl<T: Clone> Clone for Deque<T> {
    /// Copies the whole buffer, keeping the capacity and the position of the window.
    fn clone(&self) -> Self {
        Self { l_pointer: self.l_pointer, r_pointer: self.r_pointer, buf: self.buf.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.buf.clone_from(&source.buf);
        self.l_pointer = source.l_pointer;
        self.r_pointer = source.r_pointer;
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Default> Default for Deque<T> {
    /// Creates an empty deque.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> Extend<T> for Deque<T> {
    /// # Panics
    ///
    /// Panics if the buffer cannot grow.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(err) = self.push_back(value) {
                capacity_exhausted(err);
            }
        }
    }
}

impl<'a, T: 'a + Copy + Default> Extend<&'a T> for Deque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Default> From<Vec<T>> for Deque<T> {
    fn from(other: Vec<T>) -> Self {
        other.into_iter().collect()
    }
}

impl<T> From<Deque<T>> for Vec<T> {
    /// Moves the elements out of the window; the buffer is dropped afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::Deque;
    /// let mut deque = Deque::from([2, 3]);
    /// deque.push_front(1).unwrap();
    /// assert_eq!(Vec::from(deque), vec![1, 2, 3]);
    /// ```
    fn from(other: Deque<T>) -> Self {
        let first = other.l_pointer.wrapping_add(1);
        let len = other.len();
        let mut slots = Vec::from(other.buf.into_boxed_slice());
        slots.truncate(first + len);
        slots.split_off(first)
    }
}

impl<T: Default, const N: usize> From<[T; N]> for Deque<T> {
    /// Converts a `[T; N]` into a `Deque<T>`.
    ///
    /// ```
    /// # use centered_deque::Deque;
    /// let deq1 = Deque::from([1, 2, 3, 4]);
    /// let deq2: Deque<_> = [1, 2, 3, 4].into();
    /// assert_eq!(deq1, deq2);
    /// ```
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T: Default> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.get(index).unwrap_or_else(|| index_out_of_bounds(self.len(), index))
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        self.get_mut(index).unwrap_or_else(|| index_out_of_bounds(len, index))
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the deque into a front-to-back iterator yielding elements by value.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: PartialOrd> PartialOrd for Deque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Deque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Deque<T> {}

__impl_slice_eq! { [] Deque<T>, Vec<U>, }
__impl_slice_eq! { [] Deque<T>, &[U], }
__impl_slice_eq! { [] Deque<T>, &mut [U], }
__impl_slice_eq! { [const N: usize] Deque<T>, [U; N], }
__impl_slice_eq! { [const N: usize] Deque<T>, &[U; N], }
__impl_slice_eq! { [const N: usize] Deque<T>, &mut [U; N], }

fn index_out_of_bounds(len: usize, index: usize) -> ! {
    panic!("index out of range: the len is {} but the index is {}", len, index);
}

#[cold]
fn capacity_exhausted(err: DequeError) -> ! {
    panic!("{}", err);
}
