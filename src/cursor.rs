//! Random-access positions over a [`Deque`].
//!
//! A cursor is a signed logical offset paired with a borrow of the deque it was created from.
//! Moving a cursor is plain offset arithmetic and never touches the deque. Reading through a
//! cursor goes back through the deque's bounds-checked indexing, so it always sees the element
//! that currently sits at that logical offset, wherever the deque keeps it in its buffer.
//!
//! Offsets may leave `0..len` freely; only dereferencing such a cursor fails, with
//! [`DequeError::OutOfRange`]. Offset arithmetic saturates at the bounds of `isize`, so the
//! distance between two far-apart cursors is clamped to `isize::MIN..=isize::MAX` as well.
//!
//! ```
//! # use centered_deque::Deque;
//! let deque = Deque::from([1, 2, 3, 4]);
//!
//! let mut cursor = deque.begin();
//! cursor += 2;
//! assert_eq!(cursor.get(), Ok(&3));
//! assert_eq!(deque.end() - cursor, 2);
//! assert!(deque.end().get().is_err());
//!
//! let rev = deque.rbegin();
//! assert_eq!(rev.get(), Ok(&4));
//! assert_eq!((rev + 3).get(), Ok(&1));
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use std::ptr;

use crate::{Deque, DequeError};

/// A position that moves by signed offsets.
///
/// Implemented by [`Cursor`] and [`CursorMut`], which lets [`RevCursor`] reverse either of them.
pub trait Position {
    /// The logical offset of this position.
    fn offset(&self) -> isize;

    /// Moves the position by `n`, which may be negative.
    fn advance(&mut self, n: isize);
}

/// A read-only random-access cursor into a [`Deque`].
///
/// Created by [`Deque::begin`], [`Deque::end`] and their `c`-prefixed aliases. Cursors are `Copy`,
/// so a post-increment is simply a copy followed by [`move_next`](Cursor::move_next).
///
/// Two cursors are equal if they point at the same offset of the same deque instance. Cursors of
/// different deques are never equal and have no ordering.
pub struct Cursor<'a, T> {
    offset: isize,
    deque: &'a Deque<T>,
}

impl<'a, T> Cursor<'a, T> {
    /// Creates a cursor at `offset` into `deque`.
    pub fn new(deque: &'a Deque<T>, offset: isize) -> Self {
        Self { offset, deque }
    }

    /// Returns the logical offset of the cursor.
    #[inline]
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Returns the deque this cursor points into.
    pub fn deque(&self) -> &'a Deque<T> {
        self.deque
    }

    /// Returns the element at the cursor.
    ///
    /// # Errors
    ///
    /// Fails with [`DequeError::OutOfRange`] if the cursor is before the first element or at or
    /// past [`Deque::end`].
    #[inline]
    pub fn get(&self) -> Result<&'a T, DequeError> {
        self.deque.resolve(self.offset)
    }

    /// Returns the element `n` positions away from the cursor.
    ///
    /// # Errors
    ///
    /// Fails with [`DequeError::OutOfRange`] if that position holds no element.
    pub fn at(&self, n: isize) -> Result<&'a T, DequeError> {
        self.deque.resolve(self.offset.saturating_add(n))
    }

    /// Moves the cursor one element towards the back.
    #[inline]
    pub fn move_next(&mut self) {
        self.offset = self.offset.saturating_add(1);
    }

    /// Moves the cursor one element towards the front.
    #[inline]
    pub fn move_prev(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Returns `self - origin`, or `None` if the two cursors belong to different deques.
    pub fn distance(&self, origin: &Self) -> Option<isize> {
        ptr::eq(self.deque, origin.deque).then(|| self.offset.saturating_sub(origin.offset))
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("offset", &self.offset).finish()
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.deque, other.deque) && self.offset == other.offset
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if ptr::eq(self.deque, other.deque) {
            Some(self.offset.cmp(&other.offset))
        } else {
            None
        }
    }
}

impl<T> Position for Cursor<'_, T> {
    fn offset(&self) -> isize {
        self.offset
    }

    fn advance(&mut self, n: isize) {
        self.offset = self.offset.saturating_add(n);
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.offset = self.offset.saturating_add(n);
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.offset = self.offset.saturating_sub(n);
    }
}

impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<'a, T> Add<Cursor<'a, T>> for isize {
    type Output = Cursor<'a, T>;

    fn add(self, cursor: Cursor<'a, T>) -> Cursor<'a, T> {
        cursor + self
    }
}

impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<T> Sub for Cursor<'_, T> {
    type Output = isize;

    /// Returns the number of elements between the two cursors.
    ///
    /// # Panics
    ///
    /// Panics if the cursors belong to different deques. Use [`Cursor::distance`] to check instead.
    fn sub(self, origin: Self) -> isize {
        self.distance(&origin).unwrap_or_else(|| foreign_cursor())
    }
}

/// A random-access cursor with write access to the elements of a [`Deque`].
///
/// Created by [`Deque::begin_mut`] and [`Deque::end_mut`]. It holds the deque exclusively, so the
/// deque cannot reallocate while the cursor is alive.
pub struct CursorMut<'a, T> {
    offset: isize,
    deque: &'a mut Deque<T>,
}

impl<'a, T> CursorMut<'a, T> {
    /// Creates a cursor at `offset` into `deque`.
    pub fn new(deque: &'a mut Deque<T>, offset: isize) -> Self {
        Self { offset, deque }
    }

    /// Returns the logical offset of the cursor.
    #[inline]
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Returns the element at the cursor.
    ///
    /// # Errors
    ///
    /// Fails with [`DequeError::OutOfRange`] if the cursor does not point at an element.
    pub fn get(&self) -> Result<&T, DequeError> {
        self.deque.resolve(self.offset)
    }

    /// Returns the element at the cursor mutably.
    ///
    /// # Errors
    ///
    /// Fails with [`DequeError::OutOfRange`] if the cursor does not point at an element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use centered_deque::Deque;
    /// let mut deque = Deque::from([1, 2, 3]);
    /// let mut cursor = deque.begin_mut();
    /// cursor += 1;
    /// *cursor.get_mut().unwrap() = 20;
    /// assert_eq!(deque, [1, 20, 3]);
    /// ```
    pub fn get_mut(&mut self) -> Result<&mut T, DequeError> {
        self.deque.resolve_mut(self.offset)
    }

    /// Returns the element `n` positions away from the cursor.
    pub fn at(&self, n: isize) -> Result<&T, DequeError> {
        self.deque.resolve(self.offset.saturating_add(n))
    }

    /// Returns the element `n` positions away from the cursor mutably.
    pub fn at_mut(&mut self, n: isize) -> Result<&mut T, DequeError> {
        self.deque.resolve_mut(self.offset.saturating_add(n))
    }

    #[inline]
    pub fn move_next(&mut self) {
        self.offset = self.offset.saturating_add(1);
    }

    #[inline]
    pub fn move_prev(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Returns a read-only cursor at the same position, borrowing from this one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.deque, self.offset)
    }

    /// Converts this cursor into a read-only cursor at the same position.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.deque, self.offset)
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut").field("offset", &self.offset).finish()
    }
}

impl<T> Position for CursorMut<'_, T> {
    fn offset(&self) -> isize {
        self.offset
    }

    fn advance(&mut self, n: isize) {
        self.offset = self.offset.saturating_add(n);
    }
}

impl<T> AddAssign<isize> for CursorMut<'_, T> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.offset = self.offset.saturating_add(n);
    }
}

impl<T> SubAssign<isize> for CursorMut<'_, T> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.offset = self.offset.saturating_sub(n);
    }
}

impl<T> Add<isize> for CursorMut<'_, T> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<T> Sub<isize> for CursorMut<'_, T> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

/// A cursor that walks a deque from back to front.
///
/// A reverse cursor built from the base position `k` reads the element at `k - 1`, so
/// `RevCursor::new(deque.end())` reads the last element and `RevCursor::new(deque.begin())` is the
/// past-the-end position of the reversed sequence. Advancing it moves the base towards the front
/// and the ordering of reverse cursors is the opposite of their bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevCursor<C> {
    base: C,
}

impl<C: Position> RevCursor<C> {
    pub fn new(base: C) -> Self {
        Self { base }
    }

    /// Returns the underlying forward position, which is one past the element this cursor reads.
    pub fn base(&self) -> &C {
        &self.base
    }

    pub fn into_base(self) -> C {
        self.base
    }

    #[inline]
    pub fn move_next(&mut self) {
        self.base.advance(-1);
    }

    #[inline]
    pub fn move_prev(&mut self) {
        self.base.advance(1);
    }
}

impl<'a, T> RevCursor<Cursor<'a, T>> {
    /// Returns the element at the cursor.
    pub fn get(&self) -> Result<&'a T, DequeError> {
        self.base.at(-1)
    }

    /// Returns the element `n` positions further along the reversed sequence.
    pub fn at(&self, n: isize) -> Result<&'a T, DequeError> {
        self.base.at(-1 - n)
    }

    /// Returns `self - origin` measured along the reversed sequence, or `None` if the two cursors
    /// belong to different deques.
    pub fn distance(&self, origin: &Self) -> Option<isize> {
        origin.base.distance(&self.base)
    }
}

impl<'a, T> RevCursor<CursorMut<'a, T>> {
    pub fn get(&self) -> Result<&T, DequeError> {
        self.base.at(-1)
    }

    pub fn get_mut(&mut self) -> Result<&mut T, DequeError> {
        self.base.at_mut(-1)
    }

    pub fn at(&self, n: isize) -> Result<&T, DequeError> {
        self.base.at(-1 - n)
    }

    pub fn at_mut(&mut self, n: isize) -> Result<&mut T, DequeError> {
        self.base.at_mut(-1 - n)
    }
}

impl<C: PartialOrd> PartialOrd for RevCursor<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.base.partial_cmp(&self.base)
    }
}

impl<C: Position> Position for RevCursor<C> {
    fn offset(&self) -> isize {
        self.base.offset().saturating_neg()
    }

    fn advance(&mut self, n: isize) {
        self.base.advance(n.saturating_neg());
    }
}

impl<C: Position> AddAssign<isize> for RevCursor<C> {
    fn add_assign(&mut self, n: isize) {
        self.base.advance(n.saturating_neg());
    }
}

impl<C: Position> SubAssign<isize> for RevCursor<C> {
    fn sub_assign(&mut self, n: isize) {
        self.base.advance(n);
    }
}

impl<C: Position> Add<isize> for RevCursor<C> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<'a, T> Add<RevCursor<Cursor<'a, T>>> for isize {
    type Output = RevCursor<Cursor<'a, T>>;

    fn add(self, cursor: RevCursor<Cursor<'a, T>>) -> RevCursor<Cursor<'a, T>> {
        cursor + self
    }
}

impl<C: Position> Sub<isize> for RevCursor<C> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<T> Sub for RevCursor<Cursor<'_, T>> {
    type Output = isize;

    /// # Panics
    ///
    /// Panics if the cursors belong to different deques.
    fn sub(self, origin: Self) -> isize {
        self.distance(&origin).unwrap_or_else(|| foreign_cursor())
    }
}

#[cold]
fn foreign_cursor() -> ! {
    panic!("cannot measure the distance between cursors of different deques");
}
