use std::mem;
use std::ops::{Deref, DerefMut, Range};

use crate::DequeError;

/// The owned slot array behind a [`Deque`](crate::Deque).
///
/// Every slot always holds a valid `T`. Slots outside the deque's logical window hold
/// `T::default()`, so the buffer never needs to track which slots are initialized.
#[derive(Clone)]
pub(crate) struct Buffer<T> {
    slots: Box<[T]>,
}

impl<T: Default> Buffer<T> {
    /// Allocates `capacity` default slots, aborting on allocation failure like `Vec` does.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let slots = (0..capacity).map(|_| T::default()).collect();
        Self { slots }
    }

    /// Allocates `capacity` default slots, reporting allocation failure instead of aborting.
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, DequeError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| DequeError::Allocation { capacity })?;
        slots.resize_with(capacity, T::default);
        Ok(Self { slots: slots.into_boxed_slice() })
    }

    /// Moves the elements in `window` into a freshly allocated buffer of `capacity` slots, placing
    /// them at `offset`, and adopts the new buffer. The old buffer is dropped afterwards.
    ///
    /// On allocation failure `self` is left untouched.
    ///
    /// `offset + window.len()` must not exceed `capacity`.
    pub(crate) fn relocate(
        &mut self,
        window: Range<usize>,
        capacity: usize,
        offset: usize,
    ) -> Result<(), DequeError> {
        debug_assert!(offset + window.len() <= capacity);
        let fresh = Self::try_with_capacity(capacity)?;
        let mut old = mem::replace(self, fresh);
        let len = window.len();
        for (dst, src) in self.slots[offset..offset + len].iter_mut().zip(&mut old.slots[window]) {
            *dst = mem::take(src);
        }
        Ok(())
    }
}

impl<T> Buffer<T> {
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn into_boxed_slice(self) -> Box<[T]> {
        self.slots
    }
}

impl<T> Deref for Buffer<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.slots
    }
}

impl<T> DerefMut for Buffer<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }
}
