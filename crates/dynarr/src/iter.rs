// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::FusedIterator;
use core::ptr;
use core::slice;

use crate::dyn_array::DynArray;
use crate::raw_buffer::RawBuffer;

/// Owning iterator over the elements of a [`DynArray`].
///
/// Takes the buffer over from the array; elements not yielded are dropped
/// together with the iterator.
///
/// # Example
///
/// ```rust
/// use dynarr::dynarr;
///
/// let array = dynarr![String::from("a"), String::from("b"), String::from("c")];
/// let mut iter = array.into_iter();
///
/// assert_eq!(iter.next().as_deref(), Some("a"));
/// assert_eq!(iter.next_back().as_deref(), Some("c"));
/// assert_eq!(iter.len(), 1);
/// ```
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    // Live elements occupy [head, tail).
    head: usize,
    tail: usize,
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [head, tail) is initialized and owned by the iterator.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.head), self.tail - self.head) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }

        // SAFETY: head < tail, so the slot is initialized; head moves past it.
        let value = unsafe { ptr::read(self.buf.as_ptr().add(self.head)) };
        self.head += 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tail - self.head;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }

        self.tail -= 1;
        // SAFETY: the old tail - 1 is initialized and now outside [head, tail).
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.tail)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.tail - self.head;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): [head, tail) holds the elements never
            // yielded. The range is emptied first so a panicking destructor cannot
            // cause a double drop.
            let rest = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().add(self.head), remaining);
            self.head = self.tail;
            ptr::drop_in_place(rest);
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let (buf, len) = self.take_buffer();

        IntoIter {
            buf,
            head: 0,
            tail: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
