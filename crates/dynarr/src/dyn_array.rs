// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr;
use core::slice::{self, SliceIndex};

use crate::error::{DynArrayError, handle_error};
use crate::raw_buffer::RawBuffer;
use crate::reserve_hint::ReserveHint;

/// Capacity of the first block allocated by a growing insertion.
const MIN_NON_ZERO_CAPACITY: usize = 1;

/// Factor applied to the capacity when an insertion finds the buffer full.
const GROWTH_FACTOR: usize = 2;

/// Test behaviour for injecting failures in `DynArray` allocations.
///
/// This is only available with the `test_utils` feature and allows users
/// to exercise the error paths of the `try_*` methods.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust,ignore
/// // test_utils feature required in dev-dependencies
/// use dynarr::{DynArray, DynArrayBehaviour, DynArrayError};
///
/// #[cfg(test)]
/// mod tests {
///     use super::*;
///
///     #[test]
///     fn test_handles_alloc_failure() -> Result<(), DynArrayError> {
///         let mut array = DynArray::<u8>::new();
///         array.change_behaviour(DynArrayBehaviour::FailAtAlloc);
///
///         assert!(array.try_push_back(1).is_err());
///         assert_eq!(array.capacity(), 0);
///
///         array.change_behaviour(DynArrayBehaviour::None);
///         array.try_push_back(1)?;
///         Ok(())
///     }
/// }
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DynArrayBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every new buffer allocation fails with `AllocFailed`.
    FailAtAlloc,
}

/// A growable array that owns one contiguous heap block.
///
/// Slots `[0, len)` hold initialized elements; slots `[len, capacity)` are
/// allocated but uninitialized. When an insertion finds the buffer full, the
/// capacity doubles (starting at 1); [`reserve`](Self::reserve) grows to an exact
/// capacity. Capacity never shrinks, not even on [`clear`](Self::clear).
///
/// Borrowed traversal handles (`iter()`, slices, element references) are tied
/// to the buffer. Any reallocating call (`reserve`, `resize`, a growing
/// `push_back` or `insert`) or shifting call (`insert`, `erase`) needs
/// `&mut self`, so the borrow checker rejects keeping a handle across it.
///
/// # Example
///
/// ```rust
/// use dynarr::DynArray;
///
/// let mut array = DynArray::new();
/// for value in 1..=5 {
///     array.push_back(value);
/// }
///
/// assert_eq!(array.len(), 5);
/// assert_eq!(array.capacity(), 8);
/// assert_eq!(array.pop_back(), Some(5));
/// ```
pub struct DynArray<T> {
    buf: RawBuffer<T>,
    len: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: DynArrayBehaviour,
}

#[inline(always)]
fn trace_realloc(old_capacity: usize, new_capacity: usize, len: usize) {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        old_capacity,
        new_capacity,
        len,
        "dynarr: relocating elements to a new buffer"
    );

    #[cfg(not(feature = "tracing"))]
    let _ = (old_capacity, new_capacity, len);
}

impl<T> DynArray<T> {
    fn try_allocate_buffer(&self, capacity: usize) -> Result<RawBuffer<T>, DynArrayError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, DynArrayBehaviour::FailAtAlloc) && capacity != 0 {
            let layout = RawBuffer::<T>::layout_for(capacity)?;
            return Err(DynArrayError::AllocFailed { layout });
        }

        RawBuffer::try_allocate(capacity)
    }

    fn grown_capacity(&self) -> Result<usize, DynArrayError> {
        match self.capacity() {
            0 => Ok(MIN_NON_ZERO_CAPACITY),
            capacity => capacity
                .checked_mul(GROWTH_FACTOR)
                .ok_or(DynArrayError::CapacityOverflow),
        }
    }

    /// Moves the live elements into `new_buf` and releases the old block.
    fn adopt_buffer(&mut self, mut new_buf: RawBuffer<T>) {
        debug_assert!(new_buf.capacity() >= self.len);
        trace_realloc(self.capacity(), new_buf.capacity(), self.len);

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): both blocks hold at least len slots and are
            // distinct allocations; the old slots are treated as moved-from afterwards.
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
        }

        // The old handle only frees memory, its elements now live in new_buf.
        self.buf = new_buf;
    }

    /// Writes `value` into the first free slot.
    ///
    /// # Safety
    ///
    /// `len < capacity` must hold.
    #[inline]
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());

        unsafe {
            // SAFETY: the caller guarantees the slot at len is allocated and free.
            ptr::write(self.buf.as_mut_ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Creates a new empty `DynArray` without allocating.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarr::DynArray;
    ///
    /// let array: DynArray<u8> = DynArray::new();
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: DynArrayBehaviour::None,
        }
    }

    /// Creates an empty `DynArray` with exactly `capacity` allocated slots.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through `handle_alloc_error` if the
    /// allocator fails.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|err| handle_error(err))
    }

    /// Fallible version of [`with_capacity`](Self::with_capacity).
    ///
    /// # Errors
    ///
    /// Returns [`DynArrayError::CapacityOverflow`] or [`DynArrayError::AllocFailed`].
    pub fn try_with_capacity(capacity: usize) -> Result<Self, DynArrayError> {
        let mut array = Self::new();
        array.buf = RawBuffer::try_allocate(capacity)?;
        Ok(array)
    }

    /// Creates an empty `DynArray` pre-allocated to the hint's capacity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarr::{DynArray, reserve_hint};
    ///
    /// let array: DynArray<i32> = DynArray::with_reserve_hint(reserve_hint(5));
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), 5);
    /// ```
    pub fn with_reserve_hint(hint: ReserveHint) -> Self {
        Self::with_capacity(hint.capacity())
    }

    /// Creates a `DynArray` holding `count` copies of `value`, with
    /// `capacity() == count`. A zero count allocates nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarr::DynArray;
    ///
    /// let array = DynArray::from_elem(7u16, 3);
    /// assert_eq!(array, [7, 7, 7]);
    /// assert_eq!(array.capacity(), 3);
    /// ```
    pub fn from_elem(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(count);
        if count == 0 {
            return array;
        }

        for _ in 1..count {
            // SAFETY: at most count - 1 elements written into count slots.
            unsafe { array.push_unchecked(value.clone()) };
        }
        // SAFETY: exactly one slot left.
        unsafe { array.push_unchecked(value) };

        array
    }

    /// Creates a `DynArray` of `count` default values, with `capacity() == count`.
    pub fn with_len(count: usize) -> Self
    where
        T: Default,
    {
        let mut array = Self::with_capacity(count);
        array.resize_with(count, T::default);
        array
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    ///
    /// The returned array owns the buffer; `self` owns nothing and stays usable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarr::dynarr;
    ///
    /// let mut source = dynarr![1, 2, 3];
    /// let moved = source.take();
    ///
    /// assert_eq!(moved, [1, 2, 3]);
    /// assert_eq!(source.len(), 0);
    /// assert_eq!(source.capacity(), 0);
    ///
    /// source.push_back(4);
    /// assert_eq!(source, [4]);
    /// ```
    pub fn take(&mut self) -> Self {
        let mut taken = Self::new();
        taken.buf = mem::take(&mut self.buf);
        taken.len = mem::replace(&mut self.len, 0);
        taken
    }

    /// Returns the number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` if the array contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the array owns a block obtained from the allocator.
    ///
    /// Always `false` at zero capacity, and for zero-sized `T`.
    pub fn has_buffer(&self) -> bool {
        self.buf.is_allocated()
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is initialized; the pointer is non-null and aligned
        // even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for as_slice, with unique access through &mut self.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns a raw pointer to the buffer.
    ///
    /// The pointer is invalidated by any call that reallocates. It is dangling
    /// (but non-null and aligned) while `has_buffer()` is `false`.
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a raw mutable pointer to the buffer.
    ///
    /// Same validity rules as [`as_ptr`](Self::as_ptr).
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Returns a forward traversal handle over `[0, len)`.
    ///
    /// The handle borrows the array, so no reallocating or shifting call can
    /// happen while it is alive:
    ///
    /// ```compile_fail
    /// use dynarr::dynarr;
    ///
    /// let mut array = dynarr![1, 2, 3];
    /// let mut handle = array.iter();
    /// array.push_back(4); // reallocates: rejected while `handle` is alive
    /// handle.next();
    /// ```
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable forward traversal handle over `[0, len)`.
    ///
    /// ```compile_fail
    /// use dynarr::dynarr;
    ///
    /// let mut array = dynarr![1, 2, 3];
    /// let mut handle = array.iter_mut();
    /// array.erase(0); // shifts elements: rejected while `handle` is alive
    /// handle.next();
    /// ```
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a reference to the element at `index`, checking bounds.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrayError::OutOfRange`] if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarr::{DynArrayError, dynarr};
    ///
    /// let array = dynarr![10, 20];
    /// assert_eq!(array.at(1), Ok(&20));
    /// assert_eq!(array.at(2), Err(DynArrayError::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, DynArrayError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(DynArrayError::OutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`, checking bounds.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrayError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, DynArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(DynArrayError::OutOfRange { index, len })
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < len()` must hold. Violations are undefined behaviour; debug
    /// builds assert.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "DynArray::get_unchecked: index out of range");
        // SAFETY: the caller guarantees index < len.
        unsafe { &*self.buf.as_ptr().add(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < len()` must hold.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "DynArray::get_unchecked_mut: index out of range"
        );
        // SAFETY: the caller guarantees index < len.
        unsafe { &mut *self.buf.as_mut_ptr().add(index) }
    }

    /// Grows the buffer to exactly `new_capacity` slots.
    ///
    /// Does nothing if `new_capacity <= capacity()`. Length and element order
    /// are unchanged.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through `handle_alloc_error` if the
    /// allocator fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarr::dynarr;
    ///
    /// let mut array = dynarr![1, 2, 3];
    /// array.reserve(100);
    ///
    /// assert_eq!(array.len(), 3);
    /// assert_eq!(array.capacity(), 100);
    /// assert_eq!(array, [1, 2, 3]);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_reserve(new_capacity) {
            handle_error(err);
        }
    }

    /// Fallible version of [`reserve`](Self::reserve).
    ///
    /// The new block is allocated before anything is moved, so on error the
    /// array is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrayError::CapacityOverflow`] or [`DynArrayError::AllocFailed`].
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), DynArrayError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        let new_buf = self.try_allocate_buffer(new_capacity)?;
        self.adopt_buffer(new_buf);

        Ok(())
    }

    /// Resizes the array to `new_len`, filling new slots with `T::default()`.
    ///
    /// - Shrinking drops the elements past `new_len` and keeps the capacity.
    /// - Growing within capacity default-fills the new slots in place.
    /// - Growing past capacity reallocates to `max(new_len, 2 * len())` first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarr::dynarr;
    ///
    /// let mut array = dynarr![1, 2, 3];
    /// array.resize(7);
    /// assert_eq!(array, [1, 2, 3, 0, 0, 0, 0]);
    /// assert_eq!(array.capacity(), 7);
    ///
    /// array.resize(2);
    /// assert_eq!(array, [1, 2]);
    /// assert_eq!(array.capacity(), 7);
    /// ```
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes the array to `new_len`, filling new slots with values from `fill`.
    ///
    /// Same capacity rules as [`resize`](Self::resize).
    pub fn resize_with<F>(&mut self, new_len: usize, mut fill: F)
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        if new_len > self.capacity() {
            let doubled = self.len.checked_mul(GROWTH_FACTOR).unwrap_or(new_len);
            self.reserve(new_len.max(doubled));
        }

        while self.len < new_len {
            // SAFETY: len < new_len <= capacity.
            unsafe { self.push_unchecked(fill()) };
        }
    }

    /// Drops the elements past `new_len`. Capacity is unchanged.
    ///
    /// Does nothing if `new_len >= len()`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        let tail_len = self.len - new_len;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): [new_len, len) is initialized. len is
            // lowered first so a panicking destructor cannot cause a double drop.
            let tail = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().add(new_len), tail_len);
            self.len = new_len;
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element. Capacity and buffer are kept for reuse.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarr::dynarr;
    ///
    /// let mut array = dynarr![1, 2, 3];
    /// array.clear();
    ///
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 3);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Appends `value`, doubling the capacity (starting at 1) when full.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through `handle_alloc_error` if the
    /// allocator fails.
    pub fn push_back(&mut self, value: T) {
        if let Err(err) = self.try_push_back(value) {
            handle_error(err);
        }
    }

    /// Fallible version of [`push_back`](Self::push_back).
    ///
    /// On error the array is unchanged and `value` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrayError::CapacityOverflow`] or [`DynArrayError::AllocFailed`].
    pub fn try_push_back(&mut self, value: T) -> Result<(), DynArrayError> {
        self.try_insert(self.len, value).map(|_| ())
    }

    /// Removes and returns the last element, or `None` if the array is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: the slot at the old len - 1 was initialized and is now outside [0, len).
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.len)) })
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot toward the end.
    ///
    /// Returns a mutable reference to the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`, or under the conditions of [`push_back`](Self::push_back).
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarr::dynarr;
    ///
    /// let mut array = dynarr![1, 3];
    /// *array.insert(1, 2) *= 10;
    /// assert_eq!(array, [1, 20, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        match self.try_insert(index, value) {
            Ok(slot) => slot,
            Err(err) => handle_error(err),
        }
    }

    /// Fallible version of [`insert`](Self::insert).
    ///
    /// When the buffer is full the new block is allocated first: elements before
    /// `index` go to the same slots, `value` goes to `index`, the rest follow it.
    ///
    /// # Errors
    ///
    /// - [`DynArrayError::OutOfRange`] if `index > len()`.
    /// - [`DynArrayError::CapacityOverflow`] or [`DynArrayError::AllocFailed`] when
    ///   growth fails; the array is unchanged.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, DynArrayError> {
        let len = self.len;

        if index > len {
            return Err(DynArrayError::OutOfRange { index, len });
        }

        if len < self.capacity() {
            unsafe {
                // SAFETY (PRECONDITIONS ARE MET): index <= len < capacity, so the
                // shifted range [index + 1, len + 1) stays inside the block.
                let slot = self.buf.as_mut_ptr().add(index);
                ptr::copy(slot, slot.add(1), len - index);
                ptr::write(slot, value);
            }
        } else {
            let mut new_buf = self.try_allocate_buffer(self.grown_capacity()?)?;
            trace_realloc(self.capacity(), new_buf.capacity(), len);

            unsafe {
                // SAFETY (PRECONDITIONS ARE MET): new_buf has capacity > len, the two
                // blocks are distinct, and every old element is copied exactly once.
                let src = self.buf.as_ptr();
                let dst = new_buf.as_mut_ptr();
                ptr::copy_nonoverlapping(src, dst, index);
                ptr::write(dst.add(index), value);
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), len - index);
            }

            self.buf = new_buf;
        }

        self.len = len + 1;

        // SAFETY: index < len after the insertion.
        Ok(unsafe { &mut *self.buf.as_mut_ptr().add(index) })
    }

    /// Removes and returns the element at `index`, shifting the tail toward the start.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;

        if index >= len {
            handle_error(DynArrayError::OutOfRange { index, len });
        }

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): index < len; the value is read out
            // before its slot is overwritten by the shifted tail.
            let slot = self.buf.as_mut_ptr().add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Drops the element at `index` and closes the gap.
    ///
    /// Returns the position of the successor, which is `index` itself (equal to
    /// `len()` when the last element was erased). Never reallocates.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarr::dynarr;
    ///
    /// let mut array = dynarr![1, 2, 3, 4];
    /// let next = array.erase(0);
    ///
    /// assert_eq!(next, 0);
    /// assert_eq!(array[next], 2);
    /// assert_eq!(array.capacity(), 4);
    /// ```
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Exchanges buffer, length and capacity with `other` in constant time.
    ///
    /// No element is moved or copied.
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Changes the test behaviour for this array.
    ///
    /// This is only available with the `test_utils` feature and allows injecting
    /// allocation failures for testing error handling paths.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynArrayBehaviour) {
        self.behaviour = behaviour;
    }

    pub(crate) fn take_buffer(&mut self) -> (RawBuffer<T>, usize) {
        let len = mem::replace(&mut self.len, 0);
        (mem::take(&mut self.buf), len)
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): [0, len) is initialized and dropped
            // exactly once here; RawBuffer frees the block afterwards.
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr(),
                self.len,
            ));
        }
    }
}

impl<T: Clone> Clone for DynArray<T> {
    /// Deep copy with the same capacity as `self`.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());

        for item in self.iter() {
            // SAFETY: copy has capacity() >= len() slots.
            unsafe { copy.push_unchecked(item.clone()) };
        }

        copy
    }

    /// Copy assignment.
    ///
    /// Reuses the existing buffer when `source` fits in it. Otherwise a full
    /// copy is built first and swapped in, so a panicking `clone` leaves `self`
    /// untouched.
    fn clone_from(&mut self, source: &Self) {
        if source.len > self.capacity() {
            let mut replacement = source.clone();
            self.swap_with(&mut replacement);
            return;
        }

        self.truncate(source.len);

        let (prefix, suffix) = source.as_slice().split_at(self.len);
        self.as_mut_slice().clone_from_slice(prefix);

        for item in suffix {
            // SAFETY: source.len <= capacity.
            unsafe { self.push_unchecked(item.clone()) };
        }
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DynArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for DynArray<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynArray<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}
